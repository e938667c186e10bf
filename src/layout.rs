//! Column geometry and date headings for the attendance grid.

use crate::{Error, PollResult};
use chrono::{Datelike, NaiveDate};

/// Width of every per-date cell: headings, attendance markers and totals.
pub const CELL_WIDTH: usize = 5;

/// One date of the poll, parsed and split into its three heading lines.
#[derive(Debug, Clone, PartialEq)]
pub struct DateColumn {
    pub date: String,

    pub weekday: String,

    pub day: u32,

    pub month: String,
}

impl DateColumn {
    pub fn parse(date: &str) -> Result<DateColumn, Error> {
        // chrono accepts short numeric fields, so the shape is checked first.
        if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidDateFormat(date.to_string()));
        }

        let parsed = match NaiveDate::parse_from_str(date, "%Y%m%d") {
            Ok(parsed) => parsed,
            Err(_) => return Err(Error::InvalidDateFormat(date.to_string())),
        };

        Ok(DateColumn {
            date: date.to_string(),
            weekday: parsed.format("%a").to_string(),
            day: parsed.day(),
            month: parsed.format("%b").to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Length in characters of the longest participant name.
    pub name_width: usize,

    pub columns: Vec<DateColumn>,
}

impl Layout {
    /// Fails on the first date that is not `YYYYMMDD`.
    pub fn new(poll: &PollResult) -> Result<Layout, Error> {
        let name_width = poll
            .responses
            .iter()
            .map(|p| p.name.chars().count())
            .max()
            .unwrap_or(0);

        let mut columns = Vec::with_capacity(poll.dates.len());
        for date in &poll.dates {
            columns.push(DateColumn::parse(date)?);
        }

        Ok(Layout {
            name_width,
            columns,
        })
    }

    /// Weekday, day-of-month and month lines, in that order.
    pub fn header_rows(&self) -> [String; 3] {
        let margin = " ".repeat(self.name_width + 1);
        let mut weekdays = margin.clone();
        let mut days = margin.clone();
        let mut months = margin;

        for column in &self.columns {
            weekdays.push_str(&format!(" {:>4}", column.weekday));
            days.push_str(&format!("  {:02} ", column.day));
            months.push_str(&format!(" {:>4}", column.month));
        }

        [weekdays, days, months]
    }

    pub fn pad_name(&self, name: &str) -> String {
        format!("{:>width$}", name, width = self.name_width)
    }
}
