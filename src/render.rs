//! Text rendering of a poll as an attendance grid.

use crate::layout::Layout;
use crate::{Attendance, Error, PollResult, Tally};

const CHECK_MARK: &str = "\u{2713}";

/// Escape sequences used for marked cells. With `color` off the cells are
/// written without any escapes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub color: bool,

    pub ok_style: String,

    pub if_need_be_style: String,

    pub reset: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            color: true,
            // Green, reverse video.
            ok_style: String::from("\x1b[32m\x1b[7m"),
            // Yellow, reverse video.
            if_need_be_style: String::from("\x1b[33m\x1b[7m"),
            reset: String::from("\x1b[0m"),
        }
    }
}

impl RenderConfig {
    pub fn plain() -> Self {
        RenderConfig {
            color: false,
            ..RenderConfig::default()
        }
    }

    fn paint(&self, style: &str, cell: &str) -> String {
        if self.color {
            format!("{}{}{}", style, cell, self.reset)
        } else {
            cell.to_string()
        }
    }

    fn cell(&self, attendance: Attendance) -> String {
        match attendance {
            Attendance::Ok => self.paint(&self.ok_style, &format!("  {}  ", CHECK_MARK)),
            Attendance::IfNeedBe => {
                self.paint(&self.if_need_be_style, &format!(" ({}) ", CHECK_MARK))
            }
            Attendance::None => String::from("     "),
        }
    }
}

/// Renders the whole report. Dates are validated before any text is
/// produced, so a bad date yields no partial table.
pub fn render(poll: &PollResult, config: &RenderConfig) -> Result<String, Error> {
    let layout = Layout::new(poll)?;
    let mut lines = vec![poll.name.clone(), poll.description.clone(), String::new()];

    lines.extend(layout.header_rows().iter().cloned());
    lines.push(String::new());

    let mut tally = Tally::default();
    for participant in &poll.responses {
        let mut row = layout.pad_name(&participant.name);
        row.push_str("  ");
        for column in &layout.columns {
            let attendance = participant.attendance(&column.date);
            tally.record(&column.date, attendance);
            row.push_str(&config.cell(attendance));
        }
        lines.push(row);
    }
    lines.push(String::new());

    lines.push(tally.ok_row(&layout));
    lines.push(tally.if_need_be_row(&layout));

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}
