use crate::layout::Layout;
use crate::Attendance;
use std::collections::HashMap;

/// Per-date totals, filled in while the participant rows are rendered.
#[derive(Debug, Default, Clone)]
pub struct Tally {
    ok: HashMap<String, usize>,
    if_need_be: HashMap<String, usize>,
}

impl Tally {
    pub fn record(&mut self, date: &str, attendance: Attendance) {
        let counts = match attendance {
            Attendance::Ok => &mut self.ok,
            Attendance::IfNeedBe => &mut self.if_need_be,
            Attendance::None => return,
        };
        *counts.entry(date.to_string()).or_insert(0) += 1;
    }

    pub fn ok(&self, date: &str) -> usize {
        self.ok.get(date).copied().unwrap_or(0)
    }

    pub fn if_need_be(&self, date: &str) -> usize {
        self.if_need_be.get(date).copied().unwrap_or(0)
    }

    /// Footer line of OK counts. The margin is one narrower than the
    /// headings; the cell format makes up for it.
    pub fn ok_row(&self, layout: &Layout) -> String {
        let mut row = " ".repeat(layout.name_width);
        for column in &layout.columns {
            row.push_str(&format!("   {:2}", self.ok(&column.date)));
        }
        row
    }

    /// Footer line of `+N` if-need-be counts, blank where there are none.
    pub fn if_need_be_row(&self, layout: &Layout) -> String {
        let mut row = " ".repeat(layout.name_width);
        for column in &layout.columns {
            match self.if_need_be(&column.date) {
                0 => row.push_str("     "),
                n => row.push_str(&format!("  {:>3}", format!("+{}", n))),
            }
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::DateColumn;

    fn layout(name_width: usize, dates: &[&str]) -> Layout {
        Layout {
            name_width,
            columns: dates.iter().map(|d| DateColumn::parse(d).unwrap()).collect(),
        }
    }

    #[test]
    fn none_is_not_counted() {
        let mut tally = Tally::default();
        tally.record("20240101", Attendance::None);
        tally.record("20240101", Attendance::Ok);
        tally.record("20240101", Attendance::Ok);
        tally.record("20240101", Attendance::IfNeedBe);
        assert_eq!(tally.ok("20240101"), 2);
        assert_eq!(tally.if_need_be("20240101"), 1);
        assert_eq!(tally.ok("20240102"), 0);
    }

    #[test]
    fn footer_rows() {
        let layout = layout(2, &["20240101", "20240102"]);
        let mut tally = Tally::default();
        tally.record("20240101", Attendance::Ok);
        tally.record("20240102", Attendance::IfNeedBe);
        tally.record("20240102", Attendance::IfNeedBe);

        assert_eq!(tally.ok_row(&layout), "      1    0");
        assert_eq!(tally.if_need_be_row(&layout), "          +2");
    }
}
