/// How a participant answered for a single date.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Attendance {
    None,
    IfNeedBe,
    Ok,
}

impl Default for Attendance {
    fn default() -> Self {
        Attendance::None
    }
}
