use crate::Attendance;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct PollResult {
    pub name: String,

    pub description: String,

    /// `YYYYMMDD` strings, in the order the service sent them.
    pub dates: Vec<String>,

    pub responses: Vec<Participant>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub name: String,

    /// Dates missing from the map are `Attendance::None`.
    pub availability: HashMap<String, Attendance>,
}

impl Participant {
    /// Merges both date lists into one map. A date listed as both OK and
    /// if-need-be is OK.
    pub fn new<S: Into<String>>(name: S, ok_dates: &[String], ifneedbe_dates: &[String]) -> Self {
        let mut availability = HashMap::new();
        for date in ifneedbe_dates {
            availability.insert(date.clone(), Attendance::IfNeedBe);
        }
        for date in ok_dates {
            availability.insert(date.clone(), Attendance::Ok);
        }

        Participant {
            name: name.into(),
            availability,
        }
    }

    pub fn attendance(&self, date: &str) -> Attendance {
        self.availability.get(date).copied().unwrap_or_default()
    }
}
