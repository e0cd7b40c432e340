//! Calendar months as reported in the `Event Month` column.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reporting month, ordered January through December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventMonth {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl EventMonth {
    pub const ALL: [EventMonth; 12] = [
        EventMonth::January,
        EventMonth::February,
        EventMonth::March,
        EventMonth::April,
        EventMonth::May,
        EventMonth::June,
        EventMonth::July,
        EventMonth::August,
        EventMonth::September,
        EventMonth::October,
        EventMonth::November,
        EventMonth::December,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EventMonth::January => "January",
            EventMonth::February => "February",
            EventMonth::March => "March",
            EventMonth::April => "April",
            EventMonth::May => "May",
            EventMonth::June => "June",
            EventMonth::July => "July",
            EventMonth::August => "August",
            EventMonth::September => "September",
            EventMonth::October => "October",
            EventMonth::November => "November",
            EventMonth::December => "December",
        }
    }
}

impl fmt::Display for EventMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventMonth {
    type Err = String;

    /// Accepts full English month names only (case-sensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        EventMonth::ALL
            .into_iter()
            .find(|month| month.name() == trimmed)
            .ok_or_else(|| format!("unknown event month: {trimmed}"))
    }
}
