//! Canonical weekday labels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::HoursParseError;

/// Day of the week in canonical order (Mon first).
///
/// Labels are the abbreviations used by the hours strings: note the
/// four-letter `Tues`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tues,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

/// Natural three-letter abbreviations (as produced by calendar formatting)
/// mapped onto canonical labels.
const NATURAL_ABBREVIATIONS: [(&str, Weekday); 7] = [
    ("Mon", Weekday::Mon),
    ("Tue", Weekday::Tues),
    ("Wed", Weekday::Wed),
    ("Thu", Weekday::Thu),
    ("Fri", Weekday::Fri),
    ("Sat", Weekday::Sat),
    ("Sun", Weekday::Sun),
];

impl Weekday {
    /// All days in canonical order
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tues,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Canonical label as written in hours strings
    pub const fn label(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tues => "Tues",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }

    /// Position in the canonical order (Mon = 0)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Exact, case-sensitive match against the canonical labels
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.label() == label)
    }

    /// Map a natural abbreviation (`Tue`, not `Tues`) to the canonical day
    pub fn from_natural_abbrev(abbrev: &str) -> Option<Self> {
        NATURAL_ABBREVIATIONS
            .iter()
            .find(|(natural, _)| *natural == abbrev)
            .map(|(_, day)| *day)
    }

    /// Days from `start` to `end` inclusive, wrapping past Sun when `end`
    /// comes before `start`.
    pub fn span(start: Weekday, end: Weekday) -> Vec<Weekday> {
        let len = (end.index() + Self::ALL.len() - start.index()) % Self::ALL.len() + 1;
        Self::ALL
            .iter()
            .cycle()
            .skip(start.index())
            .take(len)
            .copied()
            .collect()
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        // chrono renders the natural abbreviation ("Tue")
        Self::from_natural_abbrev(&day.to_string())
            .unwrap_or(Self::ALL[day.num_days_from_monday() as usize])
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the canonical label or the natural abbreviation (`Tue`).
impl FromStr for Weekday {
    type Err = HoursParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
            .or_else(|| Self::from_natural_abbrev(s))
            .ok_or_else(|| HoursParseError::UnknownWeekday {
                token: s.to_string(),
            })
    }
}
