//! Restaurant Model

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::hours::{self, ClockTime, HoursParseError, ScheduleEntry, Weekday};

/// Source record as it appears in the restaurants JSON file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    #[serde(rename = "Restaurant Name")]
    pub name: String,
    #[serde(rename = "Hours")]
    pub hours: String,
}

/// Restaurant with its parsed weekly schedule
///
/// Built once from a [`RestaurantRecord`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    /// Hours string as written in the source record
    pub hours: String,
    pub schedule: Vec<ScheduleEntry>,
}

impl Restaurant {
    pub fn new(
        name: impl Into<String>,
        hours: impl Into<String>,
    ) -> Result<Self, HoursParseError> {
        let hours = hours.into();
        let schedule = hours::parse_hours(&hours)?;
        Ok(Self {
            name: name.into(),
            hours,
            schedule,
        })
    }

    /// Open on `day` at `time` (see [`hours::is_open_at`] for the matching
    /// rules)
    pub fn is_open_on(&self, day: Weekday, time: ClockTime) -> bool {
        hours::is_open_at(&self.schedule, day, time)
    }

    /// Open at a wall-clock instant; seconds are ignored
    pub fn is_open_at(&self, at: NaiveDateTime) -> bool {
        self.is_open_on(Weekday::from(at.weekday()), ClockTime::from(at.time()))
    }
}

impl TryFrom<RestaurantRecord> for Restaurant {
    type Error = HoursParseError;

    fn try_from(record: RestaurantRecord) -> Result<Self, Self::Error> {
        Self::new(record.name, record.hours)
    }
}
