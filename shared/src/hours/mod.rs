//! Opening-hours grammar
//!
//! Turns human-written hours strings into a weekly schedule:
//!
//! ```text
//! "Mon-Fri 9 am-5 pm / Sat,Sun 10 am-2 pm"
//!   └─ segment ─────┘   └─ segment ──────┘
//!    days  open  close
//! ```
//!
//! - [`parse_time`] reads one clock token ("11:00 am", "11 am")
//! - [`expand_days`] reads day lists and wrapping ranges ("Sat-Tues")
//! - [`parse_hours`] builds the ordered [`ScheduleEntry`] list
//! - [`is_open_at`] answers a weekday + clock time query
//!
//! # Example
//!
//! ```
//! use shared::hours::{ClockTime, Weekday, is_open_at, parse_hours};
//!
//! let schedule = parse_hours("Mon-Fri 9 am-5 pm / Sat,Sun 10 am-2 pm").unwrap();
//! assert_eq!(schedule.len(), 7);
//! assert!(is_open_at(&schedule, Weekday::Wed, ClockTime::from_hm(12, 0).unwrap()));
//! assert!(!is_open_at(&schedule, Weekday::Sat, ClockTime::from_hm(15, 0).unwrap()));
//! ```

mod clock;
mod days;
mod error;
mod schedule;
mod time;
mod weekday;

pub use clock::ClockTime;
pub use days::{expand_day_range, expand_days};
pub use error::HoursParseError;
pub use schedule::{
    ParsedHours, ScheduleEntry, SegmentOutcome, SkipReason, is_open_at, parse_hours,
    parse_hours_detailed,
};
pub use time::{TimeToken, parse_time};
pub use weekday::Weekday;
