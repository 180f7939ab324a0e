//! Shared types for the opening-hours service
//!
//! Hours grammar parsing, the restaurant model and the unified error
//! envelope used by the HTTP server.

pub mod error;
pub mod hours;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode, ErrorResponse};
pub use hours::{
    ClockTime, HoursParseError, ParsedHours, ScheduleEntry, SegmentOutcome, SkipReason,
    TimeToken, Weekday, is_open_at, parse_hours, parse_hours_detailed, parse_time,
};
pub use models::{Restaurant, RestaurantRecord};
