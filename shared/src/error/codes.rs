//! Numeric error codes
//!
//! Codes are grouped by range: 0xxx request, 1xxx hours grammar,
//! 2xxx restaurant data, 9xxx system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every code the service can answer with. Serialized as its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ----- 0xxx: request -----
    /// Query value present but not in the expected shape
    InvalidFormat = 6,
    /// Query parameter absent or empty
    RequiredField = 7,

    // ----- 1xxx: hours grammar -----
    /// Day token is not a known weekday
    UnknownWeekday = 1001,
    /// Time token matches neither clock format
    InvalidTime = 1002,

    // ----- 2xxx: restaurant -----
    RestaurantNotFound = 2001,
    /// Source JSON is not a list of restaurant records
    InvalidRestaurantRecord = 2002,

    // ----- 9xxx: system -----
    /// Restaurant data file could not be read
    DataLoadFailed = 9006,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 7] = [
        ErrorCode::InvalidFormat,
        ErrorCode::RequiredField,
        ErrorCode::UnknownWeekday,
        ErrorCode::InvalidTime,
        ErrorCode::RestaurantNotFound,
        ErrorCode::InvalidRestaurantRecord,
        ErrorCode::DataLoadFailed,
    ];

    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A number outside the known code table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|code| code.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}
