//! Error system for the opening-hours service
//!
//! - [`ErrorCode`]: numeric codes, grouped by range
//! - [`ErrorCategory`]: range the code falls in
//! - [`AppError`]: code + message + details, renders as [`ErrorResponse`]
//!
//! # Code ranges
//!
//! - 0xxx: request errors
//! - 1xxx: hours grammar errors
//! - 2xxx: restaurant data errors
//! - 9xxx: system errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorResponse};
//!
//! let err = AppError::invalid_format("Invalid datetime").with_detail("datetime", "tomorrow");
//! let body = ErrorResponse::from(&err);
//! assert_eq!(body.code, ErrorCode::InvalidFormat);
//! assert_eq!(body.code.code(), 6);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorResponse};
