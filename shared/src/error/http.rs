//! Error code to HTTP status

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::RestaurantNotFound => StatusCode::NOT_FOUND,
            // Startup-only failures; never a client mistake
            Self::InvalidRestaurantRecord | Self::DataLoadFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::InvalidFormat
            | Self::RequiredField
            | Self::UnknownWeekday
            | Self::InvalidTime => StatusCode::BAD_REQUEST,
        }
    }
}
