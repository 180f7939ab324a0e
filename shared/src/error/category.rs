//! Which part of the service an error code belongs to

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Derived from the thousands digit of the code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// 0xxx
    Request,
    /// 1xxx
    Hours,
    /// 2xxx
    Restaurant,
    /// 9xxx and anything unassigned
    System,
}

impl ErrorCategory {
    pub fn from_code(code: u16) -> Self {
        match code / 1000 {
            0 => Self::Request,
            1 => Self::Hours,
            2 => Self::Restaurant,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(7), ErrorCategory::Request);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::Request);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Hours);
        assert_eq!(ErrorCategory::from_code(2002), ErrorCategory::Restaurant);
        assert_eq!(ErrorCategory::from_code(5000), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(9006), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::RequiredField.category(), ErrorCategory::Request);
        assert_eq!(ErrorCode::InvalidTime.category(), ErrorCategory::Hours);
        assert_eq!(
            ErrorCode::RestaurantNotFound.category(),
            ErrorCategory::Restaurant
        );
        assert_eq!(ErrorCode::DataLoadFailed.category(), ErrorCategory::System);
    }
}
