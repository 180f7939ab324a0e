use thiserror::Error;

/// Input the hours grammar rejects outright.
///
/// Segments that are merely unusable (a day label or garbage where a time
/// should be) are not errors; see [`super::SkipReason`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HoursParseError {
    #[error("Unrecognized weekday: {token:?}")]
    UnknownWeekday { token: String },

    #[error("Could not parse time: {token:?}")]
    InvalidTime { token: String },
}

impl HoursParseError {
    /// The offending input token
    pub fn token(&self) -> &str {
        match self {
            Self::UnknownWeekday { token } | Self::InvalidTime { token } => token,
        }
    }
}
