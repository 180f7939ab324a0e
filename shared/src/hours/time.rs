//! Clock-time tokens ("11:00 am", "11 am")

use chrono::format::{self, Parsed, StrftimeItems};

use super::{ClockTime, HoursParseError, Weekday};

/// Accepted 12-hour formats, tried in order.
const CLOCK_FORMATS: [&str; 2] = ["%I:%M %p", "%I %p"];

/// Result of reading one side of a time range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeToken {
    At(ClockTime),
    /// The token was a bare day label, not a time
    DayLabel(Weekday),
}

/// Parse a single clock token.
///
/// A bare weekday label yields [`TimeToken::DayLabel`]. A weekday label
/// followed by whitespace in front of the time is dropped, so `"Sun 11:30 am"`
/// reads as 11:30.
pub fn parse_time(token: &str) -> Result<TimeToken, HoursParseError> {
    let token = token.trim();
    if let Some(day) = Weekday::from_label(token) {
        return Ok(TimeToken::DayLabel(day));
    }

    let clock = strip_leading_weekday(token);
    CLOCK_FORMATS
        .iter()
        .find_map(|fmt| parse_clock(clock, fmt))
        .map(TimeToken::At)
        .ok_or_else(|| HoursParseError::InvalidTime {
            token: clock.to_string(),
        })
}

fn strip_leading_weekday(token: &str) -> &str {
    match token.split_once(char::is_whitespace) {
        Some((head, rest)) if Weekday::from_label(head).is_some() => rest.trim_start(),
        _ => token,
    }
}

fn parse_clock(input: &str, fmt: &str) -> Option<ClockTime> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, input, StrftimeItems::new(fmt)).ok()?;
    // "%I %p" carries no minutes; chrono needs one to build a time
    if !fmt.contains("%M") {
        parsed.set_minute(0).ok()?;
    }
    parsed.to_naive_time().ok().map(ClockTime::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(token: &str) -> u16 {
        match parse_time(token) {
            Ok(TimeToken::At(time)) => time.minutes(),
            other => panic!("expected a time for {token:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_every_twelve_hour_token() {
        for hour in 1u16..=12 {
            for minute in 0u16..60 {
                let am = minutes(&format!("{hour}:{minute:02} am"));
                let pm = minutes(&format!("{hour}:{minute:02} pm"));
                assert_eq!(am, (hour % 12) * 60 + minute);
                assert_eq!(pm, (hour % 12 + 12) * 60 + minute);
            }
        }
    }

    #[test]
    fn test_known_values() {
        assert_eq!(minutes("12:00 am"), 0);
        assert_eq!(minutes("12:00 pm"), 720);
        assert_eq!(minutes("11:30 pm"), 1410);
        assert_eq!(minutes("11:00 am"), 660);
    }

    #[test]
    fn test_hour_only_format() {
        assert_eq!(minutes("11 am"), 660);
        assert_eq!(minutes("12 am"), 0);
        assert_eq!(minutes("12 pm"), 720);
        assert_eq!(minutes("9 pm"), 1260);
    }

    #[test]
    fn test_surrounding_whitespace_and_case() {
        assert_eq!(minutes("  5:30 pm "), 1050);
        assert_eq!(minutes("5:30 PM"), 1050);
    }

    #[test]
    fn test_bare_day_labels_are_not_times() {
        for day in Weekday::ALL {
            assert_eq!(parse_time(day.label()), Ok(TimeToken::DayLabel(day)));
            assert_eq!(
                parse_time(&format!(" {} ", day.label())),
                Ok(TimeToken::DayLabel(day))
            );
        }
    }

    #[test]
    fn test_leading_day_is_stripped() {
        assert_eq!(minutes("Sun 11:30 am"), 690);
        assert_eq!(minutes("Tues 10 pm"), 1320);
    }

    #[test]
    fn test_invalid_tokens() {
        for token in ["garbage", "13:00 pm", "0:30 am", "11:00", "noon", "Tue 9 am", ""] {
            assert!(
                matches!(parse_time(token), Err(HoursParseError::InvalidTime { .. })),
                "{token:?} should not parse"
            );
        }
    }

    #[test]
    fn test_error_reports_stripped_token() {
        assert_eq!(
            parse_time("Mon late"),
            Err(HoursParseError::InvalidTime {
                token: "late".to_string()
            })
        );
    }
}
