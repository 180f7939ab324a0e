//! Day lists and day ranges ("Mon-Fri", "Sat,Sun", "Sat-Tues")

use super::{HoursParseError, Weekday};

/// Expand a comma-separated list of days and day ranges, keeping source
/// order. Empty items (from a trailing comma) contribute nothing.
pub fn expand_days(days: &str) -> Result<Vec<Weekday>, HoursParseError> {
    let mut expanded = Vec::new();
    for token in days.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        expanded.extend(expand_day_range(token)?);
    }
    Ok(expanded)
}

/// Expand a single day or a `Start-End` range, wrapping around the week
/// when `End` precedes `Start`.
pub fn expand_day_range(token: &str) -> Result<Vec<Weekday>, HoursParseError> {
    match token.split_once('-') {
        Some((start, end)) => Ok(Weekday::span(
            start.trim().parse()?,
            end.trim().parse()?,
        )),
        None => Ok(vec![token.trim().parse()?]),
    }
}
