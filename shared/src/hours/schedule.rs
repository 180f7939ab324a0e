//! Weekly schedules built from hours strings, and open/closed queries

use serde::{Deserialize, Serialize};

use super::days::expand_days;
use super::time::{TimeToken, parse_time};
use super::{ClockTime, HoursParseError, Weekday};

/// One opening interval on one weekday. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub day: Weekday,
    pub open: ClockTime,
    pub close: ClockTime,
}

impl ScheduleEntry {
    pub fn contains(&self, time: ClockTime) -> bool {
        self.open <= time && time <= self.close
    }
}

/// Why a segment produced no entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Nothing between two `/` separators
    EmptySegment,
    /// Days without any time range
    NoTimeRange,
    /// Range did not split into exactly one open and one close
    MalformedRange,
    /// A day label sat where a time belongs
    DayLabelInRange,
    /// Open or close matched neither clock format
    UnparseableTime,
}

/// What happened to one `/`-delimited segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SegmentOutcome {
    Scheduled {
        segment: String,
        days: Vec<Weekday>,
        open: ClockTime,
        close: ClockTime,
    },
    Skipped {
        segment: String,
        days: Vec<Weekday>,
        reason: SkipReason,
    },
}

impl SegmentOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, SegmentOutcome::Skipped { .. })
    }
}

/// Entries plus a per-segment account of how they were produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedHours {
    pub entries: Vec<ScheduleEntry>,
    pub segments: Vec<SegmentOutcome>,
}

/// Build the ordered schedule for an hours string such as
/// `"Mon-Fri 9 am-5 pm / Sat,Sun 10 am-2 pm"`.
///
/// Unknown weekdays reject the whole string. Unusable time ranges only drop
/// their own segment.
pub fn parse_hours(hours: &str) -> Result<Vec<ScheduleEntry>, HoursParseError> {
    parse_hours_detailed(hours).map(|parsed| parsed.entries)
}

/// Like [`parse_hours`], also reporting the outcome of every segment.
pub fn parse_hours_detailed(hours: &str) -> Result<ParsedHours, HoursParseError> {
    let mut parsed = ParsedHours::default();

    for segment in hours.split('/').map(str::trim) {
        let outcome = parse_segment(segment)?;
        if let SegmentOutcome::Scheduled {
            days, open, close, ..
        } = &outcome
        {
            parsed.entries.extend(days.iter().map(|&day| ScheduleEntry {
                day,
                open: *open,
                close: *close,
            }));
        }
        parsed.segments.push(outcome);
    }

    Ok(parsed)
}

fn parse_segment(segment: &str) -> Result<SegmentOutcome, HoursParseError> {
    let skipped = |days: Vec<Weekday>, reason: SkipReason| SegmentOutcome::Skipped {
        segment: segment.to_string(),
        days,
        reason,
    };

    if segment.is_empty() {
        return Ok(skipped(Vec::new(), SkipReason::EmptySegment));
    }

    let (days, times) = match segment.split_once(char::is_whitespace) {
        Some((days, times)) => (days, times.trim()),
        None => (segment, ""),
    };
    let days = expand_days(days)?;

    if times.is_empty() {
        return Ok(skipped(days, SkipReason::NoTimeRange));
    }

    let mut bounds = times.split('-');
    let (open, close) = match (bounds.next(), bounds.next(), bounds.next()) {
        (Some(open), Some(close), None) => (open, close),
        _ => return Ok(skipped(days, SkipReason::MalformedRange)),
    };

    let outcome = match (parse_time(open), parse_time(close)) {
        (Ok(TimeToken::At(open)), Ok(TimeToken::At(close))) => SegmentOutcome::Scheduled {
            segment: segment.to_string(),
            days,
            open,
            close,
        },
        (Ok(TimeToken::DayLabel(_)), _) | (_, Ok(TimeToken::DayLabel(_))) => {
            skipped(days, SkipReason::DayLabelInRange)
        }
        _ => skipped(days, SkipReason::UnparseableTime),
    };
    Ok(outcome)
}

/// Whether `time` on `day` falls inside the schedule.
///
/// Only the first entry for `day` is consulted; later entries for the same
/// day (split lunch/dinner hours) are ignored.
pub fn is_open_at(schedule: &[ScheduleEntry], day: Weekday, time: ClockTime) -> bool {
    schedule
        .iter()
        .find(|entry| entry.day == day)
        .is_some_and(|entry| entry.contains(time))
}
