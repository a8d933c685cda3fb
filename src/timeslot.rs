use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time-of-day range in minutes counted from midnight.
///
/// The default value is the empty range `{0, 0}`, which callers treat as
/// unschedulable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start_minutes: u16,
    pub end_minutes: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeSlotError {
    Empty,
    MissingSeparator(String),
    InvalidTime(String),
    InvertedRange { start: u16, end: u16 },
}

impl fmt::Display for TimeSlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeSlotError::Empty => write!(f, "time slot is empty"),
            TimeSlotError::MissingSeparator(input) => {
                write!(f, "time slot '{input}' is missing the '-' separator")
            }
            TimeSlotError::InvalidTime(input) => write!(f, "invalid time of day '{input}'"),
            TimeSlotError::InvertedRange { start, end } => write!(
                f,
                "time slot must end after it starts ({}-{})",
                format_minutes(*start),
                format_minutes(*end)
            ),
        }
    }
}

impl std::error::Error for TimeSlotError {}

impl TimeRange {
    pub fn new(start_minutes: u16, end_minutes: u16) -> Self {
        Self {
            start_minutes,
            end_minutes,
        }
    }

    /// Strict `HH:mm-HH:mm` parsing. A single-digit hour is accepted
    /// (`"9:00"` and `"09:00"` agree on 540); out-of-range times and
    /// non-positive spans are rejected.
    pub fn parse(slot: &str) -> Result<Self, TimeSlotError> {
        let slot = slot.trim();
        if slot.is_empty() {
            return Err(TimeSlotError::Empty);
        }
        let (start, end) = slot
            .split_once('-')
            .ok_or_else(|| TimeSlotError::MissingSeparator(slot.to_string()))?;
        let start = parse_clock(start)?;
        let end = parse_clock(end)?;
        if end <= start {
            return Err(TimeSlotError::InvertedRange { start, end });
        }
        Ok(Self {
            start_minutes: start,
            end_minutes: end,
        })
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end_minutes.saturating_sub(self.start_minutes)
    }

    /// An empty range cannot be placed on the grid.
    pub fn is_empty(&self) -> bool {
        self.end_minutes <= self.start_minutes
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            format_minutes(self.start_minutes),
            format_minutes(self.end_minutes)
        )
    }
}

fn parse_clock(input: &str) -> Result<u16, TimeSlotError> {
    let input = input.trim();
    let time = NaiveTime::parse_from_str(input, "%H:%M")
        .map_err(|_| TimeSlotError::InvalidTime(input.to_string()))?;
    Ok((time.hour() * 60 + time.minute()) as u16)
}

/// Lenient parser for class records: missing or malformed input degrades to
/// the empty range rather than failing, and the position resolver skips the
/// class on layout.
pub fn parse_time_slot(slot: &str) -> TimeRange {
    TimeRange::parse(slot).unwrap_or_default()
}

/// Render minutes-from-midnight as zero-padded `HH:MM`.
pub fn format_minutes(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
