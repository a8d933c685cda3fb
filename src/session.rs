use crate::timeslot::{TimeRange, parse_time_slot};
use serde::{Deserialize, Serialize};

/// A scheduled class as served by `GET /classes`.
///
/// `day_of_week` uses backend numbering (1 = Monday .. 7 = Sunday) and
/// `time_slot` carries the wire format `"HH:mm-HH:mm"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSession {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub day_of_week: u8,
    pub time_slot: String,
    pub teacher_name: String,
    pub max_students: u32,
}

impl ClassSession {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        subject: impl Into<String>,
        day_of_week: u8,
        time_slot: impl Into<String>,
        teacher_name: impl Into<String>,
        max_students: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            subject: subject.into(),
            day_of_week,
            time_slot: time_slot.into(),
            teacher_name: teacher_name.into(),
            max_students,
        }
    }

    /// Parsed time range; a malformed slot degrades to the empty range.
    pub fn time_range(&self) -> TimeRange {
        parse_time_slot(&self.time_slot)
    }
}
