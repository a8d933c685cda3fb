use crate::session::ClassSession;
use crate::timeslot::TimeRange;
use crate::week;
use std::collections::HashSet;
use std::fmt;

const MAX_TEXT_LEN: usize = 100;
const MAX_SLOT_LEN: usize = 20;

#[derive(Debug, Clone)]
pub struct SessionValidationError {
    message: String,
}

impl SessionValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SessionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SessionValidationError {}

fn validate_text(id: i64, field: &str, value: &str) -> Result<(), SessionValidationError> {
    if value.trim().is_empty() {
        return Err(SessionValidationError::new(format!(
            "class {id} requires a non-empty {field}"
        )));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(SessionValidationError::new(format!(
            "class {id} has a {field} longer than {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_session(session: &ClassSession) -> Result<(), SessionValidationError> {
    validate_text(session.id, "name", &session.name)?;
    validate_text(session.id, "subject", &session.subject)?;
    validate_text(session.id, "teacher_name", &session.teacher_name)?;

    if !week::is_valid_day(session.day_of_week) {
        return Err(SessionValidationError::new(format!(
            "class {} has day_of_week {} (must be 1-7)",
            session.id, session.day_of_week
        )));
    }

    if session.time_slot.chars().count() > MAX_SLOT_LEN {
        return Err(SessionValidationError::new(format!(
            "class {} has a time_slot longer than {MAX_SLOT_LEN} characters",
            session.id
        )));
    }
    if let Err(err) = TimeRange::parse(&session.time_slot) {
        return Err(SessionValidationError::new(format!(
            "class {} has invalid time_slot '{}': {}",
            session.id, session.time_slot, err
        )));
    }

    if session.max_students < 1 {
        return Err(SessionValidationError::new(format!(
            "class {} requires max_students of at least 1",
            session.id
        )));
    }

    Ok(())
}

pub fn validate_session_collection(
    sessions: &[ClassSession],
) -> Result<(), SessionValidationError> {
    let mut seen_ids = HashSet::with_capacity(sessions.len());
    for session in sessions {
        if !seen_ids.insert(session.id) {
            return Err(SessionValidationError::new(format!(
                "duplicate class id {}",
                session.id
            )));
        }
        validate_session(session)?;
    }
    Ok(())
}
