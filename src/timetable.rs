use crate::grid::{GridConfig, TimeGrid};
use crate::layout::WeekLayout;
use crate::metadata::TimetableMetadata;
use crate::session::ClassSession;
use crate::session_validation::{self, SessionValidationError};
use crate::week;
use std::fmt;

#[derive(Debug, Clone)]
pub enum TimetableError {
    InvalidDay(u8),
    Invalid(String),
}

impl fmt::Display for TimetableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimetableError::InvalidDay(day) => {
                write!(f, "day {day} is out of range (must be 1-7)")
            }
            TimetableError::Invalid(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for TimetableError {}

/// The in-memory class list plus center metadata and grid configuration.
/// Layout output is recomputed from scratch on every call; nothing here is
/// persisted.
#[derive(Debug, Clone)]
pub struct Timetable {
    classes: Vec<ClassSession>,
    metadata: TimetableMetadata,
    grid_config: GridConfig,
    grid_is_custom: bool,
}

impl Default for Timetable {
    fn default() -> Self {
        Self::new()
    }
}

impl Timetable {
    pub(crate) fn from_parts(
        metadata: TimetableMetadata,
        grid_config: GridConfig,
        grid_is_custom: bool,
    ) -> Self {
        Self {
            classes: Vec::new(),
            metadata,
            grid_config,
            grid_is_custom,
        }
    }

    pub fn new() -> Self {
        Self::new_with_metadata(TimetableMetadata::default())
    }

    pub fn new_with_metadata(metadata: TimetableMetadata) -> Self {
        Self::from_parts(metadata, GridConfig::default(), false)
    }

    pub fn new_with_metadata_and_grid(metadata: TimetableMetadata, grid_config: GridConfig) -> Self {
        Self::from_parts(metadata, grid_config, true)
    }

    pub fn metadata(&self) -> &TimetableMetadata {
        &self.metadata
    }

    pub fn set_metadata(&mut self, metadata: TimetableMetadata) {
        self.metadata = metadata;
    }

    pub fn set_center_name(&mut self, name: impl Into<String>) {
        self.metadata.center_name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.metadata.description = description.into();
    }

    pub fn grid_config(&self) -> GridConfig {
        self.grid_config
    }

    pub fn grid_is_custom(&self) -> bool {
        self.grid_is_custom
    }

    pub fn set_grid_config(&mut self, config: GridConfig) {
        self.grid_config = config;
        self.grid_is_custom = true;
    }

    pub fn reset_grid_to_default(&mut self) {
        self.grid_config = GridConfig::default();
        self.grid_is_custom = false;
    }

    pub fn grid(&self) -> TimeGrid {
        TimeGrid::from_config(self.grid_config)
    }

    pub fn classes(&self) -> &[ClassSession] {
        &self.classes
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn find_class(&self, class_id: i64) -> Option<&ClassSession> {
        self.classes.iter().find(|class| class.id == class_id)
    }

    /// Insert or replace a class by id after validating it.
    pub fn upsert_class(&mut self, class: ClassSession) -> Result<(), TimetableError> {
        session_validation::validate_session(&class).map_err(Self::validation_error)?;
        match self.classes.iter_mut().find(|c| c.id == class.id) {
            Some(existing) => *existing = class,
            None => self.classes.push(class),
        }
        Ok(())
    }

    pub fn delete_class(&mut self, class_id: i64) -> bool {
        let before = self.classes.len();
        self.classes.retain(|class| class.id != class_id);
        self.classes.len() != before
    }

    /// List classes, optionally filtered to one day of the week.
    pub fn classes_by_day(&self, day: Option<u8>) -> Result<Vec<&ClassSession>, TimetableError> {
        match day {
            Some(day) if !week::is_valid_day(day) => Err(TimetableError::InvalidDay(day)),
            Some(day) => Ok(self
                .classes
                .iter()
                .filter(|class| class.day_of_week == day)
                .collect()),
            None => Ok(self.classes.iter().collect()),
        }
    }

    pub fn week_layout(&self) -> WeekLayout {
        WeekLayout::build(&self.classes, &self.grid())
    }

    fn validation_error(err: SessionValidationError) -> TimetableError {
        TimetableError::Invalid(err.to_string())
    }
}
