use crate::grid::GridConfig;
use crate::metadata::TimetableMetadata;
use crate::session::ClassSession;
use crate::session_validation;
use crate::timetable::Timetable;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub enum SnapshotError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    Csv(csv::Error),
    InvalidData(String),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Serialization(err) => write!(f, "serialization error: {err}"),
            SnapshotError::Io(err) => write!(f, "io error: {err}"),
            SnapshotError::Csv(err) => write!(f, "csv error: {err}"),
            SnapshotError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<SerdeJsonError> for SnapshotError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for SnapshotError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for SnapshotError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

pub fn validate_classes(classes: &[ClassSession]) -> SnapshotResult<()> {
    session_validation::validate_session_collection(classes)
        .map_err(|err| SnapshotError::InvalidData(err.to_string()))
}

#[derive(Serialize, Deserialize)]
struct TimetableSnapshot {
    metadata: TimetableMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    grid: Option<GridConfig>,
    #[serde(default)]
    grid_is_custom: bool,
    classes: Vec<ClassSession>,
}

impl TimetableSnapshot {
    fn from_timetable(timetable: &Timetable) -> SnapshotResult<Self> {
        validate_classes(timetable.classes())?;
        Ok(Self {
            metadata: timetable.metadata().clone(),
            grid: Some(timetable.grid_config()),
            grid_is_custom: timetable.grid_is_custom(),
            classes: timetable.classes().to_vec(),
        })
    }

    fn into_timetable(self) -> SnapshotResult<Timetable> {
        validate_classes(&self.classes)?;
        let has_grid = self.grid.is_some();
        let grid_config = self.grid.unwrap_or_default();

        let mut timetable =
            Timetable::from_parts(self.metadata, grid_config, self.grid_is_custom && has_grid);
        for class in self.classes {
            timetable
                .upsert_class(class)
                .map_err(|err| SnapshotError::InvalidData(err.to_string()))?;
        }
        Ok(timetable)
    }
}

pub fn save_timetable_to_json<P: AsRef<Path>>(
    timetable: &Timetable,
    path: P,
) -> SnapshotResult<()> {
    let snapshot = TimetableSnapshot::from_timetable(timetable)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &snapshot)?;
    Ok(())
}

pub fn load_timetable_from_json<P: AsRef<Path>>(path: P) -> SnapshotResult<Timetable> {
    let file = File::open(path)?;
    let snapshot: TimetableSnapshot = serde_json::from_reader(file)?;
    snapshot.into_timetable()
}

#[derive(Default, Serialize, Deserialize)]
struct ClassCsvRecord {
    id: i64,
    name: String,
    subject: String,
    day_of_week: u8,
    time_slot: String,
    teacher_name: String,
    max_students: u32,
    #[serde(default)]
    metadata_json: String,
    #[serde(default)]
    grid_json: String,
    #[serde(default)]
    grid_is_custom: String,
}

impl From<&ClassSession> for ClassCsvRecord {
    fn from(class: &ClassSession) -> Self {
        let mut record = ClassCsvRecord::default();
        record.id = class.id;
        record.name = class.name.clone();
        record.subject = class.subject.clone();
        record.day_of_week = class.day_of_week;
        record.time_slot = class.time_slot.clone();
        record.teacher_name = class.teacher_name.clone();
        record.max_students = class.max_students;
        record
    }
}

impl ClassCsvRecord {
    fn metadata_row(timetable: &Timetable) -> SnapshotResult<Self> {
        let metadata_json = serde_json::to_string(timetable.metadata())?;
        let grid_json = serde_json::to_string(&timetable.grid_config())?;
        let mut record = ClassCsvRecord::default();
        record.name = "__metadata__".to_string();
        record.metadata_json = metadata_json;
        record.grid_json = grid_json;
        record.grid_is_custom = timetable.grid_is_custom().to_string();
        Ok(record)
    }

    fn is_metadata_row(&self) -> bool {
        !self.metadata_json.trim().is_empty()
    }

    fn into_class(self) -> SnapshotResult<ClassSession> {
        if self.is_metadata_row() {
            return Err(SnapshotError::InvalidData(
                "metadata row cannot be converted to a class".into(),
            ));
        }
        Ok(ClassSession {
            id: self.id,
            name: self.name,
            subject: self.subject,
            day_of_week: self.day_of_week,
            time_slot: self.time_slot,
            teacher_name: self.teacher_name,
            max_students: self.max_students,
        })
    }
}

pub fn save_timetable_to_csv<P: AsRef<Path>>(timetable: &Timetable, path: P) -> SnapshotResult<()> {
    validate_classes(timetable.classes())?;
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    writer.serialize(ClassCsvRecord::metadata_row(timetable)?)?;
    for class in timetable.classes() {
        writer.serialize(ClassCsvRecord::from(class))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn load_timetable_from_csv<P: AsRef<Path>>(path: P) -> SnapshotResult<Timetable> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut classes = Vec::new();
    let mut metadata: Option<TimetableMetadata> = None;
    let mut grid_config: Option<GridConfig> = None;
    let mut grid_is_custom = false;

    for record in reader.deserialize::<ClassCsvRecord>() {
        let record = record?;
        if record.is_metadata_row() {
            if metadata.is_some() {
                return Err(SnapshotError::InvalidData(
                    "CSV file contained multiple metadata rows".into(),
                ));
            }
            metadata = Some(serde_json::from_str(&record.metadata_json).map_err(|err| {
                SnapshotError::InvalidData(format!("invalid metadata json: {err}"))
            })?);
            if !record.grid_json.trim().is_empty() {
                grid_config = Some(serde_json::from_str(&record.grid_json).map_err(|err| {
                    SnapshotError::InvalidData(format!("invalid grid json: {err}"))
                })?);
            }
            if !record.grid_is_custom.trim().is_empty() {
                grid_is_custom = record
                    .grid_is_custom
                    .trim()
                    .parse::<bool>()
                    .unwrap_or(false);
            }
            continue;
        }
        classes.push(record.into_class()?);
    }

    if classes.is_empty() {
        return Err(SnapshotError::InvalidData(
            "CSV file contained no classes".into(),
        ));
    }

    validate_classes(&classes)?;

    let mut timetable = if let Some(metadata) = metadata {
        let (config, has_custom_config) = match grid_config {
            Some(config) => (config, true),
            None => (GridConfig::default(), false),
        };
        Timetable::from_parts(metadata, config, grid_is_custom && has_custom_config)
    } else {
        Timetable::new()
    };
    for class in classes {
        timetable
            .upsert_class(class)
            .map_err(|err| SnapshotError::InvalidData(err.to_string()))?;
    }
    Ok(timetable)
}
