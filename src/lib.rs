pub mod grid;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod layout;
pub mod metadata;
pub mod session;
pub(crate) mod session_validation;
pub mod snapshot;
pub mod timeslot;
pub mod timetable;
pub mod week;

pub use grid::{GridConfig, TimeGrid, TimeSlot};
pub use layout::{LayoutSummary, PlacedBlock, Position, WeekLayout, resolve_position};
pub use metadata::TimetableMetadata;
pub use session::ClassSession;
pub use snapshot::{
    SnapshotError, load_timetable_from_csv, load_timetable_from_json, save_timetable_to_csv,
    save_timetable_to_json, validate_classes,
};
pub use timeslot::{TimeRange, TimeSlotError, format_minutes, parse_time_slot};
pub use timetable::{Timetable, TimetableError};
