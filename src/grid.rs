use crate::timeslot::format_minutes;
use serde::{Deserialize, Serialize};

/// One fixed one-hour row of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub index: usize,
    pub start_minutes: u16,
    pub end_minutes: u16,
}

impl TimeSlot {
    pub fn label(&self) -> String {
        format!(
            "{}-{}",
            format_minutes(self.start_minutes),
            format_minutes(self.end_minutes)
        )
    }
}

/// Inclusive hour bounds for the grid. The default `{6, 22}` yields rows
/// 06:00-07:00 through 22:00-23:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub start_hour: u8,
    pub end_hour: u8,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start_hour: 6,
            end_hour: 22,
        }
    }
}

/// Ordered, contiguous one-hour rows generated from a `GridConfig`. A pure
/// function of the config; regenerated per layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeGrid {
    slots: Vec<TimeSlot>,
}

impl TimeGrid {
    /// Build the row set. Reversed bounds are swapped and the end hour is
    /// clamped to 23 so no row crosses midnight.
    pub fn from_config(config: GridConfig) -> Self {
        let (start, end) = if config.start_hour <= config.end_hour {
            (config.start_hour, config.end_hour)
        } else {
            (config.end_hour, config.start_hour)
        };
        let start = start.min(23);
        let end = end.min(23);

        let slots = (start..=end)
            .enumerate()
            .map(|(index, hour)| TimeSlot {
                index,
                start_minutes: u16::from(hour) * 60,
                end_minutes: (u16::from(hour) + 1) * 60,
            })
            .collect();
        Self { slots }
    }

    pub fn rows(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn row(&self, index: usize) -> Option<&TimeSlot> {
        self.slots.get(index)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self::from_config(GridConfig::default())
    }
}
