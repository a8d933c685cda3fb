use crate::grid::TimeGrid;
use crate::session::ClassSession;
use crate::timeslot::{TimeRange, parse_time_slot};
use crate::week;
use serde::Serialize;

/// Where a class lands on the grid: the row its visual block starts in and
/// how many rows the block spans. Derived fresh on every layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub start_slot_index: usize,
    pub span_slots: usize,
    pub start_minutes: u16,
    pub end_minutes: u16,
}

/// Resolve a time range against the grid.
///
/// The block starts in the first row containing `start_minutes` and runs
/// through the first row whose end reaches `end_minutes`. A range that starts
/// before the grid is clamped to the first row it touches with a span of one.
/// Empty ranges and ranges the grid cannot hold resolve to `None`; callers
/// skip those classes instead of failing the pass.
pub fn resolve_position(range: TimeRange, grid: &TimeGrid) -> Option<Position> {
    if range.is_empty() {
        return None;
    }
    let rows = grid.rows();

    let start_slot = rows
        .iter()
        .position(|row| range.start_minutes >= row.start_minutes && range.start_minutes < row.end_minutes);

    let Some(start_slot_index) = start_slot else {
        // Start precedes the grid: clamp to the first row the range touches.
        let nearest = rows
            .iter()
            .position(|row| range.start_minutes < row.end_minutes)?;
        return Some(Position {
            start_slot_index: nearest,
            span_slots: 1,
            start_minutes: range.start_minutes,
            end_minutes: range.end_minutes,
        });
    };

    let end_slot_index = rows
        .iter()
        .position(|row| range.end_minutes > row.start_minutes && range.end_minutes <= row.end_minutes)?;

    Some(Position {
        start_slot_index,
        span_slots: (end_slot_index + 1).saturating_sub(start_slot_index).max(1),
        start_minutes: range.start_minutes,
        end_minutes: range.end_minutes,
    })
}

/// A class block pinned to its start row. Rows spanned below the start row
/// hold no entry for the class; consumers size the block from `span_slots`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedBlock {
    pub class_id: i64,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSummary {
    pub class_count: usize,
    pub placed_count: usize,
    pub clamped_count: usize,
    pub skipped_ids: Vec<i64>,
}

impl LayoutSummary {
    pub fn to_cli_summary(&self) -> String {
        let mut parts = Vec::new();
        parts.push(format!("classes={}", self.class_count));
        parts.push(format!("placed={}", self.placed_count));
        if self.clamped_count > 0 {
            parts.push(format!("clamped={}", self.clamped_count));
        }
        if !self.skipped_ids.is_empty() {
            let ids = self
                .skipped_ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            parts.push(format!("skipped={}", ids));
        }
        parts.join(", ")
    }
}

/// One layout pass over a class list: for every `(day, row)` pair, the blocks
/// that start there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekLayout {
    row_count: usize,
    cells: Vec<Vec<Vec<PlacedBlock>>>,
    summary: LayoutSummary,
}

impl WeekLayout {
    /// Place every class on the grid. Classes with an out-of-range day or an
    /// unpositionable time range are skipped and reported in the summary;
    /// input order is preserved within a cell, so identical input yields an
    /// identical layout.
    pub fn build(classes: &[ClassSession], grid: &TimeGrid) -> Self {
        let row_count = grid.len();
        let mut cells = vec![vec![Vec::new(); row_count]; week::ALL_DAYS.len()];
        let mut summary = LayoutSummary {
            class_count: classes.len(),
            placed_count: 0,
            clamped_count: 0,
            skipped_ids: Vec::new(),
        };

        for class in classes {
            if !week::is_valid_day(class.day_of_week) {
                summary.skipped_ids.push(class.id);
                continue;
            }
            let range = parse_time_slot(&class.time_slot);
            let Some(position) = resolve_position(range, grid) else {
                summary.skipped_ids.push(class.id);
                continue;
            };
            if let Some(row) = grid.row(position.start_slot_index) {
                if position.start_minutes < row.start_minutes {
                    summary.clamped_count += 1;
                }
            }
            summary.placed_count += 1;
            cells[usize::from(class.day_of_week) - 1][position.start_slot_index].push(PlacedBlock {
                class_id: class.id,
                position,
            });
        }

        Self {
            row_count,
            cells,
            summary,
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Blocks whose visual block starts at `(day, row)`. Empty for spanned or
    /// free cells and for out-of-range coordinates.
    pub fn blocks_at(&self, day: u8, row: usize) -> &[PlacedBlock] {
        self.cells
            .get(usize::from(day).wrapping_sub(1))
            .and_then(|rows| rows.get(row))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn summary(&self) -> &LayoutSummary {
        &self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::TimeGrid;

    #[test]
    fn fallback_clamps_early_start_to_first_row() {
        let grid = TimeGrid::default();
        let position = resolve_position(TimeRange::new(300, 330), &grid).unwrap();
        assert_eq!(position.start_slot_index, 0);
        assert_eq!(position.span_slots, 1);
    }

    #[test]
    fn empty_range_resolves_to_none() {
        let grid = TimeGrid::default();
        assert!(resolve_position(TimeRange::default(), &grid).is_none());
        assert!(resolve_position(TimeRange::new(600, 600), &grid).is_none());
    }
}
