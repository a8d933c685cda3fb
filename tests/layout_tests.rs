use timetable_tool::{
    ClassSession, TimeGrid, TimeRange, WeekLayout, parse_time_slot, resolve_position, week,
};

fn class(id: i64, day: u8, slot: &str) -> ClassSession {
    ClassSession::new(id, format!("Class {id}"), "Math", day, slot, "Ms Lan", 12)
}

#[test]
fn on_the_hour_class_occupies_one_row() {
    let grid = TimeGrid::default();
    let position = resolve_position(parse_time_slot("09:00-10:00"), &grid).unwrap();
    assert_eq!(position.start_slot_index, 3);
    assert_eq!(position.span_slots, 1);
}

#[test]
fn half_hour_start_spans_into_the_next_row() {
    let grid = TimeGrid::default();
    let position = resolve_position(parse_time_slot("09:30-11:00"), &grid).unwrap();
    assert_eq!(position.start_slot_index, 3);
    assert_eq!(position.span_slots, 2);
}

#[test]
fn irregular_start_lands_in_its_containing_row() {
    let grid = TimeGrid::default();
    let position = resolve_position(parse_time_slot("14:30-16:00"), &grid).unwrap();
    assert_eq!(position.start_slot_index, 8);
    assert_eq!(position.span_slots, 2);
}

#[test]
fn class_before_the_grid_clamps_to_the_first_row() {
    let grid = TimeGrid::default();
    let position = resolve_position(parse_time_slot("05:00-05:30"), &grid).unwrap();
    assert_eq!(position.start_slot_index, 0);
    assert_eq!(position.span_slots, 1);
}

#[test]
fn class_after_the_grid_is_unpositionable() {
    let grid = TimeGrid::default();
    assert!(resolve_position(parse_time_slot("23:00-23:30"), &grid).is_none());
}

#[test]
fn class_overrunning_the_grid_end_is_unpositionable() {
    // Starts inside the grid but its end row does not exist.
    let grid = TimeGrid::default();
    assert!(resolve_position(parse_time_slot("21:30-23:30"), &grid).is_none());
}

#[test]
fn malformed_slot_is_unpositionable() {
    let grid = TimeGrid::default();
    assert!(resolve_position(parse_time_slot(""), &grid).is_none());
    assert!(resolve_position(parse_time_slot("junk"), &grid).is_none());
    assert!(resolve_position(TimeRange::new(900, 600), &grid).is_none());
}

#[test]
fn resolver_is_idempotent() {
    let grid = TimeGrid::default();
    let range = parse_time_slot("09:30-11:00");
    assert_eq!(
        resolve_position(range, &grid),
        resolve_position(range, &grid)
    );
}

#[test]
fn week_layout_places_each_class_in_exactly_one_cell() {
    let grid = TimeGrid::default();
    let classes = vec![
        class(1, 1, "09:00-10:00"),
        class(2, 1, "09:30-11:00"),
        class(3, 5, "18:00-21:00"),
    ];
    let layout = WeekLayout::build(&classes, &grid);

    for wanted in [1i64, 2, 3] {
        let mut occurrences = 0;
        for day in week::ALL_DAYS {
            for row in 0..layout.row_count() {
                occurrences += layout
                    .blocks_at(day, row)
                    .iter()
                    .filter(|block| block.class_id == wanted)
                    .count();
            }
        }
        assert_eq!(occurrences, 1, "class {wanted} should start in one cell");
    }

    // The multi-hour classes occupy their start row only; spanned rows stay
    // empty and the span is carried on the block.
    assert_eq!(layout.blocks_at(1, 3).len(), 2);
    assert!(layout.blocks_at(1, 4).is_empty());
    let evening = &layout.blocks_at(5, 12)[0];
    assert_eq!(evening.position.span_slots, 3);
    assert!(layout.blocks_at(5, 13).is_empty());
    assert!(layout.blocks_at(5, 14).is_empty());
}

#[test]
fn week_layout_skips_unschedulable_classes() {
    let grid = TimeGrid::default();
    let classes = vec![
        class(1, 2, "09:00-10:00"),
        class(2, 9, "09:00-10:00"),
        class(3, 2, "23:00-23:30"),
        class(4, 2, ""),
    ];
    let layout = WeekLayout::build(&classes, &grid);
    let summary = layout.summary();

    assert_eq!(summary.class_count, 4);
    assert_eq!(summary.placed_count, 1);
    assert_eq!(summary.skipped_ids, vec![2, 3, 4]);
    assert_eq!(layout.blocks_at(2, 3).len(), 1);
}

#[test]
fn layout_summary_reports_clamped_blocks() {
    let grid = TimeGrid::default();
    let classes = vec![class(1, 3, "05:30-06:30"), class(2, 3, "10:00-11:00")];
    let layout = WeekLayout::build(&classes, &grid);
    let summary = layout.summary();

    assert_eq!(summary.placed_count, 2);
    assert_eq!(summary.clamped_count, 1);
    let line = summary.to_cli_summary();
    assert!(line.contains("classes=2"));
    assert!(line.contains("placed=2"));
    assert!(line.contains("clamped=1"));
}

#[test]
fn identical_input_produces_identical_layout() {
    let grid = TimeGrid::default();
    let classes = vec![
        class(1, 1, "09:00-10:00"),
        class(2, 4, "14:30-16:00"),
        class(3, 7, "05:00-05:30"),
    ];
    assert_eq!(
        WeekLayout::build(&classes, &grid),
        WeekLayout::build(&classes, &grid)
    );
}

#[test]
fn out_of_range_lookups_return_empty_cells() {
    let grid = TimeGrid::default();
    let layout = WeekLayout::build(&[class(1, 1, "09:00-10:00")], &grid);
    assert!(layout.blocks_at(0, 3).is_empty());
    assert!(layout.blocks_at(8, 3).is_empty());
    assert!(layout.blocks_at(1, 999).is_empty());
}
