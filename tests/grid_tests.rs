use timetable_tool::{GridConfig, TimeGrid};

#[test]
fn default_grid_has_17_hourly_rows() {
    let grid = TimeGrid::default();
    assert_eq!(grid.len(), 17);

    let first = grid.row(0).unwrap();
    assert_eq!(first.start_minutes, 360);
    assert_eq!(first.end_minutes, 420);

    let last = grid.row(16).unwrap();
    assert_eq!(last.start_minutes, 1320);
    assert_eq!(last.end_minutes, 1380);
}

#[test]
fn rows_are_contiguous_and_indexed_in_order() {
    let grid = TimeGrid::default();
    for pair in grid.rows().windows(2) {
        assert_eq!(pair[0].end_minutes, pair[1].start_minutes);
        assert_eq!(pair[0].index + 1, pair[1].index);
    }
    for row in grid.rows() {
        assert_eq!(row.end_minutes - row.start_minutes, 60);
    }
}

#[test]
fn row_labels_are_zero_padded() {
    let grid = TimeGrid::default();
    assert_eq!(grid.row(0).unwrap().label(), "06:00-07:00");
    assert_eq!(grid.row(3).unwrap().label(), "09:00-10:00");
    assert_eq!(grid.row(16).unwrap().label(), "22:00-23:00");
}

#[test]
fn reversed_bounds_are_swapped() {
    let reversed = TimeGrid::from_config(GridConfig {
        start_hour: 22,
        end_hour: 6,
    });
    assert_eq!(reversed, TimeGrid::default());
}

#[test]
fn end_hour_is_clamped_so_no_row_crosses_midnight() {
    let grid = TimeGrid::from_config(GridConfig {
        start_hour: 20,
        end_hour: 30,
    });
    assert_eq!(grid.len(), 4);
    let last = grid.rows().last().unwrap();
    assert_eq!(last.start_minutes, 1380);
    assert_eq!(last.end_minutes, 1440);
}

#[test]
fn single_hour_config_yields_one_row() {
    let grid = TimeGrid::from_config(GridConfig {
        start_hour: 9,
        end_hour: 9,
    });
    assert_eq!(grid.len(), 1);
    assert_eq!(grid.row(0).unwrap().label(), "09:00-10:00");
}

#[test]
fn generation_is_deterministic() {
    let config = GridConfig {
        start_hour: 8,
        end_hour: 20,
    };
    assert_eq!(TimeGrid::from_config(config), TimeGrid::from_config(config));
}
