use timetable_tool::{TimeRange, TimeSlotError, format_minutes, parse_time_slot};

#[test]
fn parse_maps_hours_and_minutes_from_midnight() {
    let range = TimeRange::parse("09:00-10:00").unwrap();
    assert_eq!(range.start_minutes, 540);
    assert_eq!(range.end_minutes, 600);

    let range = TimeRange::parse("14:30-16:00").unwrap();
    assert_eq!(range.start_minutes, 870);
    assert_eq!(range.end_minutes, 960);
    assert_eq!(range.duration_minutes(), 90);
}

#[test]
fn parse_accepts_unpadded_hours() {
    let padded = TimeRange::parse("09:00-10:00").unwrap();
    let unpadded = TimeRange::parse("9:00-10:00").unwrap();
    assert_eq!(padded, unpadded);
}

#[test]
fn parse_rejects_out_of_range_times() {
    assert!(matches!(
        TimeRange::parse("25:00-26:00"),
        Err(TimeSlotError::InvalidTime(_))
    ));
    assert!(matches!(
        TimeRange::parse("09:60-10:00"),
        Err(TimeSlotError::InvalidTime(_))
    ));
}

#[test]
fn parse_rejects_inverted_and_zero_spans() {
    assert!(matches!(
        TimeRange::parse("15:00-14:00"),
        Err(TimeSlotError::InvertedRange { .. })
    ));
    assert!(matches!(
        TimeRange::parse("10:00-10:00"),
        Err(TimeSlotError::InvertedRange { .. })
    ));
}

#[test]
fn parse_requires_the_separator_and_rejects_empty_input() {
    assert!(matches!(
        TimeRange::parse("0900 1000"),
        Err(TimeSlotError::MissingSeparator(_))
    ));
    assert!(matches!(TimeRange::parse(""), Err(TimeSlotError::Empty)));
    assert!(matches!(TimeRange::parse("   "), Err(TimeSlotError::Empty)));
}

#[test]
fn lenient_parse_degrades_to_the_empty_range() {
    assert_eq!(parse_time_slot(""), TimeRange::default());
    assert_eq!(parse_time_slot("not a slot"), TimeRange::default());
    assert_eq!(parse_time_slot("25:00-26:00"), TimeRange::default());
    assert!(parse_time_slot("15:00-14:00").is_empty());
}

#[test]
fn lenient_parse_agrees_with_strict_parse_on_valid_input() {
    let slot = "09:30-11:00";
    assert_eq!(parse_time_slot(slot), TimeRange::parse(slot).unwrap());
}

#[test]
fn display_round_trips_the_wire_format() {
    let range = TimeRange::parse("09:00-10:30").unwrap();
    assert_eq!(range.to_string(), "09:00-10:30");
    assert_eq!(format_minutes(65), "01:05");
    assert_eq!(format_minutes(1380), "23:00");
}
