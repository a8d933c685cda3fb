use chrono::Weekday;

/// Backend day numbering: 1 = Monday .. 7 = Sunday.
pub const ALL_DAYS: [u8; 7] = [1, 2, 3, 4, 5, 6, 7];

pub fn is_valid_day(day: u8) -> bool {
    (1..=7).contains(&day)
}

pub fn day_name(day: u8) -> &'static str {
    match day {
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        7 => "Sunday",
        _ => "Unknown",
    }
}

pub fn weekday(day: u8) -> Option<Weekday> {
    match day {
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        7 => Some(Weekday::Sun),
        _ => None,
    }
}
