use crate::model::CoreError;
use chrono::{NaiveDateTime, Weekday};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// timestamp layouts accepted in trip datasets, tried in order.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// half of a 12-hour clock face
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Meridiem {
    Am,
    Pm,
}

impl Display for Meridiem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

/// parses a trip timestamp such as `2014-01-09 20:45:25`.
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime, CoreError> {
    let trimmed = value.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| CoreError::InvalidDatetime(value.to_string()))
}

/// elapsed minutes from pickup to dropoff. negative when the dropoff
/// precedes the pickup.
pub fn duration_minutes(pickup: &NaiveDateTime, dropoff: &NaiveDateTime) -> f64 {
    let elapsed = *dropoff - *pickup;
    elapsed.num_milliseconds() as f64 / 1000.0 / 60.0
}

/// maps a weekday name to its index, with Monday as 0 and Sunday as 6.
/// accepts full names and three-letter abbreviations in any case.
pub fn day_of_week_to_int(name: &str) -> Result<u32, CoreError> {
    name.trim()
        .parse::<Weekday>()
        .map(|weekday| weekday.num_days_from_monday())
        .map_err(|_| CoreError::InvalidDayOfWeek(name.to_string()))
}

/// converts a 12-hour clock reading into an hour of the day in [0, 24).
///
/// # Arguments
///
/// * `hour` - clock hour, in [1, 12]
/// * `meridiem` - AM or PM
///
/// # Returns
///
/// * the 24-hour clock hour, where 12 AM is 0 and 12 PM is 12
pub fn hour_to_24(hour: u32, meridiem: Meridiem) -> Result<u32, CoreError> {
    if !(1..=12).contains(&hour) {
        return Err(CoreError::InvalidHour(hour));
    }
    let hour_24 = match (meridiem, hour) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Am, h) => h,
        (Meridiem::Pm, 12) => 12,
        (Meridiem::Pm, h) => h + 12,
    };
    Ok(hour_24)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_of_week_to_int() {
        assert_eq!(day_of_week_to_int("Monday").unwrap(), 0);
        assert_eq!(day_of_week_to_int("Wednesday").unwrap(), 2);
        assert_eq!(day_of_week_to_int("Sunday").unwrap(), 6);
        assert_eq!(day_of_week_to_int("sat").unwrap(), 5);
        assert!(day_of_week_to_int("Someday").is_err());
    }

    #[test]
    fn test_hour_to_24() {
        assert_eq!(hour_to_24(2, Meridiem::Pm).unwrap(), 14);
        assert_eq!(hour_to_24(12, Meridiem::Am).unwrap(), 0);
        assert_eq!(hour_to_24(12, Meridiem::Pm).unwrap(), 12);
        assert_eq!(hour_to_24(9, Meridiem::Am).unwrap(), 9);
        assert!(hour_to_24(0, Meridiem::Am).is_err());
        assert!(hour_to_24(13, Meridiem::Pm).is_err());
    }

    #[test]
    fn test_parse_datetime_formats() {
        let expected = parse_datetime("2014-01-09 20:45:25").unwrap();
        assert_eq!(parse_datetime("2014-01-09T20:45:25").unwrap(), expected);
        assert_eq!(parse_datetime(" 2014-01-09 20:45:25.000 ").unwrap(), expected);
        assert!(parse_datetime("09/01/2014 20:45").is_err());
        assert!(parse_datetime("").is_err());
    }

    #[test]
    fn test_duration_minutes_sign() {
        let pickup = parse_datetime("2014-01-09 20:45:25").unwrap();
        let dropoff = parse_datetime("2014-01-09 21:00:55").unwrap();
        assert!((duration_minutes(&pickup, &dropoff) - 15.5).abs() < 1e-9);
        assert!((duration_minutes(&dropoff, &pickup) + 15.5).abs() < 1e-9);
    }
}
