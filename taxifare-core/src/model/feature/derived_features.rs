use crate::model::trip::TripRecord;
use crate::util::{geo_utils, time_utils};
use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};

/// time and distance features computed once from a [`TripRecord`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DerivedFeatures {
    /// hour of the pickup, [0, 24)
    pub start_hour: u32,
    /// minute of the pickup, [0, 60)
    pub start_minute: u32,
    /// day of the pickup, Monday = 0 through Sunday = 6
    pub day_of_week: u32,
    /// minutes from pickup to dropoff, negative for out-of-order timestamps
    pub trip_duration: f64,
    /// geodesic miles between pickup and dropoff
    pub gps_distance: f64,
}

impl DerivedFeatures {
    pub fn new(record: &TripRecord) -> DerivedFeatures {
        let pickup = &record.pickup_datetime;
        DerivedFeatures {
            start_hour: pickup.hour(),
            start_minute: pickup.minute(),
            day_of_week: pickup.weekday().num_days_from_monday(),
            trip_duration: time_utils::duration_minutes(pickup, &record.dropoff_datetime),
            gps_distance: geo_utils::gps_distance_miles(
                (record.pickup_latitude, record.pickup_longitude),
                (record.dropoff_latitude, record.dropoff_longitude),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DerivedFeatures;
    use crate::model::trip::TripRecord;
    use crate::util::time_utils::parse_datetime;

    fn record(pickup: &str, dropoff: &str) -> TripRecord {
        TripRecord {
            pickup_datetime: parse_datetime(pickup).unwrap(),
            dropoff_datetime: parse_datetime(dropoff).unwrap(),
            pickup_latitude: 40.7484,
            pickup_longitude: -73.9857,
            dropoff_latitude: 40.7306,
            dropoff_longitude: -73.9352,
            passenger_count: 2,
            rate_code: 1,
            trip_distance: 3.1,
            fare_amount: 14.0,
            tip_amount: 2.0,
            total_amount: Some(16.5),
        }
    }

    #[test]
    fn test_time_features() {
        // 2014-01-12 was a Sunday
        let features = DerivedFeatures::new(&record("2014-01-12 23:59:10", "2014-01-13 00:09:40"));
        assert_eq!(features.start_hour, 23);
        assert_eq!(features.start_minute, 59);
        assert_eq!(features.day_of_week, 6);
        assert!((features.trip_duration - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_duration_is_negative_for_reversed_timestamps() {
        let features = DerivedFeatures::new(&record("2014-01-13 08:30:00", "2014-01-13 08:00:00"));
        assert_eq!(features.day_of_week, 0);
        assert!((features.trip_duration + 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_gps_distance() {
        let features = DerivedFeatures::new(&record("2014-01-13 08:00:00", "2014-01-13 08:20:00"));
        assert!((2.8..=3.0).contains(&features.gps_distance));
    }
}
