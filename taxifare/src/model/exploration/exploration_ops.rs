use super::{LocationKind, LocationRow, TripStatisticsRow};
use crate::model::{outlier::outlier_ops, TaxiFareError};
use itertools::Itertools;
use serde::Serialize;
use std::path::Path;
use taxifare_core::model::trip::EngineeredTrip;

/// duration and fare statistics grouped by (day_of_week, start_hour), sorted by key
pub fn trip_statistics(trips: &[EngineeredTrip]) -> Vec<TripStatisticsRow> {
    trips
        .iter()
        .into_group_map_by(|t| (t.features.day_of_week, t.features.start_hour))
        .into_iter()
        .sorted_by_key(|(key, _)| *key)
        .map(|((day_of_week, hour), group)| {
            let durations = group
                .iter()
                .map(|t| t.features.trip_duration)
                .collect_vec();
            let fares = group.iter().map(|t| t.total_fare()).collect_vec();
            TripStatisticsRow {
                day_of_week,
                hour,
                trips: group.len(),
                duration_mean: mean(&durations),
                duration_median: median(&durations),
                duration_std: sample_std(&durations),
                fare_mean: mean(&fares),
                fare_median: median(&fares),
                fare_std: sample_std(&fares),
            }
        })
        .collect_vec()
}

/// rows of a statistics table for a single hour of the day
pub fn statistics_for_hour(rows: &[TripStatisticsRow], hour: u32) -> Vec<TripStatisticsRow> {
    rows.iter().filter(|r| r.hour == hour).cloned().collect_vec()
}

/// up to `limit` map points, a pickup then a dropoff for each trip in order
pub fn location_sample(trips: &[EngineeredTrip], limit: usize) -> Vec<LocationRow> {
    trips
        .iter()
        .flat_map(|t| {
            [
                LocationRow::new(
                    t.record.pickup_latitude,
                    t.record.pickup_longitude,
                    LocationKind::Pickup,
                ),
                LocationRow::new(
                    t.record.dropoff_latitude,
                    t.record.dropoff_longitude,
                    LocationKind::Dropoff,
                ),
            ]
        })
        .take(limit)
        .collect_vec()
}

/// writes any serializable rows to a csv file with a header
pub fn write_csv<T: Serialize>(rows: &[T], path: &Path) -> Result<(), TaxiFareError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    for row in rows.iter() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    log::info!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn median(values: &[f64]) -> f64 {
    outlier_ops::quantile(values, 0.5).unwrap_or(f64::NAN)
}

/// standard deviation with an n - 1 denominator
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values);
    let ss = values.iter().map(|v| (v - m).powi(2)).sum::<f64>();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use taxifare_core::model::trip::TripRecord;

    fn trip(pickup: &str, minutes: i64, fare: f64, total: Option<f64>) -> EngineeredTrip {
        let pickup = NaiveDateTime::parse_from_str(pickup, "%Y-%m-%d %H:%M:%S")
            .expect("test invariant failed: datetime literal");
        EngineeredTrip::from(TripRecord {
            pickup_datetime: pickup,
            dropoff_datetime: pickup + chrono::Duration::minutes(minutes),
            pickup_latitude: 40.7484,
            pickup_longitude: -73.9857,
            dropoff_latitude: 40.7306,
            dropoff_longitude: -73.9352,
            passenger_count: 1,
            rate_code: 1,
            trip_distance: 3.0,
            fare_amount: fare,
            tip_amount: 1.0,
            total_amount: total,
        })
    }

    #[test]
    fn test_statistics_grouped_and_sorted() {
        // 2014-01-13 is a Monday, 2014-01-12 a Sunday
        let trips = vec![
            trip("2014-01-12 08:10:00", 10, 10.0, None),
            trip("2014-01-13 09:00:00", 20, 10.0, Some(12.0)),
            trip("2014-01-13 09:30:00", 10, 20.0, Some(24.0)),
            trip("2014-01-13 09:45:00", 30, 30.0, None),
        ];
        let rows = trip_statistics(&trips);
        assert_eq!(rows.len(), 2);

        let monday = &rows[0];
        assert_eq!((monday.day_of_week, monday.hour, monday.trips), (0, 9, 3));
        assert_eq!(monday.duration_mean, 20.0);
        assert_eq!(monday.duration_median, 20.0);
        assert_eq!(monday.duration_std, Some(10.0));
        assert_eq!(monday.fare_mean, 22.0);
        assert_eq!(monday.fare_median, 24.0);

        let sunday = &rows[1];
        assert_eq!((sunday.day_of_week, sunday.hour, sunday.trips), (6, 8, 1));
        assert_eq!(sunday.fare_mean, 10.0);
        assert_eq!(sunday.duration_std, None);

        let nine = statistics_for_hour(&rows, 9);
        assert_eq!(nine, vec![monday.clone()]);
        assert!(statistics_for_hour(&rows, 3).is_empty());
    }

    #[test]
    fn test_location_sample_limit() {
        let trips = vec![
            trip("2014-01-12 08:10:00", 10, 10.0, None),
            trip("2014-01-13 09:00:00", 20, 10.0, None),
        ];
        let rows = location_sample(&trips, 3);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].kind, LocationKind::Pickup);
        assert_eq!(rows[1].kind, LocationKind::Dropoff);
        assert_eq!(rows[1].latitude, 40.7306);
        assert_eq!(rows[2].color, "#1f77b4");
        assert_eq!(location_sample(&trips, 100).len(), 4);
    }

    #[test]
    fn test_write_csv() {
        let dir = tempfile::tempdir().expect("test invariant failed: tempdir");
        let path = dir.path().join("stats.csv");
        let trips = vec![trip("2014-01-12 08:10:00", 10, 10.0, None)];
        write_csv(&trip_statistics(&trips), &path).expect("test invariant failed: write");
        let contents = std::fs::read_to_string(&path).expect("test invariant failed: read");
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("day_of_week,hour,trips,duration_mean,duration_median,duration_std,fare_mean,fare_median,fare_std")
        );
        assert_eq!(lines.next(), Some("6,8,1,10.0,10.0,,10.0,10.0,"));
    }
}
