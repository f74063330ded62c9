use super::{BoundedColumn, OutlierConfig};
use taxifare_core::model::trip::EngineeredTrip;

/// removes implausible trips. IQR filters run first, one column at a time on the
/// rows that survived the previous column, followed by the fixed-threshold rules.
/// surviving rows keep their original relative order.
pub fn remove_outliers(
    mut trips: Vec<EngineeredTrip>,
    config: &OutlierConfig,
) -> Vec<EngineeredTrip> {
    let initial = trips.len();

    for column in config.bounded_columns.iter() {
        filter_iqr(&mut trips, column, config);
    }

    trips.retain(|t| t.record.is_chronological());
    log_remaining("chronological timestamps", trips.len());

    trips.retain(|t| {
        let d = t.record.trip_distance;
        config.min_trip_distance < d && d < config.max_trip_distance
    });
    log_remaining("trip distance", trips.len());

    trips.retain(|t| t.record.fare_amount < config.max_fare_amount);
    log_remaining("fare amount", trips.len());

    trips.retain(|t| tip_ratio_below(t, config.max_tip_ratio));
    log_remaining("tip ratio", trips.len());

    // both quantiles describe the rows that survived the tip ratio rule
    let durations = column_values(&trips, &BoundedColumn::TripDuration);
    let longitudes = column_values(&trips, &BoundedColumn::DropoffLongitude);
    let max_duration = config
        .trip_duration_quantile
        .and_then(|q| quantile(&durations, q));
    let longitude_band = config
        .dropoff_longitude_quantiles
        .and_then(|(lo, hi)| quantile(&longitudes, lo).zip(quantile(&longitudes, hi)));

    if let Some(max_duration) = max_duration {
        trips.retain(|t| t.features.trip_duration < max_duration);
        log_remaining("trip duration", trips.len());
    }
    if let Some((lo, hi)) = longitude_band {
        trips.retain(|t| lo < t.record.dropoff_longitude && t.record.dropoff_longitude < hi);
        log_remaining("dropoff longitude band", trips.len());
    }

    trips.retain(|t| config.rate_codes.contains(&t.record.rate_code));
    log_remaining("rate code", trips.len());

    log::info!(
        "outlier removal kept {} of {} trips",
        trips.len(),
        initial
    );
    trips
}

/// keeps rows within [q1 - k * iqr, q3 + k * iqr] of the given column, where the
/// quartiles are computed on the rows passed in.
pub fn filter_iqr(trips: &mut Vec<EngineeredTrip>, column: &BoundedColumn, config: &OutlierConfig) {
    let values = column_values(trips, column);
    let bounds = iqr_bounds(
        &values,
        config.lower_quantile,
        config.upper_quantile,
        config.iqr_multiplier,
    );
    if let Some((lo, hi)) = bounds {
        log::debug!("{column} bounds: [{lo}, {hi}]");
        trips.retain(|t| {
            let v = column.value(t);
            lo <= v && v <= hi
        });
        log_remaining(&format!("{column} IQR"), trips.len());
    }
}

/// inclusive outlier bounds for a column, or None when there are no values
pub fn iqr_bounds(
    values: &[f64],
    lower_quantile: f64,
    upper_quantile: f64,
    multiplier: f64,
) -> Option<(f64, f64)> {
    let q1 = quantile(values, lower_quantile)?;
    let q3 = quantile(values, upper_quantile)?;
    let iqr = q3 - q1;
    Some((q1 - multiplier * iqr, q3 + multiplier * iqr))
}

/// the q-th quantile with linear interpolation between the closest ranks,
/// where rank position is q * (n - 1). None for empty input.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}

/// zero fares and non-finite ratios never pass
fn tip_ratio_below(trip: &EngineeredTrip, max_ratio: f64) -> bool {
    let fare = trip.record.fare_amount;
    if fare == 0.0 {
        return false;
    }
    let ratio = trip.record.tip_amount / fare;
    ratio.is_finite() && ratio < max_ratio
}

fn column_values(trips: &[EngineeredTrip], column: &BoundedColumn) -> Vec<f64> {
    trips.iter().map(|t| column.value(t)).collect()
}

fn log_remaining(rule: &str, remaining: usize) {
    log::debug!("{remaining} trips remaining after {rule} filter");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use taxifare_core::model::trip::TripRecord;

    fn datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .expect("test invariant failed: datetime literal")
    }

    fn trip(fare: f64, tip: f64) -> EngineeredTrip {
        EngineeredTrip::from(TripRecord {
            pickup_datetime: datetime("2014-01-09 20:45:00"),
            dropoff_datetime: datetime("2014-01-09 20:55:00"),
            pickup_latitude: 40.7484,
            pickup_longitude: -73.9857,
            dropoff_latitude: 40.7306,
            dropoff_longitude: -73.9352,
            passenger_count: 1,
            rate_code: 1,
            trip_distance: 3.0,
            fare_amount: fare,
            tip_amount: tip,
            total_amount: None,
        })
    }

    /// a config that only applies the fixed rules that do not depend on quantiles
    fn fixed_rules_only() -> OutlierConfig {
        OutlierConfig {
            bounded_columns: vec![],
            trip_duration_quantile: None,
            dropoff_longitude_quantiles: None,
            ..Default::default()
        }
    }

    #[test]
    fn test_quantile_interpolates() {
        let values = [4.0, 1.0, 3.0, 2.0, 5.0];
        assert_eq!(quantile(&values, 0.0), Some(1.0));
        assert_eq!(quantile(&values, 0.5), Some(3.0));
        assert_eq!(quantile(&values, 1.0), Some(5.0));
        // position 0.25 * 4 = 1.0, 0.1 * 4 = 0.4
        assert_eq!(quantile(&values, 0.25), Some(2.0));
        let q = quantile(&values, 0.1).expect("test invariant failed: non-empty");
        assert!((q - 1.4).abs() < 1e-12);
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn test_iqr_bounds() {
        let values = (0..=100).map(|v| v as f64).collect::<Vec<_>>();
        let (lo, hi) =
            iqr_bounds(&values, 0.08, 0.92, 1.5).expect("test invariant failed: non-empty");
        // q1 = 8, q3 = 92, iqr = 84
        assert!((lo - (8.0 - 126.0)).abs() < 1e-9);
        assert!((hi - (92.0 + 126.0)).abs() < 1e-9);
    }

    #[test]
    fn test_high_tip_ratio_excluded() {
        let trips = vec![trip(20.0, 9.0), trip(20.0, 2.0)];
        let kept = remove_outliers(trips, &fixed_rules_only());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].record.tip_amount, 2.0);
    }

    #[test]
    fn test_zero_fare_excluded_without_panic() {
        let trips = vec![trip(0.0, 0.0), trip(0.0, 1.0), trip(10.0, 1.0)];
        let kept = remove_outliers(trips, &fixed_rules_only());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].record.fare_amount, 10.0);
    }

    #[test]
    fn test_fixed_thresholds() {
        let mut backwards = trip(10.0, 1.0);
        backwards.record.dropoff_datetime = datetime("2014-01-09 20:00:00");
        let mut zero_distance = trip(10.0, 1.0);
        zero_distance.record.trip_distance = 0.0;
        let mut long_distance = trip(10.0, 1.0);
        long_distance.record.trip_distance = 60.0;
        let expensive = trip(100.0, 1.0);
        let mut negotiated = trip(10.0, 1.0);
        negotiated.record.rate_code = 5;
        let kept = remove_outliers(
            vec![
                backwards,
                zero_distance,
                long_distance,
                expensive,
                negotiated,
                trip(10.0, 1.0),
            ],
            &fixed_rules_only(),
        );
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_iqr_filters_are_sequential() {
        let config = OutlierConfig::default();
        let mut trips = (0..100)
            .map(|i| {
                let mut t = trip(10.0, 1.0);
                t.record.pickup_longitude = -73.98 + (i as f64) * 0.0001;
                t.record.pickup_latitude = 40.75 + ((i * 7 % 100) as f64) * 0.0001;
                t
            })
            .collect::<Vec<_>>();
        trips[3].record.pickup_longitude = -70.0;
        trips[5].record.pickup_latitude = 45.0;

        let mut surviving = trips.clone();
        for column in config.bounded_columns.iter() {
            let values = column_values(&surviving, column);
            let (lo, hi) = iqr_bounds(&values, 0.08, 0.92, 1.5)
                .expect("test invariant failed: non-empty");
            filter_iqr(&mut surviving, column, &config);
            assert!(surviving.iter().all(|t| {
                let v = column.value(t);
                lo <= v && v <= hi
            }));
        }
        assert_eq!(surviving.len(), 98);
    }

    #[test]
    fn test_duration_and_dropoff_band() {
        let config = OutlierConfig {
            bounded_columns: vec![],
            ..Default::default()
        };
        let trips = (0..10)
            .map(|i| {
                let mut t = trip(10.0, 1.0);
                t.record.dropoff_longitude = -73.99 + (i as f64) * 0.001;
                t
            })
            .collect::<Vec<_>>();
        let kept = remove_outliers(trips, &config);
        // every duration equals the 99.5th percentile, and the bound is exclusive
        assert!(kept.is_empty());

        let mut trips = (0..10)
            .map(|i| {
                let mut t = trip(10.0, 1.0);
                t.record.dropoff_longitude = -73.99 + (i as f64) * 0.001;
                t
            })
            .collect::<Vec<_>>();
        trips[0].record.dropoff_datetime = datetime("2014-01-09 21:45:00");
        trips.iter_mut().for_each(|t| *t = EngineeredTrip::from(t.record.clone()));
        let kept = remove_outliers(trips, &config);
        assert_eq!(kept.len(), 8);
        assert!(kept.iter().all(|t| t.features.trip_duration == 10.0));
    }

    #[test]
    fn test_empty_input() {
        let kept = remove_outliers(vec![], &OutlierConfig::default());
        assert!(kept.is_empty());
    }
}
