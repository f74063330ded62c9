use crate::model::{
    dataset::dataset_ops,
    exploration::exploration_ops,
    outlier::{outlier_ops, OutlierConfig},
    TaxiFareError,
};
use std::path::Path;

pub const TRIP_STATISTICS_FILENAME: &str = "trip_statistics.csv";
pub const LOCATIONS_FILENAME: &str = "locations.csv";

/// writes trip statistics and a location sample for a trip dataset.
///
/// # Arguments
/// * input - trip csv, optionally gzip-compressed
/// * output_directory - receives trip_statistics.csv and locations.csv
/// * hour - when provided, only statistics for this hour of the day are written
/// * location_limit - maximum number of location rows
/// * sample_fraction - share of raw rows read, in (0, 1]
/// * filter_outliers - apply the default outlier rules before summarizing
pub fn run_exploration(
    input: &Path,
    output_directory: &Path,
    hour: Option<u32>,
    location_limit: usize,
    sample_fraction: f64,
    filter_outliers: bool,
) -> Result<(), TaxiFareError> {
    if let Some(h) = hour.filter(|h| *h > 23) {
        return Err(TaxiFareError::ConfigurationError(format!(
            "hour must be in [0, 23], found {h}"
        )));
    }
    let mut trips = dataset_ops::load_trips(input, sample_fraction, 42)?;
    if filter_outliers {
        trips = outlier_ops::remove_outliers(trips, &OutlierConfig::default());
    }

    let all_rows = exploration_ops::trip_statistics(&trips);
    let rows = match hour {
        Some(h) => exploration_ops::statistics_for_hour(&all_rows, h),
        None => all_rows,
    };
    let locations = exploration_ops::location_sample(&trips, location_limit);

    std::fs::create_dir_all(output_directory)?;
    exploration_ops::write_csv(&rows, &output_directory.join(TRIP_STATISTICS_FILENAME))?;
    exploration_ops::write_csv(&locations, &output_directory.join(LOCATIONS_FILENAME))?;
    Ok(())
}
