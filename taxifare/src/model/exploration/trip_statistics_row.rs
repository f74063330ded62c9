use serde::Serialize;

/// duration and fare summary for all trips starting in one hour of one weekday.
/// standard deviations are sample deviations and are absent for single-trip groups.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TripStatisticsRow {
    pub day_of_week: u32,
    pub hour: u32,
    pub trips: usize,
    pub duration_mean: f64,
    pub duration_median: f64,
    pub duration_std: Option<f64>,
    pub fare_mean: f64,
    pub fare_median: f64,
    pub fare_std: Option<f64>,
}
