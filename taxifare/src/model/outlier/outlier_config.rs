use super::BoundedColumn;
use crate::model::TaxiFareError;
use serde::{Deserialize, Serialize};

/// thresholds used when removing implausible trips. every field falls back
/// to its default when omitted from a configuration file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OutlierConfig {
    /// columns filtered by IQR, one after another, in this order
    pub bounded_columns: Vec<BoundedColumn>,
    /// quantile taken as the first quartile of the IQR rule
    pub lower_quantile: f64,
    /// quantile taken as the third quartile of the IQR rule
    pub upper_quantile: f64,
    pub iqr_multiplier: f64,
    /// exclusive lower bound on recorded trip distance, in miles
    pub min_trip_distance: f64,
    /// exclusive upper bound on recorded trip distance, in miles
    pub max_trip_distance: f64,
    /// exclusive upper bound on fare amount
    pub max_fare_amount: f64,
    /// exclusive upper bound on tip_amount / fare_amount
    pub max_tip_ratio: f64,
    /// trips at or above this quantile of trip duration are removed. None disables the rule.
    pub trip_duration_quantile: Option<f64>,
    /// dropoff longitude must fall strictly between these two quantiles. None disables the rule.
    pub dropoff_longitude_quantiles: Option<(f64, f64)>,
    /// accepted rate codes
    pub rate_codes: Vec<u32>,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            bounded_columns: vec![
                BoundedColumn::PickupLongitude,
                BoundedColumn::PickupLatitude,
                BoundedColumn::DropoffLongitude,
                BoundedColumn::DropoffLatitude,
            ],
            lower_quantile: 0.08,
            upper_quantile: 0.92,
            iqr_multiplier: 1.5,
            min_trip_distance: 0.0,
            max_trip_distance: 60.0,
            max_fare_amount: 100.0,
            max_tip_ratio: 0.4,
            trip_duration_quantile: Some(0.995),
            dropoff_longitude_quantiles: Some((0.02, 0.98)),
            rate_codes: vec![1, 2, 3, 4],
        }
    }
}

impl OutlierConfig {
    pub fn validate(&self) -> Result<(), TaxiFareError> {
        let mut quantiles = vec![
            ("lower_quantile", self.lower_quantile),
            ("upper_quantile", self.upper_quantile),
        ];
        if let Some(q) = self.trip_duration_quantile {
            quantiles.push(("trip_duration_quantile", q));
        }
        if let Some((lo, hi)) = self.dropoff_longitude_quantiles {
            quantiles.push(("dropoff_longitude_quantiles[0]", lo));
            quantiles.push(("dropoff_longitude_quantiles[1]", hi));
        }
        for (name, q) in quantiles {
            if !(0.0..=1.0).contains(&q) {
                return Err(TaxiFareError::ConfigurationError(format!(
                    "outliers.{name} must be in [0, 1], found {q}"
                )));
            }
        }
        if self.lower_quantile > self.upper_quantile {
            return Err(TaxiFareError::ConfigurationError(format!(
                "outliers.lower_quantile {} exceeds upper_quantile {}",
                self.lower_quantile, self.upper_quantile
            )));
        }
        if self.iqr_multiplier < 0.0 {
            return Err(TaxiFareError::ConfigurationError(format!(
                "outliers.iqr_multiplier must be non-negative, found {}",
                self.iqr_multiplier
            )));
        }
        Ok(())
    }
}
