use super::RawTripRecord;
use crate::{model::CoreError, util::time_utils};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// a historical taxi ride with every required field present.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub pickup_datetime: NaiveDateTime,
    pub dropoff_datetime: NaiveDateTime,
    pub pickup_latitude: f64,
    pub pickup_longitude: f64,
    pub dropoff_latitude: f64,
    pub dropoff_longitude: f64,
    pub passenger_count: u32,
    pub rate_code: u32,
    pub trip_distance: f64,
    pub fare_amount: f64,
    pub tip_amount: f64,
    /// only used for exploration statistics, never required
    pub total_amount: Option<f64>,
}

impl TripRecord {
    /// true when the dropoff does not precede the pickup
    pub fn is_chronological(&self) -> bool {
        self.pickup_datetime <= self.dropoff_datetime
    }
}

impl TryFrom<&RawTripRecord> for TripRecord {
    type Error = CoreError;

    fn try_from(raw: &RawTripRecord) -> Result<Self, Self::Error> {
        let pickup_str = require_str(&raw.pickup_datetime, "pickup_datetime")?;
        let dropoff_str = require_str(&raw.dropoff_datetime, "dropoff_datetime")?;
        Ok(TripRecord {
            pickup_datetime: time_utils::parse_datetime(pickup_str)?,
            dropoff_datetime: time_utils::parse_datetime(dropoff_str)?,
            pickup_latitude: require(raw.pickup_latitude, "pickup_latitude")?,
            pickup_longitude: require(raw.pickup_longitude, "pickup_longitude")?,
            dropoff_latitude: require(raw.dropoff_latitude, "dropoff_latitude")?,
            dropoff_longitude: require(raw.dropoff_longitude, "dropoff_longitude")?,
            passenger_count: require_count(raw.passenger_count, "passenger_count")?,
            rate_code: require_count(raw.rate_code, "rate_code")?,
            trip_distance: require(raw.trip_distance, "trip_distance")?,
            fare_amount: require(raw.fare_amount, "fare_amount")?,
            tip_amount: require(raw.tip_amount, "tip_amount")?,
            total_amount: raw.total_amount.filter(|v| v.is_finite()),
        })
    }
}

/// NaN is treated the same as an empty field
fn require(value: Option<f64>, field: &str) -> Result<f64, CoreError> {
    value
        .filter(|v| v.is_finite())
        .ok_or_else(|| CoreError::MissingField(field.to_string()))
}

fn require_str<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, CoreError> {
    match value.as_deref() {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(CoreError::MissingField(field.to_string())),
    }
}

fn require_count(value: Option<f64>, field: &str) -> Result<u32, CoreError> {
    let v = require(value, field)?;
    if v < 0.0 || v.fract() != 0.0 || v > u32::MAX as f64 {
        Err(CoreError::InvalidCount {
            field: field.to_string(),
            value: v,
        })
    } else {
        Ok(v as u32)
    }
}
