use serde::{Deserialize, Serialize};

/// a row of a taxi trip CSV as found on disk. every field may be null.
///
/// CSV rows as published for the 2014 yellow cab dataset:
/// vendor_id,pickup_datetime,dropoff_datetime,passenger_count,trip_distance,
/// pickup_longitude,pickup_latitude,rate_code,store_and_fwd_flag,dropoff_longitude,
/// dropoff_latitude,payment_type,fare_amount,surcharge,mta_tax,tip_amount,
/// tolls_amount,total_amount
///
/// columns not listed here (store_and_fwd_flag among them) are ignored on read.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RawTripRecord {
    #[serde(default)]
    pub pickup_datetime: Option<String>,
    #[serde(default)]
    pub dropoff_datetime: Option<String>,
    #[serde(default)]
    pub passenger_count: Option<f64>,
    #[serde(default)]
    pub trip_distance: Option<f64>,
    #[serde(default)]
    pub pickup_longitude: Option<f64>,
    #[serde(default)]
    pub pickup_latitude: Option<f64>,
    #[serde(default)]
    pub rate_code: Option<f64>,
    #[serde(default)]
    pub dropoff_longitude: Option<f64>,
    #[serde(default)]
    pub dropoff_latitude: Option<f64>,
    #[serde(default)]
    pub fare_amount: Option<f64>,
    #[serde(default)]
    pub tip_amount: Option<f64>,
    #[serde(default)]
    pub total_amount: Option<f64>,
}
