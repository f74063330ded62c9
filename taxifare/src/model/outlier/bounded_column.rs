use serde::{Deserialize, Serialize};
use std::fmt::Display;
use taxifare_core::model::trip::EngineeredTrip;

/// a numeric trip column that may be filtered by interquartile range.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BoundedColumn {
    PickupLongitude,
    PickupLatitude,
    DropoffLongitude,
    DropoffLatitude,
    TripDistance,
    FareAmount,
    TipAmount,
    TripDuration,
    GpsDistance,
}

impl BoundedColumn {
    pub fn value(&self, trip: &EngineeredTrip) -> f64 {
        match self {
            BoundedColumn::PickupLongitude => trip.record.pickup_longitude,
            BoundedColumn::PickupLatitude => trip.record.pickup_latitude,
            BoundedColumn::DropoffLongitude => trip.record.dropoff_longitude,
            BoundedColumn::DropoffLatitude => trip.record.dropoff_latitude,
            BoundedColumn::TripDistance => trip.record.trip_distance,
            BoundedColumn::FareAmount => trip.record.fare_amount,
            BoundedColumn::TipAmount => trip.record.tip_amount,
            BoundedColumn::TripDuration => trip.features.trip_duration,
            BoundedColumn::GpsDistance => trip.features.gps_distance,
        }
    }
}

impl Display for BoundedColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BoundedColumn::PickupLongitude => "pickup_longitude",
            BoundedColumn::PickupLatitude => "pickup_latitude",
            BoundedColumn::DropoffLongitude => "dropoff_longitude",
            BoundedColumn::DropoffLatitude => "dropoff_latitude",
            BoundedColumn::TripDistance => "trip_distance",
            BoundedColumn::FareAmount => "fare_amount",
            BoundedColumn::TipAmount => "tip_amount",
            BoundedColumn::TripDuration => "trip_duration",
            BoundedColumn::GpsDistance => "gps_distance",
        };
        write!(f, "{s}")
    }
}
