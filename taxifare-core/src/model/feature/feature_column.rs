use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a single numeric model input.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FeatureColumn {
    StartHour,
    StartMinute,
    PassengerCount,
    PickupLongitude,
    PickupLatitude,
    DropoffLongitude,
    DropoffLatitude,
    RateCode,
    DayOfWeek,
    GpsDistance,
}

impl Display for FeatureColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FeatureColumn::StartHour => "start_hour",
            FeatureColumn::StartMinute => "start_minute",
            FeatureColumn::PassengerCount => "passenger_count",
            FeatureColumn::PickupLongitude => "pickup_longitude",
            FeatureColumn::PickupLatitude => "pickup_latitude",
            FeatureColumn::DropoffLongitude => "dropoff_longitude",
            FeatureColumn::DropoffLatitude => "dropoff_latitude",
            FeatureColumn::RateCode => "rate_code",
            FeatureColumn::DayOfWeek => "day_of_week",
            FeatureColumn::GpsDistance => "gps_distance",
        };
        write!(f, "{name}")
    }
}
