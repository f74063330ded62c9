use super::TripRecord;
use crate::model::feature::{DerivedFeatures, FeatureColumn, FeatureSource, Target};
use serde::{Deserialize, Serialize};

/// a trip record paired with the features derived from it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EngineeredTrip {
    pub record: TripRecord,
    pub features: DerivedFeatures,
}

impl From<TripRecord> for EngineeredTrip {
    fn from(record: TripRecord) -> Self {
        let features = DerivedFeatures::new(&record);
        EngineeredTrip { record, features }
    }
}

impl EngineeredTrip {
    /// observed value of a training target for this trip
    pub fn target_value(&self, target: &Target) -> f64 {
        match target {
            Target::FareAmount => self.record.fare_amount,
            Target::TripDuration => self.features.trip_duration,
            Target::TipAmount => self.record.tip_amount,
        }
    }

    /// fare used for exploration, preferring the total charged when it was recorded
    pub fn total_fare(&self) -> f64 {
        self.record.total_amount.unwrap_or(self.record.fare_amount)
    }
}

impl FeatureSource for EngineeredTrip {
    fn feature(&self, column: &FeatureColumn) -> f64 {
        use FeatureColumn as C;
        match column {
            C::StartHour => self.features.start_hour as f64,
            C::StartMinute => self.features.start_minute as f64,
            C::PassengerCount => self.record.passenger_count as f64,
            C::PickupLongitude => self.record.pickup_longitude,
            C::PickupLatitude => self.record.pickup_latitude,
            C::DropoffLongitude => self.record.dropoff_longitude,
            C::DropoffLatitude => self.record.dropoff_latitude,
            C::RateCode => self.record.rate_code as f64,
            C::DayOfWeek => self.features.day_of_week as f64,
            C::GpsDistance => self.features.gps_distance,
        }
    }
}
