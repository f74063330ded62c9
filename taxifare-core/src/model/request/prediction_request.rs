use super::Coordinate;
use crate::model::feature::{FeatureColumn, FeatureSource};
use crate::model::CoreError;
use crate::util::geo_utils;
use serde::Serialize;

/// passenger count assumed for every prediction
pub const DEFAULT_PASSENGER_COUNT: u32 = 1;
/// rate code assumed for every prediction (standard rate)
pub const DEFAULT_RATE_CODE: u32 = 1;

/// a single point-in-time trip query.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    pub hour: u32,
    pub minute: u32,
    pub day_of_week: u32,
    pub pickup: Coordinate,
    pub dropoff: Coordinate,
    gps_distance: f64,
}

impl PredictionRequest {
    /// builds a request, computing the pickup to dropoff distance up front.
    ///
    /// # Arguments
    ///
    /// * `hour` - pickup hour on a 24-hour clock
    /// * `minute` - pickup minute
    /// * `day_of_week` - Monday = 0 through Sunday = 6
    /// * `pickup` - pickup location
    /// * `dropoff` - dropoff location
    pub fn new(
        hour: u32,
        minute: u32,
        day_of_week: u32,
        pickup: Coordinate,
        dropoff: Coordinate,
    ) -> Result<PredictionRequest, CoreError> {
        if hour > 23 {
            return Err(CoreError::InvalidRequest(format!(
                "hour must be in [0, 23], found {hour}"
            )));
        }
        if minute > 59 {
            return Err(CoreError::InvalidRequest(format!(
                "minute must be in [0, 59], found {minute}"
            )));
        }
        if day_of_week > 6 {
            return Err(CoreError::InvalidRequest(format!(
                "day_of_week must be in [0, 6], found {day_of_week}"
            )));
        }
        for (name, coord) in [("pickup", &pickup), ("dropoff", &dropoff)] {
            if !coord.is_valid() {
                return Err(CoreError::InvalidRequest(format!(
                    "{name} coordinate out of range: {coord}"
                )));
            }
        }
        let gps_distance = geo_utils::gps_distance_miles(
            (pickup.latitude, pickup.longitude),
            (dropoff.latitude, dropoff.longitude),
        );
        Ok(PredictionRequest {
            hour,
            minute,
            day_of_week,
            pickup,
            dropoff,
            gps_distance,
        })
    }

    pub fn gps_distance(&self) -> f64 {
        self.gps_distance
    }
}

impl FeatureSource for PredictionRequest {
    fn feature(&self, column: &FeatureColumn) -> f64 {
        use FeatureColumn as C;
        match column {
            C::StartHour => self.hour as f64,
            C::StartMinute => self.minute as f64,
            C::PassengerCount => DEFAULT_PASSENGER_COUNT as f64,
            C::PickupLongitude => self.pickup.longitude,
            C::PickupLatitude => self.pickup.latitude,
            C::DropoffLongitude => self.dropoff.longitude,
            C::DropoffLatitude => self.dropoff.latitude,
            C::RateCode => DEFAULT_RATE_CODE as f64,
            C::DayOfWeek => self.day_of_week as f64,
            C::GpsDistance => self.gps_distance,
        }
    }
}
