use super::LocationInput;
use crate::model::{
    prediction::{PredictionResult, PredictionService},
    TaxiFareError,
};
use std::path::Path;
use taxifare_core::{
    model::request::{Coordinate, PredictionRequest},
    util::time_utils::{self, Meridiem},
};
use taxifare_places::{Geocoder, GooglePlacesClient};

/// departure time as entered on a 12-hour clock
#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    pub day: String,
    pub hour: u32,
    pub minute: u32,
    pub meridiem: Meridiem,
}

/// resolves both endpoints, predicts every target the model directory holds
/// and prints the result as JSON to stdout.
pub fn run_prediction(
    model_directory: &Path,
    origin: &LocationInput,
    destination: &LocationInput,
    departure: &Departure,
    api_key: Option<&String>,
) -> Result<(), TaxiFareError> {
    let client = api_key.map(|key| GooglePlacesClient::new(key.clone()));
    let geocoder = client.as_ref().map(|c| c as &dyn Geocoder);
    let pickup = origin.resolve(geocoder)?;
    let dropoff = destination.resolve(geocoder)?;

    let service = PredictionService::from_directory(model_directory)?;
    let result = predict(&service, pickup, dropoff, departure)?;
    log::info!("\n{result}");
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// builds a request from user-facing inputs and runs it against the service
pub fn predict(
    service: &PredictionService,
    pickup: Coordinate,
    dropoff: Coordinate,
    departure: &Departure,
) -> Result<PredictionResult, TaxiFareError> {
    let hour = time_utils::hour_to_24(departure.hour, departure.meridiem)?;
    let day_of_week = time_utils::day_of_week_to_int(&departure.day)?;
    let request = PredictionRequest::new(hour, departure.minute, day_of_week, pickup, dropoff)?;
    log::debug!(
        "predicting {} {} trip of {:.2} miles",
        departure.day,
        hour,
        request.gps_distance()
    );
    service.predict(&request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        regressor::{LinearRegressor, Regressor},
        training::TrainedModel,
    };
    use taxifare_core::model::feature::{FeatureSchema, Target};

    /// echoes start_hour and day_of_week through a regression model
    fn service() -> PredictionService {
        PredictionService::new(vec![
            TrainedModel {
                target: Target::TripDuration,
                features: FeatureSchema::regression(),
                regressor: Regressor::Linear(LinearRegressor::new(
                    0.0,
                    vec![1.0, 0.0, 0.0, 0.0, 0.0],
                )),
                validation_r2: None,
            },
            TrainedModel {
                target: Target::TipAmount,
                features: FeatureSchema::regression(),
                regressor: Regressor::Linear(LinearRegressor::new(
                    0.0,
                    vec![0.0, 1.0, 0.0, 0.0, 0.0],
                )),
                validation_r2: None,
            },
        ])
        .expect("test invariant failed: service")
    }

    #[test]
    fn test_departure_is_converted() {
        let departure = Departure {
            day: String::from("Sunday"),
            hour: 2,
            minute: 30,
            meridiem: Meridiem::Pm,
        };
        let result = predict(
            &service(),
            Coordinate::new(40.7484, -73.9857),
            Coordinate::new(40.7306, -73.9352),
            &departure,
        )
        .expect("test invariant failed: predict");
        assert_eq!(result.get(&Target::TripDuration), Some(14.0));
        assert_eq!(result.get(&Target::TipAmount), Some(6.0));
        assert_eq!(result.get(&Target::FareAmount), None);
    }

    #[test]
    fn test_invalid_departure() {
        let departure = Departure {
            day: String::from("Someday"),
            hour: 2,
            minute: 30,
            meridiem: Meridiem::Am,
        };
        let result = predict(
            &service(),
            Coordinate::new(40.7484, -73.9857),
            Coordinate::new(40.7306, -73.9352),
            &departure,
        );
        assert!(matches!(result, Err(TaxiFareError::CoreError { .. })));
    }
}
