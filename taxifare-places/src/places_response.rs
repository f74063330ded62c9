use crate::{PlaceSuggestion, PlacesError};
use serde::Deserialize;
use taxifare_core::model::request::Coordinate;

#[derive(Deserialize, Debug)]
struct AutocompleteResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    predictions: Vec<AutocompletePrediction>,
}

#[derive(Deserialize, Debug)]
struct AutocompletePrediction {
    description: String,
    place_id: String,
}

#[derive(Deserialize, Debug)]
struct DetailsResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    result: Option<DetailsResult>,
}

#[derive(Deserialize, Debug)]
struct DetailsResult {
    #[serde(default)]
    geometry: Option<DetailsGeometry>,
}

#[derive(Deserialize, Debug)]
struct DetailsGeometry {
    #[serde(default)]
    location: Option<DetailsLocation>,
}

#[derive(Deserialize, Debug)]
struct DetailsLocation {
    lat: Option<f64>,
    lng: Option<f64>,
}

/// decodes an autocomplete response body into suggestions, in ranked order.
/// a body without predictions decodes to an empty list.
pub fn parse_autocomplete(body: &str) -> Result<Vec<PlaceSuggestion>, PlacesError> {
    let response: AutocompleteResponse = serde_json::from_str(body)?;
    log_status("autocomplete", response.status.as_deref());
    let suggestions = response
        .predictions
        .into_iter()
        .map(|p| PlaceSuggestion {
            description: p.description,
            place_id: p.place_id,
        })
        .collect();
    Ok(suggestions)
}

/// decodes a place details response body into the place location, if present.
pub fn parse_details(body: &str) -> Result<Option<Coordinate>, PlacesError> {
    let response: DetailsResponse = serde_json::from_str(body)?;
    log_status("details", response.status.as_deref());
    let location = response
        .result
        .and_then(|r| r.geometry)
        .and_then(|g| g.location);
    let coordinate = match location {
        Some(DetailsLocation {
            lat: Some(lat),
            lng: Some(lng),
        }) => Some(Coordinate::new(lat, lng)),
        _ => None,
    };
    Ok(coordinate)
}

fn log_status(endpoint: &str, status: Option<&str>) {
    match status {
        None | Some("OK") => {}
        Some(other) => log::warn!("places {endpoint} request returned status {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_autocomplete() {
        let body = r#"{
            "predictions": [
                {"description": "Empire State Building, New York, NY, USA", "place_id": "ChIJaXQRs6lZwokRY6EFpJnhNNE", "types": ["premise"]},
                {"description": "Empire Blvd, Brooklyn, NY, USA", "place_id": "EiVFbXBpcmUgQmx2ZA"}
            ],
            "status": "OK"
        }"#;
        let result = parse_autocomplete(body).expect("body should decode");
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].place_id, "ChIJaXQRs6lZwokRY6EFpJnhNNE");
        assert_eq!(result[1].description, "Empire Blvd, Brooklyn, NY, USA");
    }

    #[test]
    fn test_parse_autocomplete_denied_is_empty() {
        let body = r#"{"error_message": "The provided API key is invalid.", "predictions": [], "status": "REQUEST_DENIED"}"#;
        assert!(parse_autocomplete(body).unwrap().is_empty());
        assert!(parse_autocomplete(r#"{}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_details() {
        let body = r#"{
            "result": {"geometry": {"location": {"lat": 40.7484405, "lng": -73.98566439999999}}},
            "status": "OK"
        }"#;
        let coordinate = parse_details(body).unwrap().expect("location expected");
        assert_eq!(coordinate.latitude, 40.7484405);
        assert_eq!(coordinate.longitude, -73.98566439999999);
    }

    #[test]
    fn test_parse_details_missing_location() {
        assert_eq!(parse_details(r#"{"status": "NOT_FOUND"}"#).unwrap(), None);
        let partial = r#"{"result": {"geometry": {"location": {"lat": 40.7}}}}"#;
        assert_eq!(parse_details(partial).unwrap(), None);
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        assert!(parse_autocomplete("<html>").is_err());
        assert!(parse_details("").is_err());
    }
}
