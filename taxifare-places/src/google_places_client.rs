use crate::{parse_autocomplete, parse_details, Geocoder, PlaceSuggestion, PlacesError};
use reqwest::blocking::Client;
use taxifare_core::model::request::Coordinate;

pub const GOOGLE_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// [`Geocoder`] backed by the Google Places autocomplete and details endpoints.
///
/// calls are blocking and made once, with no retry or timeout.
pub struct GooglePlacesClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GooglePlacesClient {
    pub fn new(api_key: String) -> GooglePlacesClient {
        GooglePlacesClient::with_base_url(api_key, GOOGLE_PLACES_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> GooglePlacesClient {
        GooglePlacesClient {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn try_suggestions(&self, input: &str) -> Result<Vec<PlaceSuggestion>, PlacesError> {
        let url = format!("{}/autocomplete/json", self.base_url);
        let params = [
            ("input", input),
            ("types", "geocode"),
            ("key", self.api_key.as_str()),
        ];
        let body = self.get(&url, &params)?;
        parse_autocomplete(&body)
    }

    pub fn try_coordinates(&self, place_id: &str) -> Result<Option<Coordinate>, PlacesError> {
        let url = format!("{}/details/json", self.base_url);
        let params = [("place_id", place_id), ("key", self.api_key.as_str())];
        let body = self.get(&url, &params)?;
        parse_details(&body)
    }

    fn get(&self, url: &str, params: &[(&str, &str)]) -> Result<String, PlacesError> {
        log::debug!("GET {url}");
        let response = self.client.get(url).query(params).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(PlacesError::UnsuccessfulStatus(status.as_u16()));
        }
        Ok(response.text()?)
    }
}

impl Geocoder for GooglePlacesClient {
    fn suggestions(&self, input: &str) -> Vec<PlaceSuggestion> {
        match self.try_suggestions(input) {
            Ok(suggestions) => suggestions,
            Err(e) => {
                log::warn!("address lookup for '{input}' failed: {e}");
                vec![]
            }
        }
    }

    fn coordinates(&self, place_id: &str) -> Option<Coordinate> {
        match self.try_coordinates(place_id) {
            Ok(coordinate) => coordinate,
            Err(e) => {
                log::warn!("place details for '{place_id}' failed: {e}");
                None
            }
        }
    }
}
