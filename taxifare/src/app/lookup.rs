use crate::model::TaxiFareError;
use taxifare_places::{Geocoder, GooglePlacesClient};

/// prints the places API suggestions for an address, one per line
pub fn run_lookup(address: &str, api_key: &str) -> Result<(), TaxiFareError> {
    let client = GooglePlacesClient::new(api_key.to_string());
    let suggestions = client.suggestions(address);
    if suggestions.is_empty() {
        log::warn!("no suggestions found for '{address}'");
    }
    for suggestion in suggestions.iter() {
        println!("{suggestion}");
    }
    Ok(())
}
