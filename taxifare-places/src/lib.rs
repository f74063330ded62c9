//! geocoding support for taxifare. a [`Geocoder`] turns free-text addresses
//! into ranked [`PlaceSuggestion`]s and a selected suggestion into a
//! [`taxifare_core::model::request::Coordinate`].
mod geocoder;
mod google_places_client;
mod place_suggestion;
mod places_error;
mod places_response;

pub use geocoder::Geocoder;
pub use google_places_client::{GooglePlacesClient, GOOGLE_PLACES_BASE_URL};
pub use place_suggestion::PlaceSuggestion;
pub use places_error::PlacesError;
pub use places_response::{parse_autocomplete, parse_details};
