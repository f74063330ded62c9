use crate::model::TaxiFareError;
use taxifare_core::model::request::Coordinate;
use taxifare_places::Geocoder;

/// a trip endpoint as entered by a user
#[derive(Debug, Clone, PartialEq)]
pub enum LocationInput {
    Address(String),
    Coordinate(Coordinate),
}

impl LocationInput {
    /// an explicit latitude/longitude pair takes precedence over an address
    pub fn from_arguments(
        label: &str,
        address: Option<&String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<LocationInput, TaxiFareError> {
        match (latitude, longitude, address) {
            (Some(lat), Some(lon), _) => Ok(LocationInput::Coordinate(Coordinate::new(lat, lon))),
            (Some(_), None, _) | (None, Some(_), _) => Err(TaxiFareError::ConfigurationError(
                format!("both --{label}-lat and --{label}-lon must be provided"),
            )),
            (None, None, Some(a)) if !a.trim().is_empty() => {
                Ok(LocationInput::Address(a.trim().to_string()))
            }
            (None, None, _) => Err(TaxiFareError::ConfigurationError(format!(
                "provide --{label}-address or --{label}-lat and --{label}-lon"
            ))),
        }
    }

    /// coordinates of this location, looking up addresses with the first suggestion
    /// returned by the geocoder
    pub fn resolve(&self, geocoder: Option<&dyn Geocoder>) -> Result<Coordinate, TaxiFareError> {
        match self {
            LocationInput::Coordinate(c) => Ok(*c),
            LocationInput::Address(address) => {
                let geocoder = geocoder.ok_or_else(|| {
                    TaxiFareError::ConfigurationError(format!(
                        "a places API key is required to look up '{address}'"
                    ))
                })?;
                let (suggestion, coordinate) = geocoder
                    .resolve(address)
                    .ok_or_else(|| TaxiFareError::GeocodingError(address.clone()))?;
                log::info!("resolved '{}' to {} at {}", address, suggestion.description, coordinate);
                Ok(coordinate)
            }
        }
    }
}
