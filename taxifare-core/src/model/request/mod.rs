mod coordinate;
mod prediction_request;

pub use coordinate::Coordinate;
pub use prediction_request::PredictionRequest;
