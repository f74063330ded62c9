mod prediction_result;
mod prediction_service;

pub use prediction_result::PredictionResult;
pub use prediction_service::PredictionService;
