mod taxifare_error;

pub mod dataset;
pub mod exploration;
pub mod outlier;
pub mod prediction;
pub mod regressor;
pub mod split;
pub mod training;

pub use taxifare_error::TaxiFareError;
