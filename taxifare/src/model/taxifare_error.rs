use taxifare_core::model::{
    feature::{FeatureSchema, Target},
    CoreError,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaxiFareError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("invalid dataset: {0}")]
    DatasetError(String),
    #[error("invalid dataset split: {0}")]
    SplitError(String),
    #[error("failure training model: {0}")]
    TrainingError(String),
    #[error("failure running model: {0}")]
    PredictionError(String),
    #[error("model for {target} expects features {expected} but was given {found}")]
    SchemaMismatch {
        target: Target,
        expected: FeatureSchema,
        found: FeatureSchema,
    },
    #[error("more than one model provided for target {0}")]
    DuplicateModel(Target),
    #[error("could not retrieve coordinates for the selected address '{0}'")]
    GeocodingError(String),
    #[error("{source}")]
    CoreError {
        #[from]
        source: CoreError,
    },
    #[error("failure reading CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
