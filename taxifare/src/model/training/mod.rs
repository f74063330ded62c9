mod model_manifest;
mod model_spec;
mod trained_model;
mod training_configuration;
mod training_report;

pub mod model_artifact_ops;
pub mod training_ops;

pub use model_manifest::{ManifestEntry, ModelManifest, MANIFEST_FILENAME};
pub use model_spec::ModelSpec;
pub use trained_model::TrainedModel;
pub use training_configuration::TrainingConfiguration;
pub use training_report::{ModelReport, TrainingReport};
