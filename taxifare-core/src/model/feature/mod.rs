mod derived_features;
mod feature_column;
mod feature_schema;
mod feature_source;
mod feature_vector;
mod target;

pub use derived_features::DerivedFeatures;
pub use feature_column::FeatureColumn;
pub use feature_schema::FeatureSchema;
pub use feature_source::FeatureSource;
pub use feature_vector::FeatureVector;
pub use target::Target;
