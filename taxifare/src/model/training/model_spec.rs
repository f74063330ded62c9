use crate::model::regressor::EstimatorConfig;
use serde::{Deserialize, Serialize};
use taxifare_core::model::feature::{FeatureSchema, Target};

/// one model to train: what it predicts, how, and from which features.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModelSpec {
    pub target: Target,
    pub estimator: EstimatorConfig,
    pub features: FeatureSchema,
}

impl ModelSpec {
    pub fn decision_tree(target: Target, max_depth: usize) -> ModelSpec {
        ModelSpec {
            target,
            estimator: EstimatorConfig::DecisionTree { max_depth },
            features: FeatureSchema::tree(),
        }
    }

    pub fn linear(target: Target) -> ModelSpec {
        ModelSpec {
            target,
            estimator: EstimatorConfig::Linear,
            features: FeatureSchema::regression(),
        }
    }

    /// file name of this model's artifact, such as `tree_fare_amount.json`
    pub fn artifact_filename(&self, compress: bool) -> String {
        let extension = if compress { "json.gz" } else { "json" };
        format!(
            "{}_{}.{}",
            self.estimator.artifact_prefix(),
            self.target,
            extension
        )
    }
}
