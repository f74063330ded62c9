use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the kind of regressor to fit for a target.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum EstimatorConfig {
    DecisionTree { max_depth: usize },
    Linear,
}

impl EstimatorConfig {
    /// prefix used when naming model artifacts
    pub fn artifact_prefix(&self) -> &'static str {
        match self {
            EstimatorConfig::DecisionTree { .. } => "tree",
            EstimatorConfig::Linear => "linear",
        }
    }
}

impl Display for EstimatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstimatorConfig::DecisionTree { max_depth } => {
                write!(f, "decision tree (max depth {max_depth})")
            }
            EstimatorConfig::Linear => write!(f, "linear regression"),
        }
    }
}
