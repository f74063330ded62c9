use crate::model::regressor::EstimatorConfig;
use serde::Serialize;
use taxifare_core::model::feature::Target;

/// summary of a training run
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TrainingReport {
    /// complete trips after sampling and null removal
    pub loaded_rows: usize,
    /// trips remaining after outlier removal
    pub filtered_rows: usize,
    pub train_rows: usize,
    pub validation_rows: usize,
    pub test_rows: usize,
    pub models: Vec<ModelReport>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ModelReport {
    pub target: Target,
    pub estimator: EstimatorConfig,
    pub validation_r2: Option<f64>,
    pub artifact: String,
}
