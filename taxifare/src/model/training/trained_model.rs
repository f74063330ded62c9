use crate::model::{regressor::Regressor, TaxiFareError};
use ndarray::{Array1, ArrayView2};
use serde::{Deserialize, Serialize};
use taxifare_core::model::feature::{FeatureSchema, FeatureVector, Target};

/// a fitted regressor together with the target and feature schema it was
/// trained on. this is the unit that is written to and read from an artifact.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrainedModel {
    pub target: Target,
    pub features: FeatureSchema,
    pub regressor: Regressor,
    /// coefficient of determination on the validation set, when one was available
    pub validation_r2: Option<f64>,
}

impl TrainedModel {
    /// predicts from a single vector, which must have been assembled for this model's schema
    pub fn predict(&self, vector: &FeatureVector) -> Result<f64, TaxiFareError> {
        if vector.schema() != &self.features {
            return Err(TaxiFareError::SchemaMismatch {
                target: self.target,
                expected: self.features.clone(),
                found: vector.schema().clone(),
            });
        }
        self.regressor.predict_row(vector.values())
    }

    /// predicts a batch of rows laid out in this model's schema order
    pub fn predict_batch(&self, records: ArrayView2<f64>) -> Result<Array1<f64>, TaxiFareError> {
        if records.ncols() != self.features.len() {
            return Err(TaxiFareError::PredictionError(format!(
                "model for {} expects {} columns, found {}",
                self.target,
                self.features.len(),
                records.ncols()
            )));
        }
        self.regressor.predict(records)
    }
}
