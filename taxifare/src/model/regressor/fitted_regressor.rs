use super::{DecisionTreeRegressor, EstimatorConfig, LinearRegressor};
use crate::model::TaxiFareError;
use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

/// a fitted model of either supported kind.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Regressor {
    DecisionTree(DecisionTreeRegressor),
    Linear(LinearRegressor),
}

impl Regressor {
    pub fn fit(
        config: &EstimatorConfig,
        records: ArrayView2<f64>,
        targets: ArrayView1<f64>,
    ) -> Result<Regressor, TaxiFareError> {
        match config {
            EstimatorConfig::DecisionTree { max_depth } => {
                DecisionTreeRegressor::fit(records, targets, *max_depth).map(Regressor::DecisionTree)
            }
            EstimatorConfig::Linear => LinearRegressor::fit(records, targets).map(Regressor::Linear),
        }
    }

    pub fn n_features(&self) -> usize {
        match self {
            Regressor::DecisionTree(tree) => tree.n_features(),
            Regressor::Linear(linear) => linear.n_features(),
        }
    }

    pub fn predict_row(&self, row: &[f64]) -> Result<f64, TaxiFareError> {
        match self {
            Regressor::DecisionTree(tree) => tree.predict_row(row),
            Regressor::Linear(linear) => linear.predict_row(row),
        }
    }

    /// one prediction per row of `records`
    pub fn predict(&self, records: ArrayView2<f64>) -> Result<Array1<f64>, TaxiFareError> {
        let predictions = records
            .rows()
            .into_iter()
            .map(|row| match row.as_slice() {
                Some(slice) => self.predict_row(slice),
                None => self.predict_row(&row.to_vec()),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Array1::from(predictions))
    }
}
