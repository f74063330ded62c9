use crate::model::TaxiFareError;
use linfa::prelude::*;
use linfa_linear::LinearRegression;
use ndarray::{ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

/// ordinary least squares with an intercept term. fitting is delegated to
/// linfa-linear; only the learned parameters are kept so the model serializes
/// as plain numbers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LinearRegressor {
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearRegressor {
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> LinearRegressor {
        LinearRegressor {
            intercept,
            coefficients,
        }
    }

    pub fn fit(
        records: ArrayView2<f64>,
        targets: ArrayView1<f64>,
    ) -> Result<LinearRegressor, TaxiFareError> {
        if records.nrows() == 0 {
            return Err(TaxiFareError::TrainingError(String::from(
                "cannot fit a linear regression to zero rows",
            )));
        }
        if records.nrows() != targets.len() {
            return Err(TaxiFareError::TrainingError(format!(
                "linear regression given {} rows but {} targets",
                records.nrows(),
                targets.len()
            )));
        }
        let dataset = Dataset::new(records.to_owned(), targets.to_owned());
        let fitted = LinearRegression::new().fit(&dataset).map_err(|e| {
            TaxiFareError::TrainingError(format!("failure fitting linear regression: {e}"))
        })?;
        let model = LinearRegressor {
            intercept: fitted.intercept(),
            coefficients: fitted.params().to_vec(),
        };
        log::debug!(
            "fit linear regression with intercept {} and coefficients {:?}",
            model.intercept,
            model.coefficients
        );
        Ok(model)
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    pub fn predict_row(&self, row: &[f64]) -> Result<f64, TaxiFareError> {
        if row.len() != self.coefficients.len() {
            return Err(TaxiFareError::PredictionError(format!(
                "linear regression expects {} features, found {}",
                self.coefficients.len(),
                row.len()
            )));
        }
        let dot: f64 = row
            .iter()
            .zip(self.coefficients.iter())
            .map(|(x, b)| x * b)
            .sum();
        Ok(self.intercept + dot)
    }
}
