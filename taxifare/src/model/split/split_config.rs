use crate::model::TaxiFareError;
use serde::{Deserialize, Serialize};

/// how a dataset is partitioned into train, validation and test sets.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SplitConfig {
    /// share of all rows assigned to training, in (0, 1)
    pub train_fraction: f64,
    /// share of the non-training rows assigned to validation, in [0, 1]
    pub val_test_split: f64,
    pub seed: u64,
    pub shuffle: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            train_fraction: 0.6,
            val_test_split: 0.5,
            seed: 42,
            shuffle: true,
        }
    }
}

impl SplitConfig {
    pub fn validate(&self) -> Result<(), TaxiFareError> {
        if !(self.train_fraction > 0.0 && self.train_fraction < 1.0) {
            return Err(TaxiFareError::SplitError(format!(
                "train_fraction must be in (0, 1), found {}",
                self.train_fraction
            )));
        }
        if !(0.0..=1.0).contains(&self.val_test_split) {
            return Err(TaxiFareError::SplitError(format!(
                "val_test_split must be in [0, 1], found {}",
                self.val_test_split
            )));
        }
        Ok(())
    }
}
