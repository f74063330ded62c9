use super::ModelSpec;
use crate::model::{outlier::OutlierConfig, split::SplitConfig, TaxiFareError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use taxifare_core::model::feature::Target;

/// defines a full training run, from the input dataset to the artifact directory
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct TrainingConfiguration {
    /// trip csv, optionally gzip-compressed
    pub input_file: String,
    /// directory receiving model artifacts, the manifest and the report
    pub output_directory: String,
    /// share of raw rows sampled before cleaning, in (0, 1]
    pub sample_fraction: f64,
    pub sample_seed: u64,
    pub outliers: OutlierConfig,
    pub split: SplitConfig,
    /// models trained in this order, which is also the order predictions are reported in
    pub models: Vec<ModelSpec>,
    /// write artifacts as `.json.gz`
    pub compress_artifacts: bool,
}

impl Default for TrainingConfiguration {
    fn default() -> Self {
        Self {
            input_file: String::from("data/nyc_taxi_data_2014.csv"),
            output_directory: String::from("models"),
            sample_fraction: 0.03,
            sample_seed: 42,
            outliers: OutlierConfig::default(),
            split: SplitConfig::default(),
            models: vec![
                ModelSpec::decision_tree(Target::FareAmount, 10),
                ModelSpec::decision_tree(Target::TripDuration, 10),
                ModelSpec::linear(Target::TipAmount),
            ],
            compress_artifacts: false,
        }
    }
}

impl TrainingConfiguration {
    pub fn validate(&self) -> Result<(), TaxiFareError> {
        if !(self.sample_fraction > 0.0 && self.sample_fraction <= 1.0) {
            return Err(TaxiFareError::ConfigurationError(format!(
                "sample_fraction must be in (0, 1], found {}",
                self.sample_fraction
            )));
        }
        self.outliers.validate()?;
        self.split.validate()?;
        if self.models.is_empty() {
            return Err(TaxiFareError::ConfigurationError(String::from(
                "at least one model must be configured",
            )));
        }
        let mut targets = HashSet::new();
        for spec in self.models.iter() {
            if !targets.insert(spec.target) {
                return Err(TaxiFareError::DuplicateModel(spec.target));
            }
            if spec.features.is_empty() {
                return Err(TaxiFareError::ConfigurationError(format!(
                    "model for {} has no features",
                    spec.target
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<&String> for TrainingConfiguration {
    type Error = TaxiFareError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                TaxiFareError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                TaxiFareError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                TaxiFareError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                TaxiFareError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(TaxiFareError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
