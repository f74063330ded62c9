use serde::Serialize;
use std::{collections::BTreeMap, fmt::Display};
use taxifare_core::model::feature::Target;

/// one predicted value per target
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct PredictionResult(BTreeMap<Target, f64>);

impl PredictionResult {
    pub fn insert(&mut self, target: Target, value: f64) {
        self.0.insert(target, value);
    }

    pub fn get(&self, target: &Target) -> Option<f64> {
        self.0.get(target).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Target, &f64)> {
        self.0.iter()
    }
}

impl Display for PredictionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (target, value) in self.0.iter() {
            match target {
                Target::FareAmount => writeln!(f, "Predicted fare amount: ${value:.2}")?,
                Target::TripDuration => {
                    writeln!(f, "Predicted trip duration: {value:.1} minutes")?
                }
                Target::TipAmount => writeln!(f, "Predicted tip amount: ${value:.2}")?,
            }
        }
        Ok(())
    }
}
