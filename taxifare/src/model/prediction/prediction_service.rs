use super::PredictionResult;
use crate::model::{
    training::{ModelManifest, TrainedModel},
    TaxiFareError,
};
use std::{collections::HashSet, path::Path};
use taxifare_core::model::{feature::Target, request::PredictionRequest};

/// answers prediction requests with a fixed, ordered set of models, at most one
/// per target. each model receives a feature vector built from its own schema.
#[derive(Debug, Clone)]
pub struct PredictionService {
    models: Vec<TrainedModel>,
}

impl PredictionService {
    pub fn new(models: Vec<TrainedModel>) -> Result<PredictionService, TaxiFareError> {
        let mut seen = HashSet::new();
        for model in models.iter() {
            if !seen.insert(model.target) {
                return Err(TaxiFareError::DuplicateModel(model.target));
            }
        }
        Ok(PredictionService { models })
    }

    /// loads the models listed in a directory's manifest, in manifest order
    pub fn from_directory(directory: &Path) -> Result<PredictionService, TaxiFareError> {
        let manifest = ModelManifest::read(directory)?;
        let models = manifest.load_models(directory)?;
        log::info!(
            "loaded {} models from {}",
            models.len(),
            directory.display()
        );
        PredictionService::new(models)
    }

    pub fn targets(&self) -> Vec<Target> {
        self.models.iter().map(|m| m.target).collect()
    }

    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, TaxiFareError> {
        let mut result = PredictionResult::default();
        for model in self.models.iter() {
            let vector = model.features.vectorize(request);
            let value = model.predict(&vector)?;
            log::debug!("{} prediction: {}", model.target, value);
            result.insert(model.target, value);
        }
        Ok(result)
    }
}
