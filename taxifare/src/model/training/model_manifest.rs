use super::{model_artifact_ops, TrainedModel};
use crate::model::TaxiFareError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use taxifare_core::model::feature::{FeatureSchema, Target};

pub const MANIFEST_FILENAME: &str = "manifest.json";

/// lists the artifacts of a model directory in prediction order
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ModelManifest {
    pub models: Vec<ManifestEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ManifestEntry {
    pub target: Target,
    pub features: FeatureSchema,
    /// artifact file name, relative to the manifest
    pub artifact: String,
}

impl ModelManifest {
    pub fn write(&self, directory: &Path) -> Result<(), TaxiFareError> {
        let path = directory.join(MANIFEST_FILENAME);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;
        log::info!("wrote model manifest to {}", path.display());
        Ok(())
    }

    pub fn read(directory: &Path) -> Result<ModelManifest, TaxiFareError> {
        let path = directory.join(MANIFEST_FILENAME);
        let s = std::fs::read_to_string(&path).map_err(|e| {
            TaxiFareError::ConfigurationError(format!(
                "failure reading {}: {}",
                path.display(),
                e
            ))
        })?;
        let manifest = serde_json::from_str(&s)?;
        Ok(manifest)
    }

    /// loads every listed artifact, rejecting any whose stored schema differs
    /// from the one recorded in the manifest
    pub fn load_models(&self, directory: &Path) -> Result<Vec<TrainedModel>, TaxiFareError> {
        self.models
            .iter()
            .map(|entry| {
                let model = model_artifact_ops::read_model(&directory.join(&entry.artifact))?;
                if model.target != entry.target {
                    return Err(TaxiFareError::ConfigurationError(format!(
                        "artifact {} holds a {} model but is listed for {}",
                        entry.artifact, model.target, entry.target
                    )));
                }
                if model.features != entry.features {
                    return Err(TaxiFareError::SchemaMismatch {
                        target: entry.target,
                        expected: entry.features.clone(),
                        found: model.features,
                    });
                }
                Ok(model)
            })
            .collect()
    }
}
