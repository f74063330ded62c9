use super::TrainedModel;
use crate::model::TaxiFareError;
use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

/// writes a model as JSON, gzip-compressed when the path ends in `.gz`
pub fn write_model(model: &TrainedModel, path: &Path) -> Result<(), TaxiFareError> {
    let file = File::create(path)?;
    if is_gzip(path) {
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        serde_json::to_writer(&mut encoder, model)?;
        encoder.finish()?.flush()?;
    } else {
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, model)?;
        writer.flush()?;
    }
    log::info!("wrote {} model to {}", model.target, path.display());
    Ok(())
}

/// reads a model written by [`write_model`]
pub fn read_model(path: &Path) -> Result<TrainedModel, TaxiFareError> {
    let file = File::open(path).map_err(|e| {
        TaxiFareError::ConfigurationError(format!(
            "failure opening model artifact {}: {}",
            path.display(),
            e
        ))
    })?;
    let model: TrainedModel = if is_gzip(path) {
        serde_json::from_reader(BufReader::new(GzDecoder::new(file)))?
    } else {
        serde_json::from_reader(BufReader::new(file))?
    };
    log::debug!("read {} model from {}", model.target, path.display());
    Ok(model)
}

fn is_gzip(path: &Path) -> bool {
    path.extension().map(|e| e == "gz").unwrap_or(false)
}
