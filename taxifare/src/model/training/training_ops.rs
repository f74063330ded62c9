use super::{
    model_artifact_ops, ManifestEntry, ModelManifest, ModelReport, ModelSpec, TrainedModel,
    TrainingConfiguration, TrainingReport,
};
use crate::model::{
    dataset::dataset_ops, outlier::outlier_ops, regressor::Regressor, split::DatasetSplit,
    TaxiFareError,
};
use linfa::prelude::*;
use ndarray::{Array1, Array2};
use std::path::Path;
use taxifare_core::model::{
    feature::{FeatureSchema, Target},
    trip::EngineeredTrip,
};

/// runs the full pipeline: load, filter, split, then fit, score and persist
/// each configured model. a manifest listing the artifacts in configuration
/// order is written alongside them.
pub fn run(config: &TrainingConfiguration) -> Result<TrainingReport, TaxiFareError> {
    config.validate()?;
    let trips = dataset_ops::load_trips(
        Path::new(&config.input_file),
        config.sample_fraction,
        config.sample_seed,
    )?;
    let loaded_rows = trips.len();
    let filtered = outlier_ops::remove_outliers(trips, &config.outliers);
    let filtered_rows = filtered.len();
    let split = DatasetSplit::new(filtered, &config.split)?;

    let output_directory = Path::new(&config.output_directory);
    std::fs::create_dir_all(output_directory)?;

    let mut manifest = ModelManifest::default();
    let mut models = vec![];
    for spec in config.models.iter() {
        let model = train_model(spec, &split.train, &split.validation)?;
        let filename = spec.artifact_filename(config.compress_artifacts);
        let path = output_directory.join(&filename);
        model_artifact_ops::write_model(&model, &path)?;
        manifest.models.push(ManifestEntry {
            target: spec.target,
            features: spec.features.clone(),
            artifact: filename,
        });
        models.push(ModelReport {
            target: spec.target,
            estimator: spec.estimator.clone(),
            validation_r2: model.validation_r2,
            artifact: path.to_string_lossy().to_string(),
        });
    }
    manifest.write(output_directory)?;

    let (train_rows, validation_rows, test_rows) = split.sizes();
    Ok(TrainingReport {
        loaded_rows,
        filtered_rows,
        train_rows,
        validation_rows,
        test_rows,
        models,
    })
}

/// fits one model on the training rows and scores it on the validation rows
pub fn train_model(
    spec: &ModelSpec,
    train: &[EngineeredTrip],
    validation: &[EngineeredTrip],
) -> Result<TrainedModel, TaxiFareError> {
    if train.is_empty() {
        return Err(TaxiFareError::TrainingError(format!(
            "no training rows available for {}",
            spec.target
        )));
    }
    log::info!(
        "training {} for {} on {} rows",
        spec.estimator,
        spec.target,
        train.len()
    );
    let records = feature_matrix(train, &spec.features)?;
    let targets = target_vector(train, &spec.target);
    let regressor = Regressor::fit(&spec.estimator, records.view(), targets.view())?;
    let mut model = TrainedModel {
        target: spec.target,
        features: spec.features.clone(),
        regressor,
        validation_r2: None,
    };

    if validation.is_empty() {
        log::warn!("no validation rows, skipping score for {}", spec.target);
    } else {
        let validation_records = feature_matrix(validation, &spec.features)?;
        let validation_targets = target_vector(validation, &spec.target);
        let r2 = r2_score(&model, &validation_records, &validation_targets)?;
        log::info!("{} validation R2: {}", spec.target, r2);
        model.validation_r2 = Some(r2).filter(|v| v.is_finite());
    }
    Ok(model)
}

/// coefficient of determination of the model's predictions against `targets`
pub fn r2_score(
    model: &TrainedModel,
    records: &Array2<f64>,
    targets: &Array1<f64>,
) -> Result<f64, TaxiFareError> {
    let predictions = model.predict_batch(records.view())?;
    predictions
        .r2(targets)
        .map_err(|e| TaxiFareError::TrainingError(format!("failure computing R2: {e}")))
}

/// one row per trip, columns in schema order
pub fn feature_matrix(
    trips: &[EngineeredTrip],
    schema: &FeatureSchema,
) -> Result<Array2<f64>, TaxiFareError> {
    let values = trips
        .iter()
        .flat_map(|t| schema.values(t))
        .collect::<Vec<_>>();
    Array2::from_shape_vec((trips.len(), schema.len()), values).map_err(|e| {
        TaxiFareError::TrainingError(format!("failure building feature matrix: {e}"))
    })
}

pub fn target_vector(trips: &[EngineeredTrip], target: &Target) -> Array1<f64> {
    trips.iter().map(|t| t.target_value(target)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{outlier::OutlierConfig, split::SplitConfig};
    use std::fmt::Write;

    /// a synthetic trip csv where fare grows with distance and tips are 15% of fare
    fn synthetic_csv(rows: usize) -> String {
        let mut csv = String::from(
            "pickup_datetime,dropoff_datetime,passenger_count,trip_distance,pickup_longitude,pickup_latitude,rate_code,store_and_fwd_flag,dropoff_longitude,dropoff_latitude,fare_amount,tip_amount\n",
        );
        for i in 0..rows {
            let day = 6 + i % 7;
            let hour = i % 24;
            let minutes = 5 + i % 40;
            let offset = (i % 50) as f64 * 0.002;
            let jitter = ((i * 13) % 17) as f64 * 0.0005;
            let pickup_lon = -73.99 + jitter;
            let pickup_lat = 40.73 + ((i * 7) % 11) as f64 * 0.0004;
            let dropoff_lon = -73.97 + offset;
            let dropoff_lat = 40.75 + offset * 0.5;
            let distance = 0.5 + (i % 50) as f64 * 0.15;
            let fare = 2.5 + 2.5 * distance;
            let tip = 0.15 * fare + (i % 3) as f64 * 0.1;
            writeln!(
                csv,
                "2014-01-{day:02} {hour:02}:00:00,2014-01-{day:02} {hour:02}:{minutes:02}:00,1,{distance},{pickup_lon},{pickup_lat},1,N,{dropoff_lon},{dropoff_lat},{fare},{tip}"
            )
            .expect("test invariant failed: write row");
        }
        csv
    }

    #[test]
    fn test_feature_matrix_layout() {
        let dir = tempfile::tempdir().expect("test invariant failed: tempdir");
        let path = dir.path().join("trips.csv");
        std::fs::write(&path, synthetic_csv(3)).expect("test invariant failed: write");
        let trips = dataset_ops::load_trips(&path, 1.0, 1).expect("test invariant failed: load");
        let matrix = feature_matrix(&trips, &FeatureSchema::regression())
            .expect("test invariant failed: matrix");
        assert_eq!(matrix.dim(), (3, 5));
        // start_hour, day_of_week, gps_distance, pickup_latitude, pickup_longitude
        assert_eq!(matrix[[1, 0]], 1.0);
        assert_eq!(matrix[[0, 1]], 0.0);
        assert_eq!(matrix[[1, 3]], trips[1].record.pickup_latitude);
        assert_eq!(matrix[[2, 4]], trips[2].record.pickup_longitude);
        let durations = target_vector(&trips, &Target::TripDuration);
        assert_eq!(durations.to_vec(), vec![5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_training_without_rows_fails() {
        let spec = ModelSpec::linear(Target::TipAmount);
        let result = train_model(&spec, &[], &[]);
        assert!(matches!(result, Err(TaxiFareError::TrainingError(_))));
    }

    #[test]
    fn test_full_training_run() {
        let dir = tempfile::tempdir().expect("test invariant failed: tempdir");
        let input = dir.path().join("trips.csv");
        let output = dir.path().join("models");
        std::fs::write(&input, synthetic_csv(600)).expect("test invariant failed: write");

        let config = TrainingConfiguration {
            input_file: input.to_string_lossy().to_string(),
            output_directory: output.to_string_lossy().to_string(),
            sample_fraction: 1.0,
            outliers: OutlierConfig {
                bounded_columns: vec![],
                trip_duration_quantile: None,
                dropoff_longitude_quantiles: None,
                ..Default::default()
            },
            split: SplitConfig::default(),
            ..Default::default()
        };
        let report = run(&config).expect("test invariant failed: training run");

        assert_eq!(report.loaded_rows, 600);
        assert_eq!(report.filtered_rows, 600);
        assert_eq!(
            report.train_rows + report.validation_rows + report.test_rows,
            600
        );
        assert_eq!(report.train_rows, 360);
        assert_eq!(report.models.len(), 3);
        for model in report.models.iter() {
            assert!(Path::new(&model.artifact).exists());
        }
        let fare = &report.models[0];
        assert_eq!(fare.target, Target::FareAmount);
        let r2 = fare
            .validation_r2
            .expect("test invariant failed: validation rows present");
        assert!(r2 > 0.9, "fare is a function of distance, found R2 {r2}");

        let manifest = ModelManifest::read(&output).expect("test invariant failed: manifest");
        let targets = manifest.models.iter().map(|m| m.target).collect::<Vec<_>>();
        assert_eq!(
            targets,
            vec![Target::FareAmount, Target::TripDuration, Target::TipAmount]
        );
        assert_eq!(manifest.models[2].artifact, "linear_tip_amount.json");
        let loaded = manifest
            .load_models(&output)
            .expect("test invariant failed: load models");
        assert_eq!(loaded.len(), 3);
    }
}
