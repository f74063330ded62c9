use crate::model::TaxiFareError;
use flate2::read::GzDecoder;
use kdam::tqdm;
use rand::{rngs::StdRng, SeedableRng};
use std::{fs::File, io::Read, path::Path};
use taxifare_core::model::trip::{EngineeredTrip, RawTripRecord, TripRecord};

/// reads, samples, cleans and engineers a trip dataset in one pass.
///
/// rows are sampled before any cleaning so that the same seed selects the
/// same raw rows regardless of how many of them turn out to be incomplete.
pub fn load_trips(
    path: &Path,
    sample_fraction: f64,
    seed: u64,
) -> Result<Vec<EngineeredTrip>, TaxiFareError> {
    let raw = read_raw_records(path)?;
    let sampled = sample_rows(raw, sample_fraction, seed)?;
    let records = drop_incomplete(&sampled);
    let trips = engineer_features(records);
    log::info!("loaded {} trips from {}", trips.len(), path.display());
    Ok(trips)
}

/// reads every row of a trip csv. files ending in `.gz` are decompressed while reading.
/// rows whose values cannot be decoded into their field types are skipped and counted.
pub fn read_raw_records(path: &Path) -> Result<Vec<RawTripRecord>, TaxiFareError> {
    let file = File::open(path).map_err(|e| {
        TaxiFareError::DatasetError(format!("failure opening {}: {}", path.display(), e))
    })?;
    let source: Box<dyn Read> = if is_gzip(path) {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let desc = format!("read {}", path.display());
    let row_iter = tqdm!(reader.deserialize::<RawTripRecord>(), desc = desc);
    let mut rows = vec![];
    let mut malformed = 0;
    for row in row_iter {
        match row {
            Ok(record) => rows.push(record),
            Err(e) if matches!(e.kind(), csv::ErrorKind::Deserialize { .. }) => {
                log::debug!("skipping malformed row: {e}");
                malformed += 1;
            }
            Err(e) => return Err(TaxiFareError::from(e)),
        }
    }
    eprintln!();
    if malformed > 0 {
        log::warn!(
            "skipped {} rows of {} with values that could not be decoded",
            malformed,
            path.display()
        );
    }
    Ok(rows)
}

/// seeded uniform sample without replacement that keeps the original row order.
/// the sample size is `floor(rows.len() * fraction)`.
pub fn sample_rows<T>(rows: Vec<T>, fraction: f64, seed: u64) -> Result<Vec<T>, TaxiFareError> {
    if !(fraction > 0.0 && fraction <= 1.0) {
        return Err(TaxiFareError::ConfigurationError(format!(
            "sample fraction must be in (0, 1], found {fraction}"
        )));
    }
    if fraction == 1.0 {
        return Ok(rows);
    }
    let amount = (rows.len() as f64 * fraction).floor() as usize;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut keep = vec![false; rows.len()];
    for idx in rand::seq::index::sample(&mut rng, rows.len(), amount) {
        keep[idx] = true;
    }
    let sampled = rows
        .into_iter()
        .zip(keep)
        .filter_map(|(row, k)| if k { Some(row) } else { None })
        .collect::<Vec<_>>();
    log::info!("sampled {} rows at fraction {}", sampled.len(), fraction);
    Ok(sampled)
}

/// keeps only rows with every required field present and valid
pub fn drop_incomplete(rows: &[RawTripRecord]) -> Vec<TripRecord> {
    let records = rows
        .iter()
        .filter_map(|row| match TripRecord::try_from(row) {
            Ok(record) => Some(record),
            Err(e) => {
                log::trace!("dropping row: {e}");
                None
            }
        })
        .collect::<Vec<_>>();
    let dropped = rows.len() - records.len();
    if dropped > 0 {
        log::info!(
            "dropped {} of {} rows with missing or invalid values",
            dropped,
            rows.len()
        );
    }
    records
}

pub fn engineer_features(records: Vec<TripRecord>) -> Vec<EngineeredTrip> {
    let total = records.len();
    tqdm!(
        records.into_iter(),
        total = total,
        desc = "engineer features"
    )
    .map(EngineeredTrip::from)
    .collect()
}

fn is_gzip(path: &Path) -> bool {
    path.extension().map(|e| e == "gz").unwrap_or(false)
}
