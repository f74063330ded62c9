use super::SplitConfig;
use crate::model::TaxiFareError;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// three disjoint partitions of one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSplit<T> {
    pub train: Vec<T>,
    pub validation: Vec<T>,
    pub test: Vec<T>,
}

impl<T> DatasetSplit<T> {
    /// splits rows twice: first into train and a temporary remainder, then the
    /// remainder into validation and test. the second split uses a generator
    /// seeded from `seed + 1` so the two shuffles are independent but repeatable.
    pub fn new(rows: Vec<T>, config: &SplitConfig) -> Result<DatasetSplit<T>, TaxiFareError> {
        config.validate()?;
        let n = rows.len();
        let (train, temp) = split_once(rows, config.train_fraction, config.seed, config.shuffle);
        let (validation, test) = split_once(
            temp,
            config.val_test_split,
            config.seed.wrapping_add(1),
            config.shuffle,
        );
        log::info!(
            "split {} rows into {} train, {} validation, {} test",
            n,
            train.len(),
            validation.len(),
            test.len()
        );
        Ok(DatasetSplit {
            train,
            validation,
            test,
        })
    }

    /// (train, validation, test) row counts
    pub fn sizes(&self) -> (usize, usize, usize) {
        (self.train.len(), self.validation.len(), self.test.len())
    }
}

/// the first `floor(n * fraction)` rows (after an optional seeded shuffle)
/// and everything else.
fn split_once<T>(rows: Vec<T>, fraction: f64, seed: u64, shuffle: bool) -> (Vec<T>, Vec<T>) {
    let n_first = (rows.len() as f64 * fraction).floor() as usize;
    let mut rows = rows;
    if shuffle {
        let mut rng = StdRng::seed_from_u64(seed);
        rows.shuffle(&mut rng);
    }
    let second = rows.split_off(n_first.min(rows.len()));
    (rows, second)
}
