//! Stratified k-fold splitting with deterministic shuffling.
//!
//! The splitter groups sample indices per class, shuffles within each class
//! using a seeded RNG, and deals class members round-robin into the test
//! folds so every fold preserves the overall class balance and holds at
//! least one sample of each class.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::EvalError;

/// Default shuffle seed, fixed so repeated runs produce identical folds.
pub const SHUFFLE_SEED: u64 = 42;

/// Stratified k-fold cross-validation splitter
#[derive(Clone, Debug)]
pub struct StratifiedKFold {
    n_splits: usize,
    shuffle: bool,
    seed: u64,
}

impl StratifiedKFold {
    /// Create a new splitter with shuffling enabled and the default seed
    pub fn new(n_splits: usize) -> Self {
        Self {
            n_splits,
            shuffle: true,
            seed: SHUFFLE_SEED,
        }
    }

    /// Set random seed for shuffling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Disable shuffling
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle = false;
        self
    }

    /// Generate sorted (train, test) index lists for each fold.
    ///
    /// Fails when fewer than two folds are requested or when any class has
    /// fewer members than the fold count, since stratification could not
    /// place one of its samples in every test partition.
    pub fn split(&self, y: &[i32]) -> Result<Vec<(Vec<usize>, Vec<usize>)>, EvalError> {
        if self.n_splits < 2 {
            return Err(EvalError::TooFewFolds(self.n_splits));
        }

        // BTreeMap keeps label iteration order stable across runs
        let mut per_class: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
        for (idx, &label) in y.iter().enumerate() {
            per_class.entry(label).or_default().push(idx);
        }

        for (&label, members) in &per_class {
            if members.len() < self.n_splits {
                return Err(EvalError::ClassTooSmall {
                    label,
                    count: members.len(),
                    folds: self.n_splits,
                });
            }
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut test_folds: Vec<Vec<usize>> = vec![Vec::new(); self.n_splits];
        for members in per_class.values() {
            let mut members = members.clone();
            if self.shuffle {
                members.shuffle(&mut rng);
            }
            for (i, idx) in members.into_iter().enumerate() {
                test_folds[i % self.n_splits].push(idx);
            }
        }

        let n_samples = y.len();
        let folds = test_folds
            .into_iter()
            .map(|mut test| {
                test.sort_unstable();
                let mut in_test = vec![false; n_samples];
                for &idx in &test {
                    in_test[idx] = true;
                }
                let train: Vec<usize> = (0..n_samples).filter(|&i| !in_test[i]).collect();
                (train, test)
            })
            .collect();

        Ok(folds)
    }
}
