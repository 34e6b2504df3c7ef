//! Dataset helpers shared by demos and tests.
//!
//! Provides a label census and a seeded synthetic dataset generator so
//! evaluation runs are reproducible without fixture files.

use std::collections::BTreeMap;

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Count samples per label.
pub fn class_counts(y: &[i32]) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for &label in y {
        *counts.entry(label).or_insert(0) += 1;
    }
    counts
}

/// Generate a balanced, mostly separable binary dataset.
///
/// Rows alternate between the classes; class-1 features cluster around +1.0
/// and class-0 around -1.0 with uniform noise wide enough that the classes
/// overlap, so learners of different capacity land on different scores.
pub fn synthetic_binary(
    n_samples: usize,
    n_features: usize,
    seed: u64,
) -> (Array2<f32>, Array1<i32>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(n_samples * n_features);
    let mut labels = Vec::with_capacity(n_samples);

    for i in 0..n_samples {
        let label = (i % 2) as i32;
        let center = if label == 1 { 1.0f32 } else { -1.0f32 };
        for _ in 0..n_features {
            data.push(center + rng.gen_range(-1.5f32..1.5f32));
        }
        labels.push(label);
    }

    let x = Array2::from_shape_vec((n_samples, n_features), data)
        .expect("synthetic_binary: shape mismatch");
    (x, Array1::from_vec(labels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_counts_censuses_labels() {
        let counts = class_counts(&[0, 1, 1, 0, 1]);
        assert_eq!(counts[&0], 2);
        assert_eq!(counts[&1], 3);
    }

    #[test]
    fn synthetic_binary_is_balanced_and_reproducible() {
        let (x, y) = synthetic_binary(100, 4, 3);
        assert_eq!(x.nrows(), 100);
        assert_eq!(x.ncols(), 4);
        let counts = class_counts(&y.to_vec());
        assert_eq!(counts[&0], 50);
        assert_eq!(counts[&1], 50);

        let (x2, y2) = synthetic_binary(100, 4, 3);
        assert_eq!(x, x2);
        assert_eq!(y, y2);
    }

    #[test]
    fn synthetic_binary_seeds_differ() {
        let (a, _) = synthetic_binary(20, 2, 1);
        let (b, _) = synthetic_binary(20, 2, 2);
        assert_ne!(a, b);
    }
}
