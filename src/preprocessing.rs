//! Small preprocessing utilities shared by demos and models.
//!
//! Provides a simple Scaler for mean/std standardization. The API operates
//! on `ndarray` matrices so it can be reused ahead of any model wrapper.

use ndarray::{Array2, Axis};

/// Simple standard scaler (per-column mean/std).
#[derive(Clone, Debug)]
pub struct Scaler {
    pub mean: Vec<f32>,
    pub std: Vec<f32>,
}

impl Scaler {
    /// Minimum stddev to avoid division by zero when transforming.
    const MIN_STD: f32 = 1e-6;
}

/// Fit a `Scaler` from an `Array2<f32>` where rows are samples and
/// columns are features.
pub fn fit_scaler(x: &Array2<f32>) -> Scaler {
    assert!(
        x.nrows() > 0 && x.ncols() > 0,
        "fit_scaler requires non-empty matrix"
    );

    let n = x.nrows() as f32;
    let mut mean = vec![0.0f32; x.ncols()];
    let mut std = vec![0.0f32; x.ncols()];
    for (c, column) in x.axis_iter(Axis(1)).enumerate() {
        let m = column.sum() / n;
        let var = column.iter().map(|v| (v - m) * (v - m)).sum::<f32>() / n;
        mean[c] = m;
        std[c] = var.sqrt().max(Scaler::MIN_STD);
    }

    Scaler { mean, std }
}

/// Transform all rows using the provided `Scaler` and return a new
/// `Array2<f32>`.
pub fn transform_all(x: &Array2<f32>, sc: &Scaler) -> Array2<f32> {
    let mut out = x.clone();
    for (c, mut column) in out.axis_iter_mut(Axis(1)).enumerate() {
        column.mapv_inplace(|v| (v - sc.mean[c]) / sc.std[c]);
    }
    out
}

/// Optional convenience: fit scaler and return transformed matrix in one call.
pub fn fit_transform(x: &Array2<f32>) -> Array2<f32> {
    let sc = fit_scaler(x);
    transform_all(x, &sc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaler_centers_and_scales_columns() {
        let x = Array2::from_shape_vec((4, 2), vec![1.0, 10.0, 3.0, 10.0, 5.0, 10.0, 7.0, 10.0])
            .unwrap();
        let scaled = fit_transform(&x);

        for c in 0..2 {
            let column = scaled.column(c);
            let mean: f32 = column.sum() / 4.0;
            assert!(mean.abs() < 1e-5, "column {} not centered: {}", c, mean);
        }
        // constant column survives via the MIN_STD guard
        assert!(scaled.column(1).iter().all(|v| v.abs() < 1e-5));
    }

    #[test]
    fn transform_is_reusable_on_new_data() {
        let x = Array2::from_shape_vec((2, 1), vec![0.0, 2.0]).unwrap();
        let sc = fit_scaler(&x);
        let other = Array2::from_shape_vec((1, 1), vec![4.0]).unwrap();
        let t = transform_all(&other, &sc);
        // mean 1, std 1 -> (4 - 1) / 1
        assert!((t[(0, 0)] - 3.0).abs() < 1e-5);
    }
}
