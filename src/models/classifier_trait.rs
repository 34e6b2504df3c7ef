use ndarray::{Array1, Array2};

use crate::error::EvalError;

/// A small trait abstraction for the binary classifiers used by the
/// cross-validation evaluator. The contract lives in the `models` module so
/// implementations can sit next to model code.
pub trait ClassifierModel {
    /// Fit the model. `y` uses the crate convention (1 positive, 0 negative).
    /// Refitting replaces any previously trained state.
    fn fit(&mut self, x: &Array2<f32>, y: &Array1<i32>) -> Result<(), EvalError>;

    /// Positive-class probabilities (0..1), one per row of `x`.
    fn predict_proba(&self, x: &Array2<f32>) -> Vec<f32>;

    /// Hard {0, 1} labels from the 0.5 probability threshold.
    fn predict(&self, x: &Array2<f32>) -> Vec<i32> {
        self.predict_proba(x)
            .iter()
            .map(|&p| i32::from(p >= 0.5))
            .collect()
    }

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
