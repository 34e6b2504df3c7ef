//! Aggregated evaluation summary and its console/serde projections.
//!
//! The serialized key names (`Model`, `Train`, `Test`, `Times (ms)`, the
//! metric names) and the console block shape are a compatibility surface;
//! downstream tooling matches on them exactly.

use serde::Serialize;
use std::fmt;

/// Per-split metric means, rounded to 3 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitReport {
    #[serde(rename = "Accuracy")]
    pub accuracy: f64,
    #[serde(rename = "Precision")]
    pub precision: f64,
    #[serde(rename = "Recall")]
    pub recall: f64,
    #[serde(rename = "F1")]
    pub f1: f64,
    #[serde(rename = "ROC-AUC")]
    pub roc_auc: f64,
    #[serde(rename = "PR-AUC")]
    pub pr_auc: f64,
}

/// Mean fit/score durations in milliseconds, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimingReport {
    #[serde(rename = "Train")]
    pub train: f64,
    #[serde(rename = "Predict")]
    pub predict: f64,
}

/// The aggregated cross-validation report returned by the evaluator.
/// Constructed fresh on every evaluation; never cached or mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalSummary {
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Train")]
    pub train: SplitReport,
    #[serde(rename = "Test")]
    pub test: SplitReport,
    #[serde(rename = "Times (ms)")]
    pub times_ms: TimingReport,
}

impl fmt::Display for EvalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📊 Model: {}", self.model)?;
        writeln!(
            f,
            "→ Accuracy      | Train: {:.3} | Test: {:.3}",
            self.train.accuracy, self.test.accuracy
        )?;
        writeln!(
            f,
            "→ Precision     | Train: {:.3} | Test: {:.3}",
            self.train.precision, self.test.precision
        )?;
        writeln!(
            f,
            "→ Recall        | Train: {:.3} | Test: {:.3}",
            self.train.recall, self.test.recall
        )?;
        writeln!(
            f,
            "→ F1-score      | Train: {:.3} | Test: {:.3}",
            self.train.f1, self.test.f1
        )?;
        writeln!(
            f,
            "→ ROC-AUC-score | Train: {:.3} | Test: {:.3}",
            self.train.roc_auc, self.test.roc_auc
        )?;
        writeln!(
            f,
            "→ PR-AUC-score  | Train: {:.3} | Test: {:.3}",
            self.train.pr_auc, self.test.pr_auc
        )?;
        writeln!(f, "→ Train Time: {:.2} ms", self.times_ms.train)?;
        write!(f, "→ Predict Time: {:.2} ms", self.times_ms.predict)
    }
}

/// Round to 3 decimal places, the precision reported for metric means.
pub(crate) fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// Round to 2 decimal places, the precision reported for timings.
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
