//! Cross-validated evaluation of binary classifiers.
//!
//! `CrossValidator` splits the dataset with a seeded stratified k-fold,
//! fits the model on every fold, scores train and test partitions with the
//! six crate metrics, averages across folds, prints the console report, and
//! returns the aggregated `EvalSummary`. The `evaluate` free function wraps
//! the default fold count and seed.

use std::time::Instant;

use ndarray::{Array1, Array2, Axis};
use rayon::prelude::*;

use crate::config::ModelConfig;
use crate::error::EvalError;
use crate::metrics;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::factory;
use crate::report::{round2, round3, EvalSummary, SplitReport, TimingReport};
use crate::split::{StratifiedKFold, SHUFFLE_SEED};

/// Default number of cross-validation folds.
pub const DEFAULT_FOLDS: usize = 5;

/// Model input accepted by the evaluator: a ready-to-use instance, or a
/// config the factory turns into one fresh model per fold.
pub enum ModelInput {
    Instance(Box<dyn ClassifierModel>),
    Factory(ModelConfig),
}

#[derive(Debug, Clone, Copy)]
struct MetricSet {
    accuracy: f64,
    precision: f64,
    recall: f64,
    f1: f64,
    roc_auc: f64,
    pr_auc: f64,
}

#[derive(Debug, Clone, Copy)]
struct FoldScores {
    train: MetricSet,
    test: MetricSet,
    fit_secs: f64,
    score_secs: f64,
}

/// Runs stratified k-fold evaluation and aggregates per-fold metrics.
#[derive(Clone, Debug)]
pub struct CrossValidator {
    folds: usize,
    seed: u64,
}

impl Default for CrossValidator {
    fn default() -> Self {
        Self {
            folds: DEFAULT_FOLDS,
            seed: SHUFFLE_SEED,
        }
    }
}

impl CrossValidator {
    pub fn new(folds: usize) -> Self {
        Self {
            folds,
            seed: SHUFFLE_SEED,
        }
    }

    /// Override the shuffle seed (fold layout stays deterministic per seed).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Evaluate a classifier with stratified k-fold cross-validation.
    ///
    /// Factory input builds one fresh model per fold and runs folds in
    /// parallel; an instance is refit sequentially through the same handle.
    /// Prints the formatted report to stdout and returns the summary with
    /// metric means rounded to 3 decimals and timings (ms) to 2.
    ///
    /// Fails on mismatched `x`/`y` lengths, labels outside {0, 1}, a
    /// single-class label vector, fewer than 2 folds, any class smaller
    /// than the fold count, or a learner training error. Failures are
    /// returned as-is; nothing is retried or silently recovered.
    pub fn evaluate(
        &self,
        name: &str,
        input: ModelInput,
        x: &Array2<f32>,
        y: &Array1<i32>,
    ) -> Result<EvalSummary, EvalError> {
        if x.nrows() != y.len() {
            return Err(EvalError::LengthMismatch {
                rows: x.nrows(),
                labels: y.len(),
            });
        }
        if let Some(&bad) = y.iter().find(|&&l| l != 0 && l != 1) {
            return Err(EvalError::NonBinaryLabel(bad));
        }
        let positives = y.iter().filter(|&&l| l == 1).count();
        if positives == 0 || positives == y.len() {
            return Err(EvalError::SingleClass);
        }

        let labels = y.to_vec();
        let folds = StratifiedKFold::new(self.folds)
            .with_seed(self.seed)
            .split(&labels)?;

        let fold_scores: Vec<FoldScores> = match input {
            ModelInput::Factory(config) => folds
                .par_iter()
                .enumerate()
                .map(|(fold, (train_idx, test_idx))| {
                    let mut model = factory::build_model(config.clone());
                    log::debug!(
                        "fold {}: fitting {} on {} train / {} test samples",
                        fold,
                        model.name(),
                        train_idx.len(),
                        test_idx.len()
                    );
                    score_fold(model.as_mut(), x, y, train_idx, test_idx)
                })
                .collect::<Result<_, _>>()?,
            ModelInput::Instance(mut model) => {
                let mut scores = Vec::with_capacity(folds.len());
                for (fold, (train_idx, test_idx)) in folds.iter().enumerate() {
                    log::debug!(
                        "fold {}: refitting {} on {} train / {} test samples",
                        fold,
                        model.name(),
                        train_idx.len(),
                        test_idx.len()
                    );
                    scores.push(score_fold(model.as_mut(), x, y, train_idx, test_idx)?);
                }
                scores
            }
        };

        let n = fold_scores.len() as f64;
        let summary = EvalSummary {
            model: name.to_string(),
            train: aggregate_split(&fold_scores, |f| f.train),
            test: aggregate_split(&fold_scores, |f| f.test),
            times_ms: TimingReport {
                train: round2(fold_scores.iter().map(|f| f.fit_secs).sum::<f64>() / n * 1000.0),
                predict: round2(
                    fold_scores.iter().map(|f| f.score_secs).sum::<f64>() / n * 1000.0,
                ),
            },
        };

        println!("{}", summary);
        Ok(summary)
    }
}

/// Evaluate with the default fold count and shuffle seed.
pub fn evaluate(
    name: &str,
    input: ModelInput,
    x: &Array2<f32>,
    y: &Array1<i32>,
) -> Result<EvalSummary, EvalError> {
    CrossValidator::default().evaluate(name, input, x, y)
}

fn aggregate_split(
    folds: &[FoldScores],
    pick: impl Fn(&FoldScores) -> MetricSet,
) -> SplitReport {
    let n = folds.len() as f64;
    let sums = folds.iter().map(pick).fold([0.0f64; 6], |mut acc, m| {
        acc[0] += m.accuracy;
        acc[1] += m.precision;
        acc[2] += m.recall;
        acc[3] += m.f1;
        acc[4] += m.roc_auc;
        acc[5] += m.pr_auc;
        acc
    });
    SplitReport {
        accuracy: round3(sums[0] / n),
        precision: round3(sums[1] / n),
        recall: round3(sums[2] / n),
        f1: round3(sums[3] / n),
        roc_auc: round3(sums[4] / n),
        pr_auc: round3(sums[5] / n),
    }
}

fn score_fold(
    model: &mut dyn ClassifierModel,
    x: &Array2<f32>,
    y: &Array1<i32>,
    train_idx: &[usize],
    test_idx: &[usize],
) -> Result<FoldScores, EvalError> {
    let x_train = x.select(Axis(0), train_idx);
    let y_train = y.select(Axis(0), train_idx);
    let x_test = x.select(Axis(0), test_idx);
    let y_test = y.select(Axis(0), test_idx);

    let started = Instant::now();
    model.fit(&x_train, &y_train)?;
    let fit_secs = started.elapsed().as_secs_f64();

    let train = score_split(model, &x_train, &y_train.to_vec())?;

    let started = Instant::now();
    let test = score_split(model, &x_test, &y_test.to_vec())?;
    let score_secs = started.elapsed().as_secs_f64();

    Ok(FoldScores {
        train,
        test,
        fit_secs,
        score_secs,
    })
}

fn score_split(
    model: &dyn ClassifierModel,
    x: &Array2<f32>,
    y: &[i32],
) -> Result<MetricSet, EvalError> {
    let proba = model.predict_proba(x);
    let pred: Vec<i32> = proba.iter().map(|&p| i32::from(p >= 0.5)).collect();

    Ok(MetricSet {
        accuracy: metrics::accuracy(y, &pred),
        precision: metrics::precision(y, &pred),
        recall: metrics::recall(y, &pred),
        f1: metrics::f1(y, &pred),
        roc_auc: metrics::roc_auc(y, &proba)?,
        pr_auc: metrics::average_precision(y, &proba)?,
    })
}
