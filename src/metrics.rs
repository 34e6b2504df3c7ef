//! Binary classification metrics over {0, 1} labels.
//!
//! Label-based metrics (accuracy, precision, recall, F1) take hard
//! predictions; the ranking metrics (ROC-AUC, average precision) take
//! positive-class scores. Precision, recall, and F1 are zero-division safe:
//! an empty denominator yields 0 instead of an error.

use std::cmp::Ordering;

use crate::error::EvalError;

fn confusion_counts(y_true: &[i32], y_pred: &[i32]) -> (usize, usize, usize) {
    assert_eq!(
        y_true.len(),
        y_pred.len(),
        "Labels and predictions must have equal lengths"
    );
    let mut tp = 0;
    let mut fp = 0;
    let mut fn_ = 0;
    for (&truth, &pred) in y_true.iter().zip(y_pred.iter()) {
        match (truth, pred) {
            (1, 1) => tp += 1,
            (_, 1) => fp += 1,
            (1, _) => fn_ += 1,
            _ => {}
        }
    }
    (tp, fp, fn_)
}

/// Fraction of predictions matching the truth.
pub fn accuracy(y_true: &[i32], y_pred: &[i32]) -> f64 {
    assert_eq!(
        y_true.len(),
        y_pred.len(),
        "Labels and predictions must have equal lengths"
    );
    if y_true.is_empty() {
        return 0.0;
    }
    let hits = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    hits as f64 / y_true.len() as f64
}

/// TP / (TP + FP); 0 when nothing was predicted positive.
pub fn precision(y_true: &[i32], y_pred: &[i32]) -> f64 {
    let (tp, fp, _) = confusion_counts(y_true, y_pred);
    if tp + fp == 0 {
        0.0
    } else {
        tp as f64 / (tp + fp) as f64
    }
}

/// TP / (TP + FN); 0 when the truth holds no positives.
pub fn recall(y_true: &[i32], y_pred: &[i32]) -> f64 {
    let (tp, _, fn_) = confusion_counts(y_true, y_pred);
    if tp + fn_ == 0 {
        0.0
    } else {
        tp as f64 / (tp + fn_) as f64
    }
}

/// Harmonic mean of precision and recall; 0 when both are 0.
pub fn f1(y_true: &[i32], y_pred: &[i32]) -> f64 {
    let p = precision(y_true, y_pred);
    let r = recall(y_true, y_pred);
    if p + r == 0.0 {
        0.0
    } else {
        2.0 * p * r / (p + r)
    }
}

/// Area under the ROC curve, computed as the normalized rank sum of the
/// positive class with tie-averaged ranks.
pub fn roc_auc(y_true: &[i32], scores: &[f32]) -> Result<f64, EvalError> {
    assert_eq!(
        y_true.len(),
        scores.len(),
        "Labels and scores must have equal lengths"
    );
    let n_pos = y_true.iter().filter(|&&l| l == 1).count();
    let n_neg = y_true.len() - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return Err(EvalError::SingleClass);
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_unstable_by(|&a, &b| {
        scores[a].partial_cmp(&scores[b]).unwrap_or(Ordering::Equal)
    });

    // walk groups of tied scores; ranks are 1-based
    let mut rank_sum_pos = 0.0f64;
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && scores[order[j + 1]] == scores[order[i]] {
            j += 1;
        }
        let avg_rank = (i + j + 2) as f64 / 2.0;
        for &idx in &order[i..=j] {
            if y_true[idx] == 1 {
                rank_sum_pos += avg_rank;
            }
        }
        i = j + 1;
    }

    let n_pos = n_pos as f64;
    let n_neg = n_neg as f64;
    Ok((rank_sum_pos - n_pos * (n_pos + 1.0) / 2.0) / (n_pos * n_neg))
}

/// Area under the precision-recall curve (average precision): the step-wise
/// sum of precision weighted by recall increments over distinct score
/// thresholds, taken in decreasing score order.
pub fn average_precision(y_true: &[i32], scores: &[f32]) -> Result<f64, EvalError> {
    assert_eq!(
        y_true.len(),
        scores.len(),
        "Labels and scores must have equal lengths"
    );
    let n_pos = y_true.iter().filter(|&&l| l == 1).count();
    let n_neg = y_true.len() - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return Err(EvalError::SingleClass);
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_unstable_by(|&a, &b| {
        scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal)
    });

    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut prev_recall = 0.0f64;
    let mut ap = 0.0f64;
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && scores[order[j + 1]] == scores[order[i]] {
            j += 1;
        }
        for &idx in &order[i..=j] {
            if y_true[idx] == 1 {
                tp += 1;
            } else {
                fp += 1;
            }
        }
        let precision = tp as f64 / (tp + fp) as f64;
        let recall = tp as f64 / n_pos as f64;
        ap += (recall - prev_recall) * precision;
        prev_recall = recall;
        i = j + 1;
    }

    Ok(ap)
}
