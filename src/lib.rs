//! crossval: cross-validated evaluation helpers for binary classifiers.
//!
//! This crate provides a stratified k-fold evaluator that fits a model on
//! every fold, scores both partitions with six standard classification
//! metrics (accuracy, precision, recall, F1, ROC-AUC, PR-AUC), averages the
//! per-fold results, prints a console report, and returns a structured
//! summary. Model wrappers (GBDT, optional linfa logistic regression) live
//! behind a small trait so the evaluator accepts either a pre-built instance
//! or a config-driven factory.
//!
//! The design favors small, testable modules with feature flags to avoid
//! pulling in the optional linfa learners unless explicitly enabled.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod evaluator;
pub mod io;
pub mod metrics;
pub mod models;
pub mod preprocessing;
pub mod report;
pub mod split;
