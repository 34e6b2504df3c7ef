use std::error::Error;
use std::fmt;

/// Custom error type for cross-validation failures
#[derive(Debug)]
pub enum EvalError {
    /// Feature matrix rows and label entries disagree
    LengthMismatch { rows: usize, labels: usize },
    /// Fewer than two folds requested
    TooFewFolds(usize),
    /// A label other than 0 or 1 was found
    NonBinaryLabel(i32),
    /// The label vector holds a single class
    SingleClass,
    /// A class has fewer samples than the requested fold count
    ClassTooSmall {
        label: i32,
        count: usize,
        folds: usize,
    },
    /// The underlying learner failed to train
    Training(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::LengthMismatch { rows, labels } => write!(
                f,
                "Feature matrix has {} rows but label vector has {} entries",
                rows, labels
            ),
            EvalError::TooFewFolds(n) => {
                write!(f, "Cross-validation requires at least 2 folds, got {}", n)
            }
            EvalError::NonBinaryLabel(label) => {
                write!(f, "Labels must be 0 or 1, found {}", label)
            }
            EvalError::SingleClass => {
                write!(f, "Label vector holds a single class; two classes are required")
            }
            EvalError::ClassTooSmall {
                label,
                count,
                folds,
            } => write!(
                f,
                "Class {} has {} samples, fewer than the {} requested folds",
                label, count, folds
            ),
            EvalError::Training(msg) => write!(f, "Model training failed: {}", msg),
        }
    }
}

impl Error for EvalError {}
