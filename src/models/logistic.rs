use linfa::traits::Fit;
use linfa::Dataset;
use linfa_logistic::{FittedLogisticRegression, LogisticRegression};
use ndarray::{Array1, Array2};

use crate::config::{ModelConfig, ModelType};
use crate::error::EvalError;
use crate::models::classifier_trait::ClassifierModel;

/// Logistic regression classifier backed by linfa
pub struct LogisticClassifier {
    model: Option<FittedLogisticRegression<f64, bool>>,
    params: ModelConfig,
}

impl LogisticClassifier {
    pub fn new(params: ModelConfig) -> Self {
        LogisticClassifier {
            model: None,
            params,
        }
    }
}

impl ClassifierModel for LogisticClassifier {
    fn fit(&mut self, x: &Array2<f32>, y: &Array1<i32>) -> Result<(), EvalError> {
        let ModelType::Logistic {
            max_iterations,
            alpha,
            with_intercept,
        } = &self.params.model_type
        else {
            return Err(EvalError::Training(format!(
                "Expected ModelType::Logistic params, got {:?}",
                self.params.model_type
            )));
        };

        // `true` is the positive class; probabilities come back for it
        let targets = Array1::from_vec(y.iter().map(|&l| l == 1).collect::<Vec<bool>>());
        let x_f64 = x.mapv(f64::from);
        let dataset = Dataset::new(x_f64, targets);

        let fitted = LogisticRegression::default()
            .max_iterations(*max_iterations)
            .alpha(*alpha)
            .with_intercept(*with_intercept)
            .fit(&dataset)
            .map_err(|e| EvalError::Training(e.to_string()))?;

        self.model = Some(fitted);
        Ok(())
    }

    fn predict_proba(&self, x: &Array2<f32>) -> Vec<f32> {
        let model = self
            .model
            .as_ref()
            .expect("LogisticClassifier::predict_proba called before fit");
        let x_f64 = x.mapv(f64::from);
        model
            .predict_probabilities(&x_f64)
            .iter()
            .map(|&p| p as f32)
            .collect()
    }

    fn name(&self) -> &str {
        "logistic"
    }
}
