use gbdt::config::Config;
use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;
use ndarray::{Array1, Array2};

use crate::config::{ModelConfig, ModelType};
use crate::error::EvalError;
use crate::models::classifier_trait::ClassifierModel;

/// Gradient Boosting Decision Tree (GBDT) classifier
pub struct GBDTClassifier {
    model: Option<GBDT>,
    params: ModelConfig,
}

impl GBDTClassifier {
    pub fn new(params: ModelConfig) -> Self {
        GBDTClassifier {
            model: None,
            params,
        }
    }
}

impl ClassifierModel for GBDTClassifier {
    fn fit(&mut self, x: &Array2<f32>, y: &Array1<i32>) -> Result<(), EvalError> {
        let feature_size = x.ncols();

        match &self.params.model_type {
            ModelType::GBDT {
                max_depth,
                num_boost_round,
                debug,
                training_optimization_level,
                loss_type,
            } => {
                let mut config = Config::new();

                config.set_feature_size(feature_size);
                config.set_shrinkage(self.params.learning_rate);
                config.set_max_depth(*max_depth);
                config.set_iterations(*num_boost_round as usize);
                config.set_debug(*debug);
                config.set_training_optimization_level(*training_optimization_level);
                config.set_loss(loss_type);

                let mut gbdt = GBDT::new(&config);

                let mut train_x = DataVec::new();
                for (row, &label) in y.iter().enumerate() {
                    let train_row = x.row(row).to_vec();
                    // the log-likelihood loss is defined over +/-1 labels
                    let signed = if label == 1 { 1.0 } else { -1.0 };
                    train_x.push(Data::new_training_data(train_row, 1.0, signed, None));
                }

                gbdt.fit(&mut train_x);
                self.model = Some(gbdt);
                Ok(())
            }
            #[cfg(feature = "linfa")]
            _ => Err(EvalError::Training(format!(
                "Expected ModelType::GBDT params, got {:?}",
                self.params.model_type
            ))),
        }
    }

    fn predict_proba(&self, x: &Array2<f32>) -> Vec<f32> {
        let model = self
            .model
            .as_ref()
            .expect("GBDTClassifier::predict_proba called before fit");
        let mut test_x = DataVec::new();
        for row in 0..x.nrows() {
            let test_row = x.row(row).to_vec();
            test_x.push(Data::new_training_data(test_row, 1.0, 0.0, None));
        }
        // predictions under the log-likelihood loss are already probabilities
        model.predict(&test_x)
    }

    fn name(&self) -> &str {
        "gbdt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gbdt_classifier() {
        // Feature matrix with 5 features and 10 samples; the second feature
        // tracks the label exactly
        let x = Array2::from_shape_vec(
            (10, 5),
            vec![
                0.1, 1.0, 5.0, 0.2, -0.3, 0.4, -1.0, 5.0, 0.8, 0.1, 0.6, 1.0, 5.0, 1.2, 0.2, 0.9,
                -1.0, 5.0, 1.8, -0.1, 1.2, 1.0, 5.0, 2.4, 0.3, 1.5, -1.0, 5.0, 3.0, 0.0, 1.8, 1.0,
                5.0, 3.6, -0.2, 2.1, -1.0, 5.0, 4.2, 0.4, 2.4, 1.0, 5.0, 4.8, -0.1, 2.7, -1.0, 5.0,
                5.4, 0.2,
            ],
        )
        .unwrap();

        let y = Array1::from_vec(vec![1i32, 0, 1, 0, 1, 0, 1, 0, 1, 0]);

        let params = ModelConfig {
            learning_rate: 0.1,
            model_type: ModelType::GBDT {
                max_depth: 3,
                num_boost_round: 10,
                debug: false,
                training_optimization_level: 2,
                loss_type: "LogLikelyhood".to_string(),
            },
        };

        let mut classifier = GBDTClassifier::new(params);
        classifier.fit(&x, &y).expect("fit failed");

        let probs = classifier.predict_proba(&x);
        assert_eq!(probs.len(), y.len());
        for p in &probs {
            assert!((0.0..=1.0).contains(p), "probability out of range: {}", p);
        }

        // the separating feature should be learned on the training data
        let labels = classifier.predict(&x);
        let hits = labels
            .iter()
            .zip(y.iter())
            .filter(|(a, b)| *a == *b)
            .count();
        assert!(hits >= 8, "expected at least 8/10 correct, got {}", hits);
    }
}
