use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Central configuration for models in the crate.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ModelConfig {
    pub learning_rate: f32,

    #[serde(flatten)]
    pub model_type: ModelType,
}

/// Supported model types and their hyper-parameters.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum ModelType {
    GBDT {
        max_depth: u32,
        num_boost_round: u32,
        debug: bool,
        training_optimization_level: u8,
        loss_type: String,
    },
    #[cfg(feature = "linfa")]
    Logistic {
        max_iterations: u64,
        alpha: f64,
        with_intercept: bool,
    },
}

impl Default for ModelType {
    fn default() -> Self {
        ModelType::GBDT {
            max_depth: 6,
            num_boost_round: 50,
            debug: false,
            training_optimization_level: 2,
            loss_type: "LogLikelyhood".to_string(),
        }
    }
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gbdt" => Ok(ModelType::default()),
            #[cfg(feature = "linfa")]
            "logistic" => Ok(ModelType::Logistic {
                max_iterations: 100,
                alpha: 0.01,
                with_intercept: true,
            }),
            _ => Err(format!(
                "Unknown model type: {}. To use logistic regression, please compile with `--features linfa`",
                s
            )),
        }
    }
}

impl ModelConfig {
    pub fn new(learning_rate: f32, model_type: ModelType) -> Self {
        Self {
            learning_rate,
            model_type,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            model_type: ModelType::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_type_from_str_gbdt() {
        let parsed = ModelType::from_str("GBDT").expect("gbdt should parse");
        assert!(matches!(parsed, ModelType::GBDT { max_depth: 6, .. }));
    }

    #[test]
    fn model_type_from_str_unknown() {
        let err = ModelType::from_str("perceptron").unwrap_err();
        assert!(err.contains("Unknown model type: perceptron"));
    }

    #[test]
    fn default_config_is_gbdt() {
        let config = ModelConfig::default();
        assert_eq!(config.learning_rate, 0.1);
        assert!(matches!(config.model_type, ModelType::GBDT { .. }));
    }
}
