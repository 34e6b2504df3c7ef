use crossval::config::{ModelConfig, ModelType};
use crossval::models::classifier_trait::ClassifierModel;
use crossval::models::factory;
use ndarray::{Array1, Array2};

#[test]
fn test_factory_builds_and_predicts() {
    // tiny dataset
    let x = Array2::from_shape_vec(
        (6, 2),
        vec![
            1.0, 0.0, // class 1
            0.0, 1.0, // class 0
            1.0, 0.1, // class 1
            0.0, 0.9, // class 0
            1.1, 0.0, // class 1
            0.0, 1.2, // class 0
        ],
    )
    .expect("failed to create feature matrix");

    let y = Array1::from_vec(vec![1i32, 0, 1, 0, 1, 0]);

    let params = ModelConfig {
        learning_rate: 0.1,
        model_type: ModelType::GBDT {
            max_depth: 3,
            num_boost_round: 3,
            debug: false,
            training_optimization_level: 2,
            loss_type: "LogLikelyhood".to_string(),
        },
    };

    let mut model = factory::build_model(params);
    model.fit(&x, &y).expect("fit failed");

    let probs = model.predict_proba(&x);
    assert_eq!(probs.len(), x.nrows());
    for p in &probs {
        assert!((0.0..=1.0).contains(p), "probability out of range: {}", p);
    }

    let labels = model.predict(&x);
    assert!(labels.iter().all(|&l| l == 0 || l == 1));
}
