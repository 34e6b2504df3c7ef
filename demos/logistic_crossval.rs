//! Cross-validate a linfa logistic regression on standardized synthetic
//! features. Requires `--features linfa`.

use anyhow::Result;

use crossval::config::{ModelConfig, ModelType};
use crossval::data_handling::synthetic_binary;
use crossval::evaluator::{evaluate, ModelInput};
use crossval::preprocessing::fit_transform;

fn main() -> Result<()> {
    env_logger::init();

    let (x, y) = synthetic_binary(400, 6, 11);
    let x = fit_transform(&x);

    let config = ModelConfig::new(
        0.1,
        ModelType::Logistic {
            max_iterations: 200,
            alpha: 0.01,
            with_intercept: true,
        },
    );
    let summary = evaluate("Logistic regression", ModelInput::Factory(config), &x, &y)?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
