//! Cross-validate a GBDT classifier on a synthetic dataset and dump the
//! summary as JSON. Run with `RUST_LOG=debug` to see per-fold progress.

use anyhow::Result;

use crossval::config::ModelConfig;
use crossval::data_handling::synthetic_binary;
use crossval::evaluator::{evaluate, ModelInput};

fn main() -> Result<()> {
    env_logger::init();

    let (x, y) = synthetic_binary(400, 6, 7);
    let summary = evaluate("GBDT (default)", ModelInput::Factory(ModelConfig::default()), &x, &y)?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
