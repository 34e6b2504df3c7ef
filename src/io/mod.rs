//! CSV loaders for feature matrices and label vectors.
//!
//! Both loaders expect headerless comma-separated files: one numeric row
//! per sample for features, one integer per line for labels.

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use ndarray::{Array1, Array2};

/// Read a headerless CSV of numeric features into an `Array2<f32>`.
pub fn read_features_csv(path: &str) -> Result<Array2<f32>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b',')
        .from_path(path)
        .with_context(|| format!("opening features file {}", path))?;

    let mut data: Vec<Vec<f32>> = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("reading features row {}", row))?;
        let values: Vec<f32> = record
            .iter()
            .map(|field| field.trim().parse::<f32>())
            .collect::<std::result::Result<_, _>>()
            .with_context(|| format!("parsing features row {}", row))?;
        data.push(values);
    }

    let n_samples = data.len();
    let n_features = data.first().context("features file is empty")?.len();

    Array2::from_shape_vec(
        (n_samples, n_features),
        data.into_iter().flatten().collect(),
    )
    .context("features file rows have inconsistent widths")
}

/// Read a single-column file of integer labels into an `Array1<i32>`.
pub fn read_labels_csv(path: &str) -> Result<Array1<i32>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b',')
        .from_path(path)
        .with_context(|| format!("opening labels file {}", path))?;

    let labels: Vec<i32> = reader
        .records()
        .enumerate()
        .map(|(row, result)| -> Result<i32> {
            let record = result.with_context(|| format!("reading labels row {}", row))?;
            let value = record
                .get(0)
                .with_context(|| format!("labels row {} is empty", row))?;
            value
                .trim()
                .parse::<i32>()
                .with_context(|| format!("parsing labels row {}", row))
        })
        .collect::<Result<_>>()?;

    Ok(Array1::from_vec(labels))
}
