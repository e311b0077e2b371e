//! Campaign dataset loading from CSV.

use std::path::Path;

use csv::ReaderBuilder;

use crate::domain::{AppError, CampaignRow, Dataset};

/// Load the campaign dataset from a CSV file.
///
/// A missing file is a distinguishable "not found" condition, not a crash.
/// Rows that fail to decode structurally are skipped; value-level noise is
/// handled later by the forgiving field parsers. The dataset is re-read on
/// every run and never cached.
pub fn load_dataset(path: &Path) -> Result<Dataset, AppError> {
    if !path.exists() {
        return Err(AppError::DatasetNotFound(path.display().to_string()));
    }

    let mut reader = ReaderBuilder::new().flexible(true).trim(csv::Trim::All).from_path(path)?;

    let columns: Vec<String> = reader.headers()?.iter().map(|header| header.to_string()).collect();

    let mut rows: Vec<CampaignRow> = Vec::new();
    for result in reader.deserialize::<CampaignRow>() {
        match result {
            Ok(row) => rows.push(row),
            Err(_) => continue,
        }
    }

    Ok(Dataset::new(columns, rows))
}
