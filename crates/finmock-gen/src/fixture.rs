//! Fixture serialization and the generate-or-skip entry point.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use finmock_types::MockDataset;
use tracing::info;

use crate::config::GeneratorConfig;
use crate::generator::MockGenerator;

/// Outcome of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// A fresh fixture was written.
    Written,
    /// The fixture already existed; generation was skipped entirely.
    SkippedExisting,
}

/// Serialize a dataset as pretty-printed JSON, creating parent
/// directories as needed.
pub fn write_fixture(dataset: &MockDataset, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create fixture directory: {}", parent.display())
            })?;
        }
    }
    let json =
        serde_json::to_string_pretty(dataset).context("Failed to serialize dataset to JSON")?;
    fs::write(path, json).with_context(|| format!("Failed to write fixture: {}", path.display()))?;
    Ok(())
}

/// Generate the dataset and write it to `path`, skipping entirely when
/// the fixture already exists.
pub fn generate_to_path(config: &GeneratorConfig, path: &Path) -> Result<GenerateOutcome> {
    if path.exists() {
        info!(
            "Fixture already exists at {}, skipping generation (delete it to regenerate)",
            path.display()
        );
        return Ok(GenerateOutcome::SkippedExisting);
    }

    let mut generator = MockGenerator::from_config(config);
    let dataset = generator.build_dataset(config);
    write_fixture(&dataset, path)?;
    info!(
        "Wrote fixture to {}: {} customers, {} ledger lines, {} rows total",
        path.display(),
        dataset.business_central.global_customers.len(),
        dataset.ledger.lines.len(),
        dataset.row_count()
    );
    Ok(GenerateOutcome::Written)
}
