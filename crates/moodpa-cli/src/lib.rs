//! # moodpa-cli: CLI Tool for MOOD.PA
//!
//! Provides the `moodpa` command-line interface over the compliance
//! evaluator.
//!
//! ## Subcommands
//!
//! - `moodpa evaluate`: Evaluate a project submission file.
//! - `moodpa thresholds`: Print the effective zoning thresholds.
//! - `moodpa stats`: Portfolio statistics over exported project records.
//!
//! ```bash
//! moodpa evaluate project.yaml
//! moodpa evaluate project.yaml --profile belem.yaml --json
//! moodpa thresholds --profile belem.yaml
//! moodpa stats projects.json
//! ```

pub mod evaluate;
pub mod stats;
pub mod thresholds;

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use moodpa_core::{MunicipalProfile, ZoningThresholds};

/// Exit code when the evaluated project is `Total`.
pub const EXIT_TOTAL: u8 = 0;
/// Exit code for any error.
pub const EXIT_ERROR: u8 = 1;
/// Exit code when the evaluated project is `Partial`.
pub const EXIT_PARTIAL: u8 = 2;

/// Read a YAML or JSON document into `T`.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_yaml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Load the municipal profile at `path`, or the default profile when absent.
pub fn load_profile(path: Option<&Path>) -> Result<MunicipalProfile> {
    match path {
        Some(path) => MunicipalProfile::load(path)
            .with_context(|| format!("invalid municipal profile {}", path.display())),
        None => Ok(MunicipalProfile::new("default")),
    }
}

/// Thresholds from the profile at `path`, or the defaults.
pub fn load_thresholds(path: Option<&Path>) -> Result<ZoningThresholds> {
    Ok(load_profile(path)?.thresholds)
}
