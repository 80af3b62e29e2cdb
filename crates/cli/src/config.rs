//! Configuration loading for the CLI.
//!
//! Parsing and validation live in [`pipeline::WorkflowConfig`]; this module
//! only reads the file and applies command-line overrides.

use std::path::Path;

use anyhow::{Context, Result};
use pipeline::{ApprovalThreshold, WorkflowConfig};
use tracing::{debug, info};

/// Loads the workflow configuration.
///
/// Without a path the built-in defaults are used. `threshold`, when given,
/// replaces whatever threshold the file set.
pub fn load(path: Option<&Path>, threshold: Option<u32>) -> Result<WorkflowConfig> {
    let mut config = match path {
        Some(path) => {
            let document = std::fs::read_to_string(path)
                .with_context(|| format!("reading configuration from {}", path.display()))?;
            let config = WorkflowConfig::from_json_str(&document)
                .with_context(|| format!("invalid configuration in {}", path.display()))?;
            info!(path = %path.display(), "configuration loaded");
            config
        }
        None => WorkflowConfig::default(),
    };

    if let Some(limit) = threshold {
        config = config.with_threshold(ApprovalThreshold::new(limit));
    }

    debug!(
        approval_threshold = config.approval_threshold.as_u32(),
        suppliers = config.suppliers.len(),
        "workflow configuration ready"
    );
    Ok(config)
}
