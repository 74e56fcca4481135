//! Loading and saving firing parameters as JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use cannonlab_core::config::FiringConfig;

/// Read a config file. Fields missing from the file keep their defaults.
/// The result is not validated here; the session does that.
pub fn load_config(path: &Path) -> Result<FiringConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

pub fn save_config(path: &Path, config: &FiringConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
        .with_context(|| format!("failed to write config file {}", path.display()))?;
    Ok(())
}

/// Config from `path` when given, defaults otherwise.
pub fn load_or_default(path: Option<&Path>) -> Result<FiringConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(FiringConfig::default()),
    }
}
