//! # Configuration Loading
//!
//! Reads a [`ReducerConfig`] from a YAML file given with `--config`. Without
//! a file the defaults apply (recursive strategy, unbounded depth). Command
//! line flags are layered on top by [`apply_overrides`].

use std::path::Path;

use anyhow::{Context, Result};

use nestdot_reduce::{ReducerConfig, Strategy};

/// Load reducer settings from `path`, or the defaults when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<ReducerConfig> {
    let Some(path) = path else {
        return Ok(ReducerConfig::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: ReducerConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse config YAML: {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config file: {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        strategy = %config.strategy,
        max_depth = ?config.max_depth,
        "loaded reducer config"
    );
    Ok(config)
}

/// Layer command-line flags over a loaded configuration.
pub fn apply_overrides(
    mut config: ReducerConfig,
    strategy: Option<Strategy>,
    max_depth: Option<usize>,
) -> ReducerConfig {
    if let Some(strategy) = strategy {
        config.strategy = strategy;
    }
    if max_depth.is_some() {
        config.max_depth = max_depth;
    }
    config
}
