//! Subcommand implementations.

use anyhow::Result;
use std::path::Path;
use thiserror::Error;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

/// Add command handler.
pub mod add;

/// Update command handler.
pub mod update;

/// A config file that could not be loaded, or values that could not be resolved.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ConfigError(#[from] pub anyhow::Error);

/// Loads the config file and merges the CLI overrides into it.
///
/// An explicit `--config` path must exist; the default location may be absent.
pub fn load_config(config_path: Option<&Path>, options: &ResolveOptions) -> Result<ResolvedConfig> {
    let resolve = || -> Result<ResolvedConfig> {
        let config_file = match config_path {
            Some(path) => ConfigManager::with_path(path).load()?,
            None => ConfigManager::new()?.load_or_default()?,
        };
        resolve_config(options, &config_file)
    };
    resolve().map_err(|e| ConfigError(e).into())
}
