// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for singleswap.
//!
//! Provides TOML configuration parsing with strict validation (`deny_unknown_fields`),
//! XDG file hierarchy lookup, environment variable overrides, and miette
//! diagnostics with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use singleswap_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! for (id, plugin) in &config.plugins {
//!     println!("{id}: enabled={}", plugin.is_enabled());
//! }
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{LogConfig, PluginDetails, PluginSetting, SingleswapConfig};

/// Load configuration from the XDG hierarchy and validate it.
///
/// On a Figment error, the TOML sources are read back so that unknown keys can
/// be rendered with a source span.
pub fn load_and_validate() -> Result<SingleswapConfig, Vec<ConfigError>> {
    tracing::debug!(paths = ?loader::config_paths(), "loading config hierarchy");
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let toml_sources = collect_toml_sources();
            Err(diagnostic::from_figment(err, &toml_sources))
        }
    }
}

/// Load configuration from an explicit file (plus env overrides) and validate it.
pub fn load_and_validate_path(path: &Path) -> Result<SingleswapConfig, Vec<ConfigError>> {
    tracing::debug!(path = %path.display(), "loading config file");
    match loader::load_config_from_path(path) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = std::fs::read_to_string(path)
                .map(|content| vec![(path.display().to_string(), content)])
                .unwrap_or_default();
            Err(diagnostic::from_figment(err, &sources))
        }
    }
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<SingleswapConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::from_figment(err, &sources))
        }
    }
}

/// Read every config file of the hierarchy that exists, for error span resolution.
fn collect_toml_sources() -> Vec<(String, String)> {
    loader::config_paths()
        .into_iter()
        .filter_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            let display = if path.is_relative() {
                std::env::current_dir()
                    .map(|d| d.join(&path).display().to_string())
                    .unwrap_or_else(|_| path.display().to_string())
            } else {
                path.display().to_string()
            };
            Some((display, content))
        })
        .collect()
}
