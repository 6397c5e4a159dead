// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Hierarchy: `./singleswap.toml` > `~/.config/singleswap/singleswap.toml` >
//! `/etc/singleswap/singleswap.toml`, with `SINGLESWAP_` environment overrides.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::SingleswapConfig;

const FILE_NAME: &str = "singleswap.toml";

/// Config files in merge order, lowest precedence first.
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/singleswap").join(FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("singleswap").join(FILE_NAME));
    }
    paths.push(PathBuf::from(FILE_NAME));
    paths
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/singleswap/singleswap.toml`
/// 3. `~/.config/singleswap/singleswap.toml`
/// 4. `./singleswap.toml`
/// 5. `SINGLESWAP_*` environment variables
pub fn load_config() -> Result<SingleswapConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<SingleswapConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SingleswapConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SingleswapConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SingleswapConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The Figment behind [`load_config`], before extraction.
pub fn build_figment() -> Figment {
    config_paths().into_iter().fold(
        Figment::new().merge(Serialized::defaults(SingleswapConfig::default())),
        |figment, path| figment.merge(Toml::file(path)),
    )
    .merge(env_provider())
}

/// Environment provider mapping `SINGLESWAP_<SECTION>_<KEY>` to `section.key`.
///
/// Uses `map()` rather than `split("_")` so that keys containing underscores
/// keep them.
fn env_provider() -> Env {
    Env::prefixed("SINGLESWAP_").map(|key| key.as_str().replacen("log_", "log.", 1).into())
}
