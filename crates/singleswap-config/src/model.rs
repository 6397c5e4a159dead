// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for singleswap.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Language plugins a stock host ships enabled.
pub const BUNDLED_PLUGINS: &[&str] = &["com.intellij.java", "org.intellij.groovy", "org.jetbrains.kotlin"];

/// Top-level singleswap configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SingleswapConfig {
    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,

    /// Host plugin states keyed by plugin id.
    ///
    /// Tables merge by key, so a file that only lists
    /// `"org.jetbrains.kotlin" = false` keeps the other bundled plugins.
    #[serde(default = "default_plugins")]
    pub plugins: BTreeMap<String, PluginSetting>,
}

impl Default for SingleswapConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            plugins: default_plugins(),
        }
    }
}

fn default_plugins() -> BTreeMap<String, PluginSetting> {
    BUNDLED_PLUGINS
        .iter()
        .map(|id| (id.to_string(), PluginSetting::Enabled(true)))
        .collect()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// State of one host plugin.
///
/// Either a bare flag (`"com.intellij.java" = true`) or a table with
/// descriptor details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PluginSetting {
    Enabled(bool),
    Detailed(PluginDetails),
}

impl PluginSetting {
    pub fn is_enabled(&self) -> bool {
        match self {
            PluginSetting::Enabled(enabled) => *enabled,
            PluginSetting::Detailed(details) => details.enabled,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            PluginSetting::Enabled(_) => None,
            PluginSetting::Detailed(details) => details.name.as_deref(),
        }
    }

    pub fn version(&self) -> Option<&str> {
        match self {
            PluginSetting::Enabled(_) => None,
            PluginSetting::Detailed(details) => details.version.as_deref(),
        }
    }
}

/// Descriptor details for a plugin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PluginDetails {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Display name shown in listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

fn default_enabled() -> bool {
    true
}
