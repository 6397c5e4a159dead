// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::{PluginSetting, SingleswapConfig};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &SingleswapConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.log.level.trim();
    if !LOG_LEVELS.iter().any(|l| l.eq_ignore_ascii_case(level)) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{level}` is not one of: {}",
                LOG_LEVELS.join(", ")
            ),
        });
    }

    for (id, setting) in &config.plugins {
        if id.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "plugin ids must not be empty".to_string(),
            });
        } else if id.chars().any(char::is_whitespace) {
            errors.push(ConfigError::Validation {
                message: format!("plugin id `{id}` must not contain whitespace"),
            });
        }

        if let PluginSetting::Detailed(details) = setting {
            if details.version.as_deref().is_some_and(|v| v.trim().is_empty()) {
                errors.push(ConfigError::Validation {
                    message: format!("plugins.{id}.version must not be empty when set"),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PluginDetails;

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&SingleswapConfig::default()).is_ok());
    }

    #[test]
    fn unknown_log_level_fails_validation() {
        let mut config = SingleswapConfig::default();
        config.log.level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("log.level"))));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = SingleswapConfig::default();
        config.log.level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn collects_all_plugin_errors() {
        let mut config = SingleswapConfig::default();
        config.plugins.insert(String::new(), PluginSetting::Enabled(true));
        config.plugins.insert("bad id".to_string(), PluginSetting::Enabled(true));
        config.plugins.insert(
            "org.example".to_string(),
            PluginSetting::Detailed(PluginDetails {
                enabled: true,
                name: None,
                version: Some(" ".to_string()),
            }),
        );

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
