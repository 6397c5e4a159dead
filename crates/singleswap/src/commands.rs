// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command implementations. Each returns the text to print.

use std::fmt::Write as _;
use std::path::Path;

use singleswap_config::SingleswapConfig;
use singleswap_core::{SourceFile, SwapError};
use singleswap_registry::{PluginDescriptor, PluginStatus, PluginTable, VariantRegistry};

/// Build the host plugin table from config, then apply command-line overrides.
///
/// Overrides for plugins missing from the config register them.
pub fn plugin_table(config: &SingleswapConfig, enable: &[String], disable: &[String]) -> PluginTable {
    let mut table = PluginTable::from_config(&config.plugins);
    let overrides = enable
        .iter()
        .map(|id| (id, PluginStatus::Enabled))
        .chain(disable.iter().map(|id| (id, PluginStatus::Disabled)));

    for (id, status) in overrides {
        if table
            .set_enabled(id, status == PluginStatus::Enabled)
            .is_err()
        {
            table.register_with_status(PluginDescriptor::new(id.as_str()), status);
        }
        tracing::debug!(plugin = %id, %status, "plugin override applied");
    }
    table
}

/// One line per variant: name and load state.
pub fn variants(registry: &VariantRegistry) -> String {
    let mut out = String::new();
    for variant in registry.variants() {
        let _ = writeln!(out, "{:<8} {}", variant.name(), variant.state());
    }
    out.trim_end().to_string()
}

/// Resolve `path` and describe the class the chosen context would reload.
///
/// A file no context accepts is not an error.
pub fn resolve(registry: &VariantRegistry, path: &Path) -> Result<String, SwapError> {
    let file = SourceFile::load(path)?;
    let Some(context) = registry.resolve(Some(&file)) else {
        return Ok(format!(
            "no hot-swap context available for {}",
            path.display()
        ));
    };

    let request = context.prepare_swap(&file)?;
    Ok(format!(
        "context: {} ({})\nclass:   {}",
        context.name(),
        request.language,
        request.class_name
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use singleswap_registry::TracingSink;

    fn registry(enable: &[&str], disable: &[&str]) -> VariantRegistry {
        let enable: Vec<String> = enable.iter().map(|s| s.to_string()).collect();
        let disable: Vec<String> = disable.iter().map(|s| s.to_string()).collect();
        let table = plugin_table(&SingleswapConfig::default(), &enable, &disable);
        VariantRegistry::builtin(&table, &TracingSink)
    }

    #[test]
    fn overrides_toggle_configured_plugins() {
        let table = plugin_table(
            &SingleswapConfig::default(),
            &[],
            &["org.jetbrains.kotlin".to_string()],
        );
        assert!(table.find_enabled("com.intellij.java").is_some());
        assert!(table.find_enabled("org.jetbrains.kotlin").is_none());
        assert!(table.get("org.jetbrains.kotlin").is_some());
    }

    #[test]
    fn overrides_register_unknown_plugins() {
        let table = plugin_table(
            &SingleswapConfig::default(),
            &["com.example.scala".to_string()],
            &[],
        );
        assert!(table.find_enabled("com.example.scala").is_some());
    }

    #[test]
    fn disable_wins_over_enable_for_the_same_plugin() {
        let table = plugin_table(
            &SingleswapConfig::default(),
            &["org.intellij.groovy".to_string()],
            &["org.intellij.groovy".to_string()],
        );
        assert!(table.find_enabled("org.intellij.groovy").is_none());
    }

    #[test]
    fn variants_lists_states_in_order() {
        let out = variants(&registry(&[], &["org.intellij.groovy"]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("none"));
        assert!(lines[0].ends_with("sentinel"));
        assert!(lines[1].ends_with("ready"));
        assert!(lines[2].ends_with("capability-missing org.intellij.groovy"));
        assert!(lines[3].ends_with("ready"));
    }

    #[test]
    fn resolve_describes_swap_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Greeter.kt");
        std::fs::write(&path, "package demo.app\n\nfun greet() = \"hi\"\n").unwrap();

        let out = resolve(&registry(&[], &[]), &path).unwrap();
        assert_eq!(out, "context: kotlin (kotlin)\nclass:   demo.app.GreeterKt");
    }

    #[test]
    fn resolve_without_context_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Main.java");
        std::fs::write(&path, "class Main {}\n").unwrap();

        let out = resolve(&registry(&[], &["com.intellij.java"]), &path).unwrap();
        assert!(out.starts_with("no hot-swap context available for"));
    }

    #[test]
    fn resolve_reports_unreadable_file() {
        let err = resolve(&registry(&[], &[]), Path::new("/nonexistent/Main.java")).unwrap_err();
        assert!(matches!(err, SwapError::Io { .. }));
    }
}
