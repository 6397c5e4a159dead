// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host plugin table.
//!
//! `PluginTable` stores the host's plugin descriptors keyed by plugin id,
//! each with an enabled/disabled status. It is the stock
//! [`CapabilityProbe`]: a capability is enabled only when a plugin with that
//! id is registered and its status is `Enabled`.

use std::collections::{BTreeMap, HashMap};

use singleswap_config::PluginSetting;
use singleswap_core::{CapabilityProbe, SwapError};

/// Status of a plugin in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginStatus {
    /// Plugin is installed and active.
    Enabled,
    /// Plugin is installed but switched off.
    Disabled,
}

impl std::fmt::Display for PluginStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginStatus::Enabled => write!(f, "enabled"),
            PluginStatus::Disabled => write!(f, "disabled"),
        }
    }
}

/// Descriptor of an installed host plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginDescriptor {
    /// Unique plugin id (e.g. "org.jetbrains.kotlin").
    pub id: String,
    pub name: Option<String>,
    pub version: Option<String>,
}

impl PluginDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            version: None,
        }
    }
}

/// A single entry in the plugin table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginEntry {
    pub descriptor: PluginDescriptor,
    pub status: PluginStatus,
}

impl PluginEntry {
    pub fn is_enabled(&self) -> bool {
        self.status == PluginStatus::Enabled
    }
}

/// The host's installed plugins.
#[derive(Debug, Clone, Default)]
pub struct PluginTable {
    entries: HashMap<String, PluginEntry>,
}

impl PluginTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from the `[plugins]` config section.
    pub fn from_config(plugins: &BTreeMap<String, PluginSetting>) -> Self {
        let mut table = Self::new();
        for (id, setting) in plugins {
            let descriptor = PluginDescriptor {
                id: id.clone(),
                name: setting.name().map(str::to_string),
                version: setting.version().map(str::to_string),
            };
            let status = if setting.is_enabled() {
                PluginStatus::Enabled
            } else {
                PluginStatus::Disabled
            };
            table.register_with_status(descriptor, status);
        }
        table
    }

    /// Register a plugin with status `Enabled`.
    pub fn register(&mut self, descriptor: PluginDescriptor) {
        self.register_with_status(descriptor, PluginStatus::Enabled);
    }

    /// Register (or replace) a plugin with an explicit status.
    pub fn register_with_status(&mut self, descriptor: PluginDescriptor, status: PluginStatus) {
        self.entries
            .insert(descriptor.id.clone(), PluginEntry { descriptor, status });
    }

    /// Get a plugin entry by id, whatever its status.
    pub fn get(&self, id: &str) -> Option<&PluginEntry> {
        self.entries.get(id)
    }

    /// Get a plugin entry by id only if it is enabled.
    pub fn find_enabled(&self, id: &str) -> Option<&PluginEntry> {
        self.get(id).filter(|entry| entry.is_enabled())
    }

    /// Toggle a plugin's status.
    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> Result<(), SwapError> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| SwapError::Config(format!("unknown plugin `{id}`")))?;
        entry.status = if enabled {
            PluginStatus::Enabled
        } else {
            PluginStatus::Disabled
        };
        Ok(())
    }

    /// All entries, sorted by id.
    pub fn list_all(&self) -> Vec<&PluginEntry> {
        let mut entries: Vec<&PluginEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.descriptor.id.cmp(&b.descriptor.id));
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CapabilityProbe for PluginTable {
    fn is_capability_enabled(&self, capability_id: &str) -> bool {
        self.find_enabled(capability_id).is_some()
    }
}
