// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock capability probe.

use std::cell::RefCell;
use std::collections::HashSet;

use singleswap_core::CapabilityProbe;

/// Probe backed by a fixed set of enabled capability ids.
///
/// Records every query so tests can check which capabilities were consulted.
#[derive(Debug, Default)]
pub struct MockProbe {
    enabled: HashSet<String>,
    queried: RefCell<Vec<String>>,
}

impl MockProbe {
    /// A probe with no enabled capabilities.
    pub fn none() -> Self {
        Self::default()
    }

    /// A probe with exactly `ids` enabled.
    pub fn with_enabled(ids: &[&str]) -> Self {
        Self {
            enabled: ids.iter().map(|id| id.to_string()).collect(),
            queried: RefCell::new(Vec::new()),
        }
    }

    /// Capability ids queried so far, in call order.
    pub fn queried(&self) -> Vec<String> {
        self.queried.borrow().clone()
    }
}

impl CapabilityProbe for MockProbe {
    fn is_capability_enabled(&self, capability_id: &str) -> bool {
        self.queried.borrow_mut().push(capability_id.to_string());
        self.enabled.contains(capability_id)
    }
}
