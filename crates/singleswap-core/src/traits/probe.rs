// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability probe supplied by the host environment.

use std::collections::{HashMap, HashSet};

/// Answers whether an optional capability (usually a language plugin) is enabled.
///
/// "Enabled" means the capability exists and carries an explicit enabled flag.
/// Unknown ids must be reported as disabled, never as an error.
pub trait CapabilityProbe {
    fn is_capability_enabled(&self, capability_id: &str) -> bool;
}

impl<P: CapabilityProbe + ?Sized> CapabilityProbe for &P {
    fn is_capability_enabled(&self, capability_id: &str) -> bool {
        (**self).is_capability_enabled(capability_id)
    }
}

/// A set of ids lists exactly the enabled capabilities.
impl CapabilityProbe for HashSet<String> {
    fn is_capability_enabled(&self, capability_id: &str) -> bool {
        self.contains(capability_id)
    }
}

/// A map carries an explicit flag per known capability.
impl CapabilityProbe for HashMap<String, bool> {
    fn is_capability_enabled(&self, capability_id: &str) -> bool {
        self.get(capability_id).copied().unwrap_or(false)
    }
}
