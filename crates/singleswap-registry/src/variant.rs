// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Variant descriptors and their one-shot construction.

use std::sync::Arc;

use singleswap_core::{CapabilityProbe, DiagnosticSink, HotswapContext};
use singleswap_lang::ids;

use crate::catalog::ContextCatalog;

/// Static description of one registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSpec {
    pub name: &'static str,
    /// Implementation id looked up in the [`ContextCatalog`]. `None` marks the sentinel.
    pub implementation: Option<&'static str>,
    /// Host plugin that must be enabled for this variant to be constructed.
    pub required_capability: Option<&'static str>,
}

impl VariantSpec {
    pub const fn new(
        name: &'static str,
        implementation: &'static str,
        required_capability: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            implementation: Some(implementation),
            required_capability,
        }
    }

    /// The "no match" variant: no implementation, no requirement.
    pub const fn sentinel(name: &'static str) -> Self {
        Self {
            name,
            implementation: None,
            required_capability: None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.implementation.is_none()
    }
}

/// Built-in variants in resolution order.
pub const BUILTIN_VARIANTS: &[VariantSpec] = &[
    VariantSpec::sentinel("none"),
    VariantSpec::new("java", ids::JAVA, Some("com.intellij.java")),
    VariantSpec::new("groovy", ids::GROOVY, Some("org.intellij.groovy")),
    VariantSpec::new("kotlin", ids::KOTLIN, Some("org.jetbrains.kotlin")),
];

/// Outcome of constructing a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantState {
    /// The sentinel never has a context.
    Sentinel,
    Ready,
    /// The required plugin was absent or disabled at load time.
    CapabilityMissing { capability: &'static str },
    /// Construction was attempted and failed.
    ConstructionFailed { reason: String },
}

impl std::fmt::Display for VariantState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariantState::Sentinel => write!(f, "sentinel"),
            VariantState::Ready => write!(f, "ready"),
            VariantState::CapabilityMissing { capability } => {
                write!(f, "capability-missing {capability}")
            }
            VariantState::ConstructionFailed { reason } => {
                write!(f, "construction-failed {reason}")
            }
        }
    }
}

/// A loaded registry entry. The context is set once, here, and never changes.
pub struct Variant {
    spec: VariantSpec,
    state: VariantState,
    context: Option<Arc<dyn HotswapContext>>,
}

impl Variant {
    /// Run the construction protocol for `spec`.
    ///
    /// Never fails: every way of not getting a context leaves the variant empty.
    pub(crate) fn load<P, S>(
        spec: VariantSpec,
        catalog: &ContextCatalog,
        probe: &P,
        sink: &S,
    ) -> Self
    where
        P: CapabilityProbe + ?Sized,
        S: DiagnosticSink + ?Sized,
    {
        let Some(implementation) = spec.implementation else {
            return Self::empty(spec, VariantState::Sentinel);
        };

        if let Some(capability) = spec.required_capability {
            if !probe.is_capability_enabled(capability) {
                tracing::debug!(
                    variant = spec.name,
                    capability,
                    "required plugin not enabled, skipping variant"
                );
                return Self::empty(spec, VariantState::CapabilityMissing { capability });
            }
        }

        match catalog.instantiate(implementation) {
            Ok(context) => {
                tracing::debug!(variant = spec.name, implementation, "hot-swap context loaded");
                Self {
                    spec,
                    state: VariantState::Ready,
                    context: Some(context),
                }
            }
            Err(err) => {
                sink.construction_failed(spec.name, &err);
                Self::empty(
                    spec,
                    VariantState::ConstructionFailed {
                        reason: err.to_string(),
                    },
                )
            }
        }
    }

    fn empty(spec: VariantSpec, state: VariantState) -> Self {
        Self {
            spec,
            state,
            context: None,
        }
    }

    pub fn spec(&self) -> &VariantSpec {
        &self.spec
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn state(&self) -> &VariantState {
        &self.state
    }

    /// The constructed context, shared with the registry.
    pub fn context(&self) -> Option<Arc<dyn HotswapContext>> {
        self.context.clone()
    }

    pub(crate) fn context_ref(&self) -> Option<&dyn HotswapContext> {
        self.context.as_deref()
    }
}

impl std::fmt::Debug for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Variant")
            .field("spec", &self.spec)
            .field("state", &self.state)
            .field("context", &self.context.as_ref().map(|c| c.name().to_string()))
            .finish()
    }
}
