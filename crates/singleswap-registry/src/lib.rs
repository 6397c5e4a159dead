// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability-gated registry of hot-swap contexts.
//!
//! The registry holds a fixed, ordered table of variants. Each variant names a
//! context implementation and, optionally, the host plugin it depends on. When
//! the registry loads, every variant whose plugin is enabled instantiates its
//! context from the [`ContextCatalog`]; the rest stay empty. Resolving a file
//! then returns the first populated context that accepts it.

pub mod catalog;
pub mod diagnostics;
pub mod plugins;
pub mod registry;
pub mod variant;

pub use catalog::ContextCatalog;
pub use diagnostics::TracingSink;
pub use plugins::{PluginDescriptor, PluginEntry, PluginStatus, PluginTable};
pub use registry::{find_context, global, init_global, VariantRegistry};
pub use variant::{Variant, VariantSpec, VariantState, BUILTIN_VARIANTS};
