// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in hot-swap contexts.
//!
//! Each language lives behind a cargo feature of the same name. A context that
//! is not compiled in simply has no factory: the registry variant that names
//! it fails construction softly and stays empty.

pub mod ids;
#[cfg(any(feature = "java", feature = "groovy", feature = "kotlin"))]
mod source;

#[cfg(feature = "groovy")]
pub mod groovy;
#[cfg(feature = "java")]
pub mod java;
#[cfg(feature = "kotlin")]
pub mod kotlin;

use singleswap_core::ContextFactory;

/// Factories for every context compiled into this build, keyed by implementation id.
pub fn builtin_factories() -> Vec<(&'static str, ContextFactory)> {
    Vec::from([
        #[cfg(feature = "java")]
        (ids::JAVA, std::sync::Arc::new(java::JavaContext::factory) as ContextFactory),
        #[cfg(feature = "groovy")]
        (ids::GROOVY, std::sync::Arc::new(groovy::GroovyContext::factory) as ContextFactory),
        #[cfg(feature = "kotlin")]
        (ids::KOTLIN, std::sync::Arc::new(kotlin::KotlinContext::factory) as ContextFactory),
    ])
}
