// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the variant registry and its collaborators.

pub mod context;
pub mod diagnostic;
pub mod probe;

pub use context::{ContextFactory, HotswapContext};
pub use diagnostic::DiagnosticSink;
pub use probe::CapabilityProbe;
