// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for singleswap.
//!
//! This crate provides the trait seams shared by the rest of the workspace:
//! the hot-swap context contract, the capability probe supplied by the host,
//! and the diagnostic sink that absorbs construction failures. It also holds
//! the workspace-wide error type and the opaque source file handle.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SwapError;
pub use types::{Language, SourceFile, SwapRequest};

pub use traits::{CapabilityProbe, ContextFactory, DiagnosticSink, HotswapContext};
