// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The hot-swap context contract.

use std::sync::Arc;

use crate::error::SwapError;
use crate::types::{Language, SourceFile, SwapRequest};

/// A language-specific hot-swap strategy.
///
/// Contexts are constructed once by the variant registry and then shared
/// read-only across every resolution, so implementations must be `Send + Sync`
/// and must not rely on interior mutability for their answers.
pub trait HotswapContext: Send + Sync + 'static {
    /// Short identifier of this context (e.g. "java").
    fn name(&self) -> &str;

    /// The language this context handles.
    fn language(&self) -> Language;

    /// Returns true if this context can hot-swap `file`.
    ///
    /// Must be a pure predicate: it is called during resolution for every
    /// populated variant until one accepts.
    fn is_applicable(&self, file: &SourceFile) -> bool;

    /// Work out which class the host has to reload for `file`.
    fn prepare_swap(&self, file: &SourceFile) -> Result<SwapRequest, SwapError>;
}

impl std::fmt::Debug for dyn HotswapContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HotswapContext")
            .field("name", &self.name())
            .field("language", &self.language())
            .finish()
    }
}

/// Zero-argument construction rule for a context implementation.
pub type ContextFactory =
    Arc<dyn Fn() -> Result<Arc<dyn HotswapContext>, SwapError> + Send + Sync>;
