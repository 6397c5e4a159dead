// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hot-swap context for Java sources.

use std::sync::Arc;

use singleswap_core::{HotswapContext, Language, SourceFile, SwapError, SwapRequest};

use crate::source;

const EXTENSIONS: &[&str] = &["java"];

/// Handles `.java` files. The reloaded class is the file's public top-level type.
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaContext;

impl JavaContext {
    pub fn new() -> Self {
        Self
    }

    /// Zero-argument construction rule registered in the context catalog.
    pub fn factory() -> Result<Arc<dyn HotswapContext>, SwapError> {
        Ok(Arc::new(Self::new()))
    }
}

impl HotswapContext for JavaContext {
    fn name(&self) -> &str {
        "java"
    }

    fn language(&self) -> Language {
        Language::Java
    }

    fn is_applicable(&self, file: &SourceFile) -> bool {
        file.has_extension(EXTENSIONS)
    }

    fn prepare_swap(&self, file: &SourceFile) -> Result<SwapRequest, SwapError> {
        source::swap_request(file, Language::Java, |stem, _| stem.to_string())
    }
}
