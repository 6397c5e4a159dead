// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hot-swap context for Groovy sources and scripts.

use std::sync::Arc;

use singleswap_core::{HotswapContext, Language, SourceFile, SwapError, SwapRequest};

use crate::source;

const EXTENSIONS: &[&str] = &["groovy", "gvy", "gy", "gsh"];

/// Handles Groovy classes and scripts. Scripts compile to a class named after the file.
#[derive(Debug, Default, Clone, Copy)]
pub struct GroovyContext;

impl GroovyContext {
    pub fn new() -> Self {
        Self
    }

    pub fn factory() -> Result<Arc<dyn HotswapContext>, SwapError> {
        Ok(Arc::new(Self::new()))
    }
}

impl HotswapContext for GroovyContext {
    fn name(&self) -> &str {
        "groovy"
    }

    fn language(&self) -> Language {
        Language::Groovy
    }

    fn is_applicable(&self, file: &SourceFile) -> bool {
        file.has_extension(EXTENSIONS)
    }

    fn prepare_swap(&self, file: &SourceFile) -> Result<SwapRequest, SwapError> {
        source::swap_request(file, Language::Groovy, |stem, _| stem.to_string())
    }
}
