// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock hot-swap context for deterministic testing.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use singleswap_core::{
    ContextFactory, HotswapContext, Language, SourceFile, SwapError, SwapRequest,
};

/// A context whose applicability is decided by a list of accepted extensions.
///
/// Every call to `is_applicable` is counted so tests can assert that
/// resolution short-circuits or never consults a context at all.
pub struct MockContext {
    name: String,
    language: Language,
    accepts: Vec<String>,
    checks: AtomicUsize,
}

impl MockContext {
    /// Create a context named `name` that accepts files with any of `extensions`.
    pub fn new(name: &str, language: Language, extensions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            language,
            accepts: extensions.iter().map(|e| e.to_string()).collect(),
            checks: AtomicUsize::new(0),
        }
    }

    /// A context that accepts every file.
    pub fn accepting_all(name: &str, language: Language) -> Self {
        Self::new(name, language, &["*"])
    }

    /// A context that rejects every file.
    pub fn rejecting_all(name: &str, language: Language) -> Self {
        Self::new(name, language, &[])
    }

    /// Number of applicability checks made so far.
    pub fn check_count(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }
}

impl HotswapContext for MockContext {
    fn name(&self) -> &str {
        &self.name
    }

    fn language(&self) -> Language {
        self.language
    }

    fn is_applicable(&self, file: &SourceFile) -> bool {
        self.checks.fetch_add(1, Ordering::SeqCst);
        if self.accepts.iter().any(|e| e == "*") {
            return true;
        }
        let accepts: Vec<&str> = self.accepts.iter().map(String::as_str).collect();
        file.has_extension(&accepts)
    }

    fn prepare_swap(&self, file: &SourceFile) -> Result<SwapRequest, SwapError> {
        Ok(SwapRequest {
            language: self.language,
            class_name: file.stem().unwrap_or("Unknown").to_string(),
            source: file.path().to_path_buf(),
        })
    }
}

/// Factory that hands out clones of the same shared context.
///
/// Keeping the `Arc` in the test lets it inspect the call counter after the
/// registry has taken ownership of its copy.
pub fn context_factory(context: Arc<MockContext>) -> ContextFactory {
    Arc::new(move || -> Result<Arc<dyn HotswapContext>, SwapError> { Ok(context.clone()) })
}

/// Factory that always reports a construction error.
pub fn failing_factory(message: &str) -> ContextFactory {
    let message = message.to_string();
    Arc::new(move || -> Result<Arc<dyn HotswapContext>, SwapError> {
        Err(SwapError::Construction {
            implementation: "mock".to_string(),
            message: message.clone(),
        })
    })
}

/// Factory that panics when called.
pub fn panicking_factory(message: &'static str) -> ContextFactory {
    Arc::new(move || -> Result<Arc<dyn HotswapContext>, SwapError> { panic!("{message}") })
}
