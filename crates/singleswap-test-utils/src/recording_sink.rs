// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostic sink that records failures instead of logging them.

use std::sync::Mutex;

use singleswap_core::{DiagnosticSink, SwapError};

/// One captured construction failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFailure {
    pub variant: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    failures: Mutex<Vec<RecordedFailure>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All failures reported so far.
    pub fn failures(&self) -> Vec<RecordedFailure> {
        self.failures
            .lock()
            .map(|f| f.clone())
            .unwrap_or_default()
    }

    /// Names of the variants that failed, in report order.
    pub fn failed_variants(&self) -> Vec<String> {
        self.failures().into_iter().map(|f| f.variant).collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn construction_failed(&self, variant: &str, error: &SwapError) {
        tracing::debug!(variant, error = %error, "recorded construction failure");
        if let Ok(mut failures) = self.failures.lock() {
            failures.push(RecordedFailure {
                variant: variant.to_string(),
                message: error.to_string(),
            });
        }
    }
}
