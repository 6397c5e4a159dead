// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default diagnostic sink.

use singleswap_core::{DiagnosticSink, SwapError};

/// Reports construction failures as `warn` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn construction_failed(&self, variant: &str, error: &SwapError) {
        tracing::warn!(variant, error = %error, "hot-swap context unavailable");
    }
}
