// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Side channel for non-fatal construction failures.

use crate::error::SwapError;

/// Receives failures that the registry swallows while loading variants.
pub trait DiagnosticSink {
    /// A variant's context could not be constructed; the variant stays empty.
    fn construction_failed(&self, variant: &str, error: &SwapError);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn construction_failed(&self, variant: &str, error: &SwapError) {
        (**self).construction_failed(variant, error)
    }
}
