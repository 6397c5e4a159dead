// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for singleswap.

use std::path::PathBuf;

use thiserror::Error;

/// The primary error type returned by context factories and swap preparation.
///
/// Construction failures never escape the variant registry: they are handed to
/// a [`DiagnosticSink`](crate::DiagnosticSink) and the variant stays empty.
#[derive(Debug, Error)]
pub enum SwapError {
    /// No factory is registered under the requested implementation id.
    #[error("context implementation not found: {implementation}")]
    ImplementationNotFound { implementation: String },

    /// The factory ran but reported a failure.
    #[error("failed to construct {implementation}: {message}")]
    Construction {
        implementation: String,
        message: String,
    },

    /// The factory panicked while constructing the context.
    #[error("construction of {implementation} panicked: {message}")]
    ConstructionPanicked {
        implementation: String,
        message: String,
    },

    /// The source file has no text loaded.
    #[error("no source text available for {}", path.display())]
    MissingSource { path: PathBuf },

    /// The source file cannot be mapped to a reloadable class.
    #[error("cannot hot-swap {}: {reason}", path.display())]
    InvalidSource { path: PathBuf, reason: String },

    /// Reading a source file from disk failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration errors surfaced outside the config crate's diagnostics.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
