// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by contexts, the registry and the host.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::SwapError;

/// JVM language handled by a hot-swap context.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Java,
    Groovy,
    Kotlin,
}

/// Opaque handle to the source file currently being edited.
///
/// Carries the path and, when the host has it, the in-memory document text.
/// Contexts decide applicability from the path alone; the text is only needed
/// when preparing a swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    text: Option<String>,
}

impl SourceFile {
    /// Create a handle without document text.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            text: None,
        }
    }

    /// Create a handle with the given document text.
    pub fn with_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: Some(text.into()),
        }
    }

    /// Read the file from disk.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, SwapError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path).map_err(|source| SwapError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            path,
            text: Some(text),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// File extension without the leading dot.
    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|e| e.to_str())
    }

    /// File name without its extension.
    pub fn stem(&self) -> Option<&str> {
        self.path.file_stem().and_then(|s| s.to_str())
    }

    /// Returns true if the extension matches any of `extensions`, ignoring ASCII case.
    pub fn has_extension(&self, extensions: &[&str]) -> bool {
        self.extension()
            .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

/// What the host has to reload after a context accepted a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRequest {
    /// Language of the edited source.
    pub language: Language,
    /// Binary name of the class to redefine (e.g. `com.example.Foo`).
    pub class_name: String,
    /// Source file the request was derived from.
    pub source: PathBuf,
}
