// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hot-swap context for Kotlin sources.
//!
//! A Kotlin file that declares a type named after the file reloads that type.
//! Any other file only contributes top-level declarations, which the compiler
//! places in the `<Stem>Kt` file facade class.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use singleswap_core::{HotswapContext, Language, SourceFile, SwapError, SwapRequest};

use crate::source;

const EXTENSIONS: &[&str] = &["kt"];

const FACADE_SUFFIX: &str = "Kt";

#[derive(Debug, Default, Clone, Copy)]
pub struct KotlinContext;

impl KotlinContext {
    pub fn new() -> Self {
        Self
    }

    pub fn factory() -> Result<Arc<dyn HotswapContext>, SwapError> {
        Ok(Arc::new(Self::new()))
    }
}

/// A top-level or nested `class`, `object` or `interface` declaration,
/// possibly preceded by annotations and modifiers. Captures the type name.
static TYPE_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?:@[\w.]+(?:\([^)\n]*\))?\s+)*(?:(?:public|internal|private|protected|data|sealed|enum|annotation|abstract|open|final|inner|value|inline|fun|expect|actual)\s+)*(?:class|object|interface)\s+([A-Za-z_][\w]*)",
    )
    .expect("type declaration pattern is valid")
});

/// Returns true if `text` declares a class, object or interface called `name`.
///
/// Mentions inside comments and string literals do not count.
fn declares_type(text: &str, name: &str) -> bool {
    TYPE_DECL
        .captures_iter(&source::code_only(text))
        .any(|caps| &caps[1] == name)
}

impl HotswapContext for KotlinContext {
    fn name(&self) -> &str {
        "kotlin"
    }

    fn language(&self) -> Language {
        Language::Kotlin
    }

    fn is_applicable(&self, file: &SourceFile) -> bool {
        file.has_extension(EXTENSIONS)
    }

    fn prepare_swap(&self, file: &SourceFile) -> Result<SwapRequest, SwapError> {
        source::swap_request(file, Language::Kotlin, |stem, text| {
            if declares_type(text, stem) {
                stem.to_string()
            } else {
                format!("{stem}{FACADE_SUFFIX}")
            }
        })
    }
}
