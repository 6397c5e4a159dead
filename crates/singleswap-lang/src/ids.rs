// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Implementation ids of the built-in contexts.
//!
//! Always compiled, even when the matching language feature is off, so the
//! variant table can name an implementation without linking it.

pub const JAVA: &str = "singleswap_lang::java::JavaContext";
pub const GROOVY: &str = "singleswap_lang::groovy::GroovyContext";
pub const KOTLIN: &str = "singleswap_lang::kotlin::KotlinContext";
