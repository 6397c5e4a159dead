// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source inspection shared by the built-in contexts.

use std::sync::LazyLock;

use regex::Regex;
use singleswap_core::{Language, SourceFile, SwapError, SwapRequest};

/// First `package` declaration at the start of a line.
static PACKAGE_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*package\s+([A-Za-z_$][\w$]*(?:\s*\.\s*[A-Za-z_$][\w$]*)*)")
        .expect("package pattern is valid")
});

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][\w$]*$").expect("identifier pattern is valid"));

/// Opening delimiters of string and char literals, longest first.
const QUOTES: &[&str] = &["\"\"\"", "'''", "\"", "'"];

/// `text` with comments and string literals blanked out.
///
/// Every blanked character becomes a space except newlines, so line-anchored
/// patterns still see the same lines. Block comments do not nest.
pub(crate) fn code_only(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        let (len, blank) = if rest.starts_with("//") {
            (rest.find('\n').unwrap_or(rest.len()), true)
        } else if let Some(body) = rest.strip_prefix("/*") {
            (body.find("*/").map_or(rest.len(), |end| end + 4), true)
        } else if let Some(quote) = QUOTES.iter().find(|q| rest.starts_with(**q)) {
            (literal_len(rest, quote), true)
        } else {
            (c.len_utf8(), false)
        };

        let (head, tail) = rest.split_at(len);
        if blank {
            out.extend(head.chars().map(|ch| if ch == '\n' { '\n' } else { ' ' }));
        } else {
            out.push_str(head);
        }
        rest = tail;
    }
    out
}

/// Byte length of the literal opened by `quote` at the start of `rest`.
///
/// Single-quoted literals end at the line break when unterminated.
fn literal_len(rest: &str, quote: &str) -> usize {
    let body = &rest[quote.len()..];
    let single_line = quote.len() == 1;
    let mut chars = body.char_indices();
    while let Some((i, ch)) = chars.next() {
        if ch == '\\' {
            chars.next();
        } else if body[i..].starts_with(quote) {
            return quote.len() * 2 + i;
        } else if single_line && ch == '\n' {
            return quote.len() + i;
        }
    }
    rest.len()
}

/// Package declared by `text`, with any whitespace around the dots removed.
///
/// Comments and string literals are ignored.
pub(crate) fn package_of(text: &str) -> Option<String> {
    PACKAGE_DECL.captures(&code_only(text)).map(|caps| {
        caps[1]
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
    })
}

pub(crate) fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// Build a swap request for `file`.
///
/// `simple_name` maps the file stem and source text to the simple name of the
/// class that holds the file's top-level code.
pub(crate) fn swap_request(
    file: &SourceFile,
    language: Language,
    simple_name: impl FnOnce(&str, &str) -> String,
) -> Result<SwapRequest, SwapError> {
    let text = file.text().ok_or_else(|| SwapError::MissingSource {
        path: file.path().to_path_buf(),
    })?;

    let stem = file.stem().ok_or_else(|| SwapError::InvalidSource {
        path: file.path().to_path_buf(),
        reason: "file has no name".to_string(),
    })?;

    if !is_identifier(stem) {
        return Err(SwapError::InvalidSource {
            path: file.path().to_path_buf(),
            reason: format!("`{stem}` is not a valid class name"),
        });
    }

    let simple = simple_name(stem, text);
    let class_name = match package_of(text) {
        Some(package) => format!("{package}.{simple}"),
        None => simple,
    };

    tracing::debug!(%language, class = %class_name, "prepared swap request");

    Ok(SwapRequest {
        language,
        class_name,
        source: file.path().to_path_buf(),
    })
}
