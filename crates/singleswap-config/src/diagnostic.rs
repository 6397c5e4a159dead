// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Config diagnostics: figment errors turned into miette reports.

#![allow(unused_assignments)] // false positives from the Diagnostic derive

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Jaro-Winkler score a valid key needs before it is offered as a correction.
const MIN_SIMILARITY: f64 = 0.75;

/// Something wrong with `singleswap.toml` or the `SINGLESWAP_*` environment.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("`{key}` is not a singleswap setting")]
    #[diagnostic(
        code(singleswap::config::unknown_key),
        help("{}", unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        key: String,
        /// Closest valid key, if any is similar enough.
        suggestion: Option<String>,
        valid_keys: String,
        #[label("unrecognized")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    #[error("`{key}` has the wrong type ({detail})")]
    #[diagnostic(code(singleswap::config::invalid_type), help("use a {expected}"))]
    InvalidType {
        key: String,
        detail: String,
        expected: String,
    },

    #[error("`{key}` must be set")]
    #[diagnostic(code(singleswap::config::missing_key))]
    MissingKey { key: String },

    /// Parsed fine but the value is not acceptable.
    #[error("invalid setting: {message}")]
    #[diagnostic(code(singleswap::config::validation))]
    Validation { message: String },

    #[error("{0}")]
    #[diagnostic(code(singleswap::config::other))]
    Other(String),
}

fn unknown_key_help(suggestion: Option<&str>, valid_keys: &str) -> String {
    let known = format!("known keys here: {valid_keys}");
    match suggestion {
        Some(key) => format!("did you mean `{key}`? {known}"),
        None => known,
    }
}

/// Split a `figment::Error` chain into one diagnostic per problem.
///
/// `sources` pairs each TOML file name with its content; it is only used to
/// point unknown keys at their location.
pub fn from_figment(err: figment::Error, sources: &[(String, String)]) -> Vec<ConfigError> {
    use figment::error::Kind;

    err.into_iter()
        .map(|error| match &error.kind {
            Kind::UnknownField(field, expected) => {
                let (span, src) = locate_key(&error, field, sources);
                ConfigError::UnknownKey {
                    key: field.clone(),
                    suggestion: closest_key(field, expected),
                    valid_keys: expected.join(", "),
                    span,
                    src,
                }
            }
            Kind::MissingField(field) => ConfigError::MissingKey {
                key: dotted(&error.path, field),
            },
            Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
                key: error.path.join("."),
                detail: format!("got {actual}"),
                expected: expected.clone(),
            },
            _ => ConfigError::Other(error.to_string()),
        })
        .collect()
}

fn dotted(path: &[String], field: &str) -> String {
    path.iter()
        .map(String::as_str)
        .chain(std::iter::once(field))
        .collect::<Vec<_>>()
        .join(".")
}

/// Span of `field` in the source file the error came from.
fn locate_key(
    error: &figment::Error,
    field: &str,
    sources: &[(String, String)],
) -> (Option<SourceSpan>, Option<NamedSource<String>>) {
    let origin = error
        .metadata
        .as_ref()
        .and_then(|metadata| metadata.source.as_ref())
        .and_then(|source| source.file_path())
        .map(|path| path.display().to_string());

    // Inline sources carry no file metadata; fall back to the only source given.
    let source = match origin {
        Some(path) => sources.iter().find(|(name, _)| *name == path),
        None => None,
    }
    .or(match sources {
        [only] => Some(only),
        _ => None,
    });

    let Some((name, content)) = source else {
        return (None, None);
    };
    let Some(offset) = key_offset(content, &error.path, field) else {
        return (None, None);
    };

    (
        Some(SourceSpan::new(offset.into(), field.len())),
        Some(NamedSource::new(name, content.clone())),
    )
}

/// Byte offset of the `field = ...` line inside the table named by `path`.
///
/// Only the first path segment is matched against a `[table]` header. The
/// search stops at the next header.
pub fn key_offset(content: &str, path: &[String], field: &str) -> Option<usize> {
    let body_start = match path.first() {
        Some(table) => {
            let header = format!("[{table}]");
            content.find(&header)? + header.len()
        }
        None => 0,
    };

    let mut offset = body_start;
    for line in content[body_start..].split_inclusive('\n') {
        let key_start = line.len() - line.trim_start().len();
        let rest = &line[key_start..];
        if rest.starts_with('[') && !path.is_empty() {
            return None;
        }
        let assigns_field = rest
            .strip_prefix(field)
            .is_some_and(|after| after.trim_start().starts_with('='));
        if assigns_field {
            return Some(offset + key_start);
        }
        offset += line.len();
    }
    None
}

/// Valid key most similar to `unknown`, if it clears [`MIN_SIMILARITY`].
pub fn closest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    valid_keys
        .iter()
        .map(|key| (strsim::jaro_winkler(unknown, key), *key))
        .filter(|(score, _)| *score > MIN_SIMILARITY)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, key)| key.to_string())
}

/// Print every diagnostic to stderr through miette's report hook.
pub fn render_errors(errors: Vec<ConfigError>) {
    for error in errors {
        eprintln!("{:?}", miette::Report::new(error));
    }
}
