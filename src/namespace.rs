// SPDX-License-Identifier: MIT OR Apache-2.0

//! Namespace and pattern grammar.
//!
//! A namespace names a log source and has the shape `module`, `module:feature`,
//! `module:feature/method`, `module:feature/method/variant` and so on. Each
//! segment is one or more word characters (ASCII letters, digits, `_` and `-`).
//!
//! A pattern is any non-empty string over word characters, `:`, `/` and `*`.
//! `*` matches any run of characters, separators included, and the pattern is
//! anchored at both ends of the namespace.
//!
//! ```
//! use scribe::namespace::NamespacePattern;
//!
//! let pattern = NamespacePattern::compile("moduleA:*").unwrap();
//! assert!(pattern.matches("moduleA:featureA/methodB"));
//! assert!(!pattern.matches("moduleB:x"));
//! ```

use crate::error::{Error, Result};
use std::fmt::{Display, Formatter};

/// The catch-all pattern.
pub const ROOT_PATTERN: &str = "*";

const NAMESPACE_HELP: &str =
    "expected `module`, `module:feature` or `module:feature/method`, with segments of [A-Za-z0-9_-]";

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn is_segment(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_word_char)
}

/// Checks `namespace` against the segment grammar.
pub fn validate_namespace(namespace: &str) -> Result<()> {
    if namespace.is_empty() {
        return Err(Error::InvalidNamespace {
            parameter: "namespace",
            reason: "a namespace must be provided when acquiring logs".to_string(),
        });
    }
    let well_formed = match namespace.split_once(':') {
        None => is_segment(namespace),
        Some((module, rest)) => is_segment(module) && rest.split('/').all(is_segment),
    };
    if well_formed {
        Ok(())
    } else {
        Err(Error::InvalidNamespace {
            parameter: "namespace",
            reason: format!("invalid namespace \"{namespace}\" ({NAMESPACE_HELP})"),
        })
    }
}

/// Checks that `pattern` is non-empty and uses only pattern characters.
///
/// Patterns need not be well-formed namespaces: `*`, `*:*/methodA` and
/// `moduleA:featureB/methodA*` are all accepted.
pub fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Err(Error::InvalidPattern {
            parameter: "pattern",
            reason: "a namespace pattern must be provided".to_string(),
        });
    }
    if let Some(bad) = pattern
        .chars()
        .find(|&c| !(is_word_char(c) || c == ':' || c == '/' || c == '*'))
    {
        return Err(Error::InvalidPattern {
            parameter: "pattern",
            reason: format!(
                "invalid namespace pattern \"{pattern}\" (unexpected character {bad:?})"
            ),
        });
    }
    Ok(())
}

/// A compiled glob pattern.
///
/// The source is split on `*` once at compile time; matching walks the literal
/// pieces left to right, so no regular expression engine is involved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespacePattern {
    source: String,
    /// Literal text between wildcards. A pattern without `*` has exactly one piece.
    pieces: Vec<String>,
}

impl NamespacePattern {
    /// Validates and compiles `pattern`.
    pub fn compile(pattern: &str) -> Result<Self> {
        validate_pattern(pattern)?;
        Ok(Self {
            source: pattern.to_string(),
            pieces: pattern.split('*').map(str::to_string).collect(),
        })
    }

    pub(crate) fn root() -> Self {
        Self {
            source: ROOT_PATTERN.to_string(),
            pieces: vec![String::new(), String::new()],
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_root(&self) -> bool {
        self.source == ROOT_PATTERN
    }

    /// Whether the whole of `text` matches this pattern.
    pub fn matches(&self, text: &str) -> bool {
        let (first, rest) = match self.pieces.split_first() {
            Some(split) => split,
            None => return false,
        };
        let Some((last, middle)) = rest.split_last() else {
            return text == first;
        };
        if text.len() < first.len() + last.len()
            || !text.starts_with(first.as_str())
            || !text.ends_with(last.as_str())
        {
            return false;
        }
        let mut remaining = &text[first.len()..text.len() - last.len()];
        for piece in middle {
            if piece.is_empty() {
                continue;
            }
            match remaining.find(piece.as_str()) {
                Some(at) => remaining = &remaining[at + piece.len()..],
                None => return false,
            }
        }
        true
    }
}

impl Display for NamespacePattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}
