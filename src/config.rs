// SPDX-License-Identifier: MIT OR Apache-2.0

//! Level rules from text.
//!
//! A directive string is a comma-separated list of `pattern=level` entries. A bare
//! `level` stands for `*=level`. Entries apply left to right, so a later entry
//! outranks an earlier one that matches the same namespace. Level names are
//! case-insensitive and `off`/`none` mean `silent`.
//!
//! - `SCRIBE_LOG=debug` lowers every namespace to `debug`
//! - `SCRIBE_LOG=warn,db:*=trace` warns everywhere but traces the `db` module
//! - `SCRIBE_LOG=*:*/flush=off` silences every `flush` method
//!
//! ```
//! use scribe::{Level, Scribe};
//!
//! let scribe = Scribe::new();
//! scribe.apply_directives("warn, db:*=trace, db:pool/*=off").unwrap();
//! assert_eq!(scribe.resolve_level("http:server"), Level::Warn);
//! assert_eq!(scribe.resolve_level("db:query"), Level::Trace);
//! assert_eq!(scribe.resolve_level("db:pool/acquire"), Level::Silent);
//! ```

use crate::error::{Error, Result};
use crate::level::Level;
use crate::namespace::{ROOT_PATTERN, validate_pattern};
use crate::scribe::Scribe;

/// The environment variable [`Scribe::from_env`] reads.
pub const DEFAULT_ENV_VAR: &str = "SCRIBE_LOG";

/// One parsed `pattern=level` entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Directive {
    pub pattern: String,
    pub level: Level,
}

/// Parses and validates a whole directive string.
///
/// Empty entries are skipped, so `""` and `"warn,"` are accepted.
pub fn parse_directives(spec: &str) -> Result<Vec<Directive>> {
    spec.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_directive)
        .collect()
}

fn parse_directive(entry: &str) -> Result<Directive> {
    let invalid = |reason: String| Error::InvalidDirective {
        directive: entry.to_string(),
        reason,
    };
    let (pattern, level) = match entry.split_once('=') {
        Some((pattern, level)) => (pattern.trim(), level.trim()),
        None => (ROOT_PATTERN, entry),
    };
    validate_pattern(pattern).map_err(|e| invalid(e.to_string()))?;
    let level = level.parse::<Level>().map_err(|e| {
        if entry.contains('=') {
            invalid(e.to_string())
        } else {
            invalid("expected `level` or `pattern=level`".to_string())
        }
    })?;
    Ok(Directive {
        pattern: pattern.to_string(),
        level,
    })
}

impl Scribe {
    /**
    Applies a directive string.

    The string is parsed completely before any rule changes; a malformed entry
    leaves the rules untouched.
    */
    pub fn apply_directives(&self, spec: &str) -> Result<()> {
        let directives = parse_directives(spec)?;
        self.set_levels(
            directives
                .iter()
                .map(|directive| (directive.pattern.as_str(), directive.level)),
        )
    }

    /**
    Applies the directives in environment variable `name`.

    Returns `Ok(false)` when the variable is not set.
    */
    pub fn apply_env_var(&self, name: &str) -> Result<bool> {
        match std::env::var(name) {
            Ok(spec) => self.apply_directives(&spec).map(|()| true),
            Err(std::env::VarError::NotPresent) => Ok(false),
            Err(std::env::VarError::NotUnicode(_)) => Err(Error::InvalidDirective {
                directive: name.to_string(),
                reason: "environment variable is not valid unicode".to_string(),
            }),
        }
    }

    /// A fresh facade configured from [`DEFAULT_ENV_VAR`].
    pub fn from_env() -> Result<Self> {
        let scribe = Self::new();
        scribe.apply_env_var(DEFAULT_ENV_VAR)?;
        Ok(scribe)
    }
}
