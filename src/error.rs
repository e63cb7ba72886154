// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors surfaced synchronously by the registration APIs.

/// Argument validation failures.
///
/// Every variant is raised before any state changes, so a failed `get_log` caches
/// nothing and a failed `set_level` leaves the rule list untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidNamespace {
        parameter: &'static str,
        reason: String,
    },

    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidPattern {
        parameter: &'static str,
        reason: String,
    },

    #[error("unknown log level \"{value}\"")]
    InvalidLevel { value: String },

    #[error("invalid directive \"{directive}\": {reason}")]
    InvalidDirective { directive: String, reason: String },

    #[error("value of {component} should be between {min} and {max}, got {value}")]
    ColorOutOfRange {
        component: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl Error {
    /// The name of the offending parameter, for the argument-validation variants.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Error::InvalidNamespace { parameter, .. } | Error::InvalidPattern { parameter, .. } => {
                Some(parameter)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
