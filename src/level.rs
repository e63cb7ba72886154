// SPDX-License-Identifier: MIT OR Apache-2.0

//! Severity thresholds and the methods that are gated against them.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A severity threshold.
///
/// Levels are ordered by position, `Trace` being the most verbose and `Silent`
/// suppressing everything. A handle at level `L` accepts a call of method `M`
/// when `M.level() >= L`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    /// Only valid as a threshold; there is no `silent` method.
    Silent,
}

/// The leveled method a call was made through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Method {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Silent,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Silent => "silent",
        }
    }

    pub(crate) const fn to_u8(self) -> u8 {
        self as u8
    }

    pub(crate) const fn from_u8(value: u8) -> Level {
        match value {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            _ => Level::Silent,
        }
    }
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::Trace,
        Method::Debug,
        Method::Info,
        Method::Warn,
        Method::Error,
    ];

    /// The severity a call through this method carries.
    pub const fn level(self) -> Level {
        match self {
            Method::Trace => Level::Trace,
            Method::Debug => Level::Debug,
            Method::Info => Level::Info,
            Method::Warn => Level::Warn,
            Method::Error => Level::Error,
        }
    }

    pub const fn as_str(self) -> &'static str {
        self.level().as_str()
    }

    pub const fn as_upper_str(self) -> &'static str {
        match self {
            Method::Trace => "TRACE",
            Method::Debug => "DEBUG",
            Method::Info => "INFO",
            Method::Warn => "WARN",
            Method::Error => "ERROR",
        }
    }

    /// Whether a call through this method passes a threshold of `level`.
    #[inline]
    pub fn passes(self, level: Level) -> bool {
        self.level() >= level
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for Level {
    fn from(method: Method) -> Self {
        method.level()
    }
}

/// Parses a level name, case-insensitively. `off` and `none` mean `silent`.
impl FromStr for Level {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "silent" | "off" | "none" => Ok(Level::Silent),
            _ => Err(crate::Error::InvalidLevel {
                value: s.to_string(),
            }),
        }
    }
}

/*
Boilerplate notes.

Level is Ord because thresholds are compared by position.
Default is deliberately absent: the default threshold belongs to the root rule, not the type.
Method has no FromStr; it is never parsed, only called.
*/
