// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide default facade.
//!
//! Libraries that don't want to thread a [`Scribe`] through their APIs log through
//! this one. It is created on first use and configured from the `SCRIBE_LOG`
//! environment variable (see [`config`](crate::config)). It is an ordinary
//! `Scribe`, so everything including [`Scribe::reset`] works on it.
//!
//! ```
//! use scribe::global;
//!
//! let log = global::get_log("app:startup").unwrap();
//! log.error("config file missing", scribe::params!["/etc/app.toml"]);
//! assert!(std::sync::Arc::ptr_eq(&log, &global::scribe().get_log("app:startup").unwrap()));
//! ```

use crate::config::DEFAULT_ENV_VAR;
use crate::error::Result;
use crate::level::Level;
use crate::log::Log;
use crate::scribe::Scribe;
use std::sync::{Arc, OnceLock};

static GLOBAL_SCRIBE: OnceLock<Scribe> = OnceLock::new();

/// The process-wide facade.
///
/// An invalid `SCRIBE_LOG` value is reported on stderr once and otherwise ignored,
/// leaving the default rules in place.
pub fn scribe() -> &'static Scribe {
    GLOBAL_SCRIBE.get_or_init(|| {
        let scribe = Scribe::new();
        if let Err(e) = scribe.apply_env_var(DEFAULT_ENV_VAR) {
            eprintln!("scribe: ignoring {DEFAULT_ENV_VAR}: {e}");
        }
        scribe
    })
}

/// Shorthand for `scribe().get_log(namespace)`.
pub fn get_log(namespace: &str) -> Result<Arc<Log>> {
    scribe().get_log(namespace)
}

/// Shorthand for `scribe().set_level(pattern, level)`.
pub fn set_level(pattern: &str, level: Level) -> Result<()> {
    scribe().set_level(pattern, level)
}

/// Shorthand for `scribe().log()`.
pub fn root() -> Arc<Log> {
    scribe().log()
}
