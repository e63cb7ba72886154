// SPDX-License-Identifier: MIT OR Apache-2.0

//! The record handed to transforms and writers.
//!
//! A [`LogContext`] is built once a call has passed its handle's level gate. It
//! carries the handle that made the call, so writers and transforms can read the
//! namespace and current level, together with the method, message and extra
//! arguments exactly as the caller passed them.
//!
//! ```
//! use scribe::{params, InMemoryWriter, Level, Scribe};
//! use std::sync::Arc;
//!
//! let scribe = Scribe::new();
//! let capture = Arc::new(InMemoryWriter::new());
//! scribe.set_writer(capture.clone());
//!
//! let log = scribe.get_log("auth:login").unwrap();
//! log.error("login failed", params!["alice", 3]);
//!
//! let records = capture.drain_records();
//! assert_eq!(records[0].namespace(), Some("auth:login"));
//! assert_eq!(records[0].to_string(), "login failed alice 3");
//! ```

use crate::level::Method;
use crate::log::Log;
use crate::parameter::LogParameter;
use std::fmt::{Debug, Display};
use std::sync::Arc;

#[derive(Clone)]
pub struct LogContext {
    pub log: Arc<Log>,
    pub method: Method,
    pub message: LogParameter,
    pub args: Vec<LogParameter>,
}

impl LogContext {
    pub fn new(log: Arc<Log>, method: Method, message: LogParameter, args: Vec<LogParameter>) -> Self {
        Self {
            log,
            method,
            message,
            args,
        }
    }

    /// The namespace of the originating handle, `None` for the root handle.
    pub fn namespace(&self) -> Option<&str> {
        self.log.namespace()
    }

    /// Returns a copy with the message replaced.
    pub fn with_message(self, message: impl Into<LogParameter>) -> Self {
        Self {
            message: message.into(),
            ..self
        }
    }
}

/// `message` followed by each argument, separated by single spaces.
impl Display for LogContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

impl Debug for LogContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogContext")
            .field("namespace", &self.namespace())
            .field("method", &self.method)
            .field("message", &self.message)
            .field("args", &self.args)
            .finish()
    }
}

/// Two contexts are equal when they come from the same handle instance and carry
/// the same method, message and arguments.
impl PartialEq for LogContext {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.log, &other.log)
            && self.method == other.method
            && self.message == other.message
            && self.args == other.args
    }
}

/*
Boilerplate notes for LogContext:

- Clone: derived; CompositeWriter hands each writer its own copy.
- PartialEq: handle identity rather than handle data, since handles are identity-cached.
- Eq/Hash: NOT implemented, LogParameter may hold floats.
- Default: NOT implemented, a context without a handle makes no sense.
*/
