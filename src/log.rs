// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-namespace handle callers log through.

use crate::dispatch::Dispatch;
use crate::level::{Level, Method};
use crate::log_context::LogContext;
use crate::parameter::LogParameter;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// The future returned by the `*_async` leveled methods.
pub type LogFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/**
A logger bound to one namespace.

Handles are created and cached by [`Scribe`](crate::Scribe); asking for the same
namespace twice returns the same `Arc<Log>`. The level is owned by the facade's
rule list and changes under the handle when rules change.

A leveled method dispatches only when its severity is at least the handle's
level. A suppressed call has no side effects.

```
use scribe::{params, Level, Scribe};

let scribe = Scribe::new();
scribe.set_level("billing:*", Level::Warn).unwrap();
let log = scribe.get_log("billing:invoice/send").unwrap();
assert_eq!(log.level(), Level::Warn);

log.info("suppressed", vec![]);
log.warn("retrying", params![3, "attempts"]);
```
*/
pub struct Log {
    namespace: Option<String>,
    level: AtomicU8,
    dispatch: Arc<Dispatch>,
}

impl Log {
    pub(crate) fn new(namespace: Option<String>, level: Level, dispatch: Arc<Dispatch>) -> Arc<Self> {
        Arc::new(Self {
            namespace,
            level: AtomicU8::new(level.to_u8()),
            dispatch,
        })
    }

    /// The namespace, or `None` for the root handle.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.namespace.is_none()
    }

    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Acquire))
    }

    pub(crate) fn set_level(&self, level: Level) {
        self.level.store(level.to_u8(), Ordering::Release);
    }

    /// Whether a call through `method` would currently be dispatched.
    #[inline]
    pub fn is_enabled(&self, method: Method) -> bool {
        method.passes(self.level())
    }

    /// Logs through `method`, if the handle's level lets it through.
    pub fn log(self: &Arc<Self>, method: Method, message: impl Into<LogParameter>, args: Vec<LogParameter>) {
        if !self.is_enabled(method) {
            return;
        }
        let context = LogContext::new(self.clone(), method, message.into(), args);
        self.dispatch.dispatch(context);
    }

    /**
    Logs through `method`, awaiting a deferred transform instead of blocking on it.

    The level gate is evaluated when this is called; a suppressed call returns a
    future that completes immediately.
    */
    pub fn log_async(
        self: &Arc<Self>,
        method: Method,
        message: impl Into<LogParameter>,
        args: Vec<LogParameter>,
    ) -> LogFuture {
        if !self.is_enabled(method) {
            return Box::pin(std::future::ready(()));
        }
        let context = LogContext::new(self.clone(), method, message.into(), args);
        let dispatch = self.dispatch.clone();
        Box::pin(async move { dispatch.dispatch_async(context).await })
    }

    pub fn trace(self: &Arc<Self>, message: impl Into<LogParameter>, args: Vec<LogParameter>) {
        self.log(Method::Trace, message, args)
    }

    pub fn debug(self: &Arc<Self>, message: impl Into<LogParameter>, args: Vec<LogParameter>) {
        self.log(Method::Debug, message, args)
    }

    pub fn info(self: &Arc<Self>, message: impl Into<LogParameter>, args: Vec<LogParameter>) {
        self.log(Method::Info, message, args)
    }

    pub fn warn(self: &Arc<Self>, message: impl Into<LogParameter>, args: Vec<LogParameter>) {
        self.log(Method::Warn, message, args)
    }

    pub fn error(self: &Arc<Self>, message: impl Into<LogParameter>, args: Vec<LogParameter>) {
        self.log(Method::Error, message, args)
    }

    pub fn trace_async(self: &Arc<Self>, message: impl Into<LogParameter>, args: Vec<LogParameter>) -> LogFuture {
        self.log_async(Method::Trace, message, args)
    }

    pub fn debug_async(self: &Arc<Self>, message: impl Into<LogParameter>, args: Vec<LogParameter>) -> LogFuture {
        self.log_async(Method::Debug, message, args)
    }

    pub fn info_async(self: &Arc<Self>, message: impl Into<LogParameter>, args: Vec<LogParameter>) -> LogFuture {
        self.log_async(Method::Info, message, args)
    }

    pub fn warn_async(self: &Arc<Self>, message: impl Into<LogParameter>, args: Vec<LogParameter>) -> LogFuture {
        self.log_async(Method::Warn, message, args)
    }

    pub fn error_async(self: &Arc<Self>, message: impl Into<LogParameter>, args: Vec<LogParameter>) -> LogFuture {
        self.log_async(Method::Error, message, args)
    }
}

impl std::fmt::Debug for Log {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Log")
            .field("namespace", &self.namespace)
            .field("level", &self.level())
            .finish()
    }
}

/*
Boilerplate notes.

Clone is deliberately absent: a handle's identity is its Arc, and a cloned Log would
stop receiving level updates.
PartialEq/Hash would have to pick between identity and data equality; callers use Arc::ptr_eq.
*/
