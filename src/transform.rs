// SPDX-License-Identifier: MIT OR Apache-2.0

//! The optional record-rewriting step between gating and writing.
//!
//! A transform receives the accepted [`LogContext`] and returns either a
//! rewritten context right away or a deferred one. Only one transform is active
//! on a [`Scribe`](crate::Scribe) at a time; to chain several, compose them into
//! one transform and install that.
//!
//! ```
//! use scribe::{InMemoryWriter, LogContext, Scribe};
//! use std::sync::Arc;
//!
//! let scribe = Scribe::new();
//! let capture = Arc::new(InMemoryWriter::new());
//! scribe.set_writer(capture.clone());
//! scribe.set_transform(Some(Arc::new(|context: LogContext| {
//!     let shouted = context.message.to_string().to_uppercase();
//!     context.with_message(shouted)
//! })));
//!
//! scribe.log().error("quiet", vec![]);
//! assert_eq!(capture.drain_logs(), "QUIET");
//! ```

use crate::log_context::LogContext;
use std::future::Future;
use std::pin::Pin;

/// A context that will be available later.
pub type DeferredContext = Pin<Box<dyn Future<Output = LogContext> + Send + 'static>>;

/// The outcome of a transform.
pub enum Transformed {
    Ready(LogContext),
    /// Dispatch waits for this future before invoking the writer.
    Deferred(DeferredContext),
}

impl Transformed {
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = LogContext> + Send + 'static,
    {
        Transformed::Deferred(Box::pin(future))
    }

    /**
    Resolves the outcome on the current thread, blocking on a deferred context.

    # Panics

    On wasm32 when the outcome is deferred. The browser main thread cannot block,
    so deferred transforms need the `*_async` leveled methods there.
    */
    pub(crate) fn resolve(self) -> LogContext {
        match self {
            Transformed::Ready(context) => context,
            Transformed::Deferred(future) => block_on_deferred(future),
        }
    }

    pub(crate) async fn resolve_async(self) -> LogContext {
        match self {
            Transformed::Ready(context) => context,
            Transformed::Deferred(future) => future.await,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn block_on_deferred(future: DeferredContext) -> LogContext {
    futures_executor::block_on(future)
}

#[cfg(target_arch = "wasm32")]
fn block_on_deferred(_future: DeferredContext) -> LogContext {
    panic!("deferred transforms cannot complete inside a synchronous log call on wasm32; use the *_async methods")
}

impl From<LogContext> for Transformed {
    fn from(context: LogContext) -> Self {
        Transformed::Ready(context)
    }
}

impl std::fmt::Debug for Transformed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transformed::Ready(context) => f.debug_tuple("Ready").field(context).finish(),
            Transformed::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/**
Rewrites a record before it reaches the writer.

Any `Fn(LogContext) -> LogContext + Send + Sync` closure is a synchronous transform.
Implement the trait directly to return [`Transformed::Deferred`].
*/
pub trait Transform: Send + Sync {
    fn transform(&self, context: LogContext) -> Transformed;
}

impl<F> Transform for F
where
    F: Fn(LogContext) -> LogContext + Send + Sync,
{
    fn transform(&self, context: LogContext) -> Transformed {
        Transformed::Ready(self(context))
    }
}

/// Passes every record through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IdentityTransform;

impl Transform for IdentityTransform {
    fn transform(&self, context: LogContext) -> Transformed {
        Transformed::Ready(context)
    }
}
