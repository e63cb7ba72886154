// SPDX-License-Identifier: MIT OR Apache-2.0

//! The dispatch path shared by every handle of a [`Scribe`](crate::Scribe).
//!
//! Handles keep an `Arc` to one [`Dispatch`] cell instead of a copy of the writer
//! and transform, so replacing either on the facade affects handles that were
//! issued earlier.
//!
//! The flow for an accepted call is:
//! 1. re-check the handle's current threshold
//! 2. run the active transform, waiting on a deferred result
//! 3. hand the resulting record to the active writer
//!
//! Writer and transform are cloned out of their cells before they run, so user
//! code never executes while a lock is held and may itself log or swap sinks.

use crate::console_writer::default_writer;
use crate::log_context::LogContext;
use crate::spinlock::RwSpinlock;
use crate::transform::Transform;
use crate::writer::Writer;
use std::sync::Arc;

pub(crate) struct Dispatch {
    writer: RwSpinlock<Arc<dyn Writer>>,
    transform: RwSpinlock<Option<Arc<dyn Transform>>>,
}

impl Dispatch {
    pub(crate) fn new() -> Self {
        Self {
            writer: RwSpinlock::new(default_writer()),
            transform: RwSpinlock::new(None),
        }
    }

    pub(crate) fn writer(&self) -> Arc<dyn Writer> {
        self.writer.read(|writer| writer.clone())
    }

    pub(crate) fn set_writer(&self, writer: Arc<dyn Writer>) {
        //the previous writer drops after the lock is released
        let _previous = self.writer.write(|slot| std::mem::replace(slot, writer));
    }

    pub(crate) fn transform(&self) -> Option<Arc<dyn Transform>> {
        self.transform.read(|transform| transform.clone())
    }

    pub(crate) fn set_transform(&self, transform: Option<Arc<dyn Transform>>) {
        let _previous = self.transform.write(|slot| std::mem::replace(slot, transform));
    }

    /// Restores the console writer and clears the transform.
    pub(crate) fn reset(&self) {
        self.set_writer(default_writer());
        self.set_transform(None);
    }

    pub(crate) fn dispatch(&self, context: LogContext) {
        if !context.method.passes(context.log.level()) {
            return;
        }
        let context = match self.transform() {
            Some(transform) => transform.transform(context).resolve(),
            None => context,
        };
        self.writer().write(context);
    }

    pub(crate) async fn dispatch_async(&self, context: LogContext) {
        if !context.method.passes(context.log.level()) {
            return;
        }
        let context = match self.transform() {
            Some(transform) => transform.transform(context).resolve_async().await,
            None => context,
        };
        self.writer().write(context);
    }
}

impl std::fmt::Debug for Dispatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatch")
            .field("has_transform", &self.transform().is_some())
            .finish_non_exhaustive()
    }
}
