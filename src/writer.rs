// SPDX-License-Identifier: MIT OR Apache-2.0

//! The terminal sink for accepted log calls.

use crate::log_context::LogContext;
use std::fmt::Debug;
use std::sync::Arc;

/**
Renders a finalized record.

A writer is invoked exactly once per accepted log call, after the active transform.
Panics raised by a writer propagate to the caller of the leveled method.

Any `Fn(LogContext) + Send + Sync` closure is a writer.
*/
pub trait Writer: Send + Sync {
    fn write(&self, context: LogContext);
}

impl<F> Writer for F
where
    F: Fn(LogContext) + Send + Sync,
{
    fn write(&self, context: LogContext) {
        self(context)
    }
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NullWriter;

impl Writer for NullWriter {
    fn write(&self, _context: LogContext) {}
}

/**
Broadcasts each record to several writers, in the order they were added.

```
use scribe::{CompositeWriter, InMemoryWriter, Scribe, Writer};
use std::sync::Arc;

let a = Arc::new(InMemoryWriter::new());
let b = Arc::new(InMemoryWriter::new());
let writers: Vec<Arc<dyn Writer>> = vec![
    a.clone() as Arc<dyn Writer>,
    b.clone() as Arc<dyn Writer>,
];
let scribe = Scribe::new();
scribe.set_writer(Arc::new(CompositeWriter::new(writers)));

scribe.log().error("disk full", vec![]);
assert_eq!(a.drain_logs(), "disk full");
assert_eq!(b.drain_logs(), "disk full");
```
*/
#[derive(Clone, Default)]
pub struct CompositeWriter {
    writers: Vec<Arc<dyn Writer>>,
}

impl CompositeWriter {
    pub fn new(writers: Vec<Arc<dyn Writer>>) -> Self {
        Self { writers }
    }

    pub fn push(&mut self, writer: Arc<dyn Writer>) {
        self.writers.push(writer);
    }

    pub fn len(&self) -> usize {
        self.writers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }
}

impl Debug for CompositeWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeWriter")
            .field("writers", &self.writers.len())
            .finish()
    }
}

impl Writer for CompositeWriter {
    fn write(&self, context: LogContext) {
        for writer in &self.writers {
            writer.write(context.clone());
        }
    }
}
