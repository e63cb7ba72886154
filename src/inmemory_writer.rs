// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Writer
//!
//! A writer that keeps records instead of printing them. It is what the test
//! suites install to observe which calls got through the level gate and what the
//! transform did to them, and it is handy wherever the console is unavailable.
//!
//! Records are kept whole, so tests can check handle identity, method and
//! arguments, not only rendered text.

use crate::log_context::LogContext;
use crate::writer::Writer;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Captures records in memory.
///
/// # Example
///
/// ```rust
/// use scribe::{InMemoryWriter, Level, Method, Scribe};
/// use std::sync::Arc;
///
/// let scribe = Scribe::new();
/// let capture = Arc::new(InMemoryWriter::new());
/// scribe.set_writer(capture.clone());
/// scribe.set_level("*", Level::Warn).unwrap();
///
/// let log = scribe.get_log("jobs:runner").unwrap();
/// log.info("not captured", vec![]);
/// log.warn("captured", vec![]);
///
/// let records = capture.drain_records();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].method, Method::Warn);
/// assert!(capture.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryWriter {
    records: Mutex<Vec<LogContext>>,
}

impl InMemoryWriter {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    //a panicking writer elsewhere must not make the capture unreadable
    fn records(&self) -> MutexGuard<'_, Vec<LogContext>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes every captured record, clearing the buffer.
    pub fn drain_records(&self) -> Vec<LogContext> {
        std::mem::take(&mut *self.records())
    }

    /// Takes every captured record rendered as text, one per line.
    pub fn drain_logs(&self) -> String {
        self.drain_records()
            .iter()
            .map(LogContext::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Prints the captured records to stderr and clears the buffer.
    pub fn drain_to_console(&self) {
        for record in self.drain_records() {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(&wasm_bindgen::JsValue::from(record.to_string()));
            #[cfg(not(target_arch = "wasm32"))]
            eprintln!("{}", record);
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

impl Writer for InMemoryWriter {
    fn write(&self, context: LogContext) {
        self.records().push(context);
    }
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug/Default: derived
// - Clone: NOT implemented - two captures sharing nothing would surprise callers
// - PartialEq/Eq/Hash: NOT implemented - comparing mutex contents is not meaningful
// - Send/Sync: automatic via Mutex, required by Writer
