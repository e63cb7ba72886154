// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::level::Method;
use crate::log_context::LogContext;
use crate::writer::Writer;
use std::sync::{Arc, OnceLock};

/// The host console channel a record is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleChannel {
    Debug,
    Info,
    Warn,
    Error,
}

/**
The default writer.

Routes by method: `trace` and `debug` to the debug channel, `info` to the info
channel, `warn` and `error` to their own channels. Natively, debug and info go to
stdout and warn and error to stderr; on wasm32 the matching browser console
method is used. The line is the message followed by the arguments.
 */
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ConsoleWriter;

impl ConsoleWriter {
    pub const fn new() -> Self {
        Self
    }

    pub const fn channel(method: Method) -> ConsoleChannel {
        match method {
            Method::Trace | Method::Debug => ConsoleChannel::Debug,
            Method::Info => ConsoleChannel::Info,
            Method::Warn => ConsoleChannel::Warn,
            Method::Error => ConsoleChannel::Error,
        }
    }
}

impl Writer for ConsoleWriter {
    fn write(&self, context: LogContext) {
        let channel = Self::channel(context.method);
        let line = context.to_string();
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            match channel {
                ConsoleChannel::Debug | ConsoleChannel::Info => {
                    let mut lock = std::io::stdout().lock();
                    writeln!(lock, "{line}").expect("Can't log to stdout");
                }
                ConsoleChannel::Warn | ConsoleChannel::Error => {
                    let mut lock = std::io::stderr().lock();
                    writeln!(lock, "{line}").expect("Can't log to stderr");
                }
            }
        }
        #[cfg(target_arch = "wasm32")]
        {
            let line = wasm_bindgen::JsValue::from(line);
            match channel {
                ConsoleChannel::Debug => web_sys::console::debug_1(&line),
                ConsoleChannel::Info => web_sys::console::log_1(&line),
                ConsoleChannel::Warn => web_sys::console::warn_1(&line),
                ConsoleChannel::Error => web_sys::console::error_1(&line),
            }
        }
    }
}

static DEFAULT_WRITER: OnceLock<Arc<dyn Writer>> = OnceLock::new();

/// The shared console writer every fresh or reset facade starts with.
///
/// The same `Arc` is returned on every call, so `Arc::ptr_eq` tells whether a
/// facade still uses the default.
pub fn default_writer() -> Arc<dyn Writer> {
    DEFAULT_WRITER
        .get_or_init(|| Arc::new(ConsoleWriter::new()))
        .clone()
}
