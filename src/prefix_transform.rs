// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::log_context::LogContext;
use crate::parameter::LogParameter;
use crate::transform::{Transform, Transformed};

/**
Prepends a formatted prefix to every message.

| Specifier | Output                                        |
|-----------|-----------------------------------------------|
| `%m`      | the method, e.g. `debug`                      |
| `%M`      | the method uppercased, e.g. `DEBUG`           |
| `%n`      | the namespace, `*` for the root handle        |
| `%%`      | a literal `%`                                 |

Any other `%` sequence is copied through. The message becomes the prefix followed
by the message rendered as text; extra arguments are untouched.

```
use scribe::{InMemoryWriter, Level, PrefixTransform, Scribe};
use std::sync::Arc;

let scribe = Scribe::new();
let capture = Arc::new(InMemoryWriter::new());
scribe.set_writer(capture.clone());
scribe.set_level("*", Level::Trace).unwrap();
scribe.set_transform(Some(Arc::new(PrefixTransform::new("[%M] %n - "))));

scribe.get_log("module:feature").unwrap().warn("a message", vec![]);
assert_eq!(capture.drain_logs(), "[WARN] module:feature - a message");
```
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrefixTransform {
    format: String,
}

impl PrefixTransform {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    /// The prefix this transform would prepend to `context`.
    pub fn render(&self, context: &LogContext) -> String {
        let mut prefix = String::with_capacity(self.format.len());
        let mut chars = self.format.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '%' {
                prefix.push(c);
                continue;
            }
            match chars.peek() {
                Some('%') => prefix.push('%'),
                Some('m') => prefix.push_str(context.method.as_str()),
                Some('M') => prefix.push_str(context.method.as_upper_str()),
                Some('n') => prefix.push_str(context.namespace().unwrap_or("*")),
                _ => {
                    prefix.push('%');
                    continue;
                }
            }
            chars.next();
        }
        prefix
    }
}

impl Transform for PrefixTransform {
    fn transform(&self, context: LogContext) -> Transformed {
        let mut prefixed = self.render(&context);
        prefixed.push_str(&context.message.to_string());
        Transformed::Ready(context.with_message(LogParameter::Str(prefixed)))
    }
}
