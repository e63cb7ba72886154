//SPDX-License-Identifier: MIT OR Apache-2.0
//! # scribe
//!
//! scribe is a namespaced logging facade.
//!
//! # The problem
//!
//! A program made of many modules wants to turn logging up for the one it is
//! debugging without drowning in output from the rest. Compile-time filters need a
//! rebuild, and a single global level is all or nothing.
//!
//! # Namespaces
//!
//! Every handle is named `module:feature/method`, with the feature and method parts
//! optional:
//!
//! ```text
//! auth
//! auth:login
//! auth:login/verify_password
//! ```
//!
//! Levels are assigned by glob patterns over those names. `*` matches any run of
//! characters, so `auth:*` covers every feature of `auth` and `*/flush` covers every
//! `flush` method anywhere. The most recently set pattern wins when several match,
//! and the catch-all `*` starts at `error`.
//!
//! | Level    | Accepts                             |
//! |----------|-------------------------------------|
//! | trace    | everything                          |
//! | debug    | debug, info, warn, error            |
//! | info     | info, warn, error                   |
//! | warn     | warn, error                         |
//! | error    | error                               |
//! | silent   | nothing                             |
//!
//! Changing a rule re-levels every handle already issued, so handles can be stored
//! in statics or struct fields and still follow the configuration.
//!
//! # The API
//!
//! ```rust
//! use scribe::{params, Level, Scribe};
//!
//! let scribe = Scribe::new();
//! let log = scribe.get_log("auth:login").unwrap();
//! scribe.set_level("auth:*", Level::Debug).unwrap();
//! log.debug("checking password for", params!["alice"]);
//! log.trace("not printed", vec![]);
//!
//! // every `flush` method, in any module or feature
//! scribe.set_level("*:*/flush", Level::Silent).unwrap();
//! assert_eq!(scribe.resolve_level("db:pool/flush"), Level::Silent);
//! ```
//!
//! Each leveled method has a synchronous and an asynchronous version. The async
//! version lets a transform that needs to await (see [`Transformed::Deferred`]) run on
//! your executor instead of blocking the caller.
//!
//! Most programs share the process-wide facade in [`global`], configured at startup
//! from the `SCRIBE_LOG` environment variable (see [`config`] for the syntax).
//!
//! # Output
//!
//! Records that pass the level gate go through an optional [`Transform`] and then to
//! a [`Writer`]. The default writer prints to the console; [`InMemoryWriter`] captures
//! records for tests. [`PrefixTransform`] and [`ColorTransform`] cover the common
//! formatting needs.

mod color_transform;
pub mod config;
mod console_writer;
mod dispatch;
mod error;
pub mod global;
mod inmemory_writer;
mod internal;
mod level;
mod level_registry;
mod log;
mod log_context;
pub mod namespace;
mod parameter;
mod prefix_transform;
mod scribe;
mod spinlock;
mod transform;
mod writer;

pub use color_transform::{
    Color, ColorTransform, ColoringStrategy, LevelColoringStrategy, NamespaceColoringStrategy,
};
pub use console_writer::{default_writer, ConsoleChannel, ConsoleWriter};
pub use error::{Error, Result};
pub use inmemory_writer::InMemoryWriter;
pub use level::{Level, Method};
pub use level_registry::{LevelRegistry, LevelRule, DEFAULT_ROOT_LEVEL};
pub use log::{Log, LogFuture};
pub use log_context::LogContext;
pub use namespace::NamespacePattern;
pub use parameter::LogParameter;
pub use prefix_transform::PrefixTransform;
pub use scribe::Scribe;
pub use transform::{DeferredContext, IdentityTransform, Transform, Transformed};
pub use writer::{CompositeWriter, NullWriter, Writer};
