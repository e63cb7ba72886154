// SPDX-License-Identifier: MIT OR Apache-2.0

//! The facade: handle cache, level rules, writer and transform.

use crate::dispatch::Dispatch;
use crate::error::Result;
use crate::internal::debug_internal;
use crate::level::Level;
use crate::level_registry::{LevelRegistry, LevelRule};
use crate::log::Log;
use crate::namespace::validate_namespace;
use crate::spinlock::RwSpinlock;
use crate::transform::Transform;
use crate::writer::Writer;
use std::collections::HashMap;
use std::sync::Arc;

/// The namespace the root handle is resolved against.
const ROOT_NAMESPACE: &str = "";

struct State {
    levels: LevelRegistry,
    logs: HashMap<String, Arc<Log>>,
    root: Arc<Log>,
}

impl State {
    fn new(dispatch: &Arc<Dispatch>) -> Self {
        let levels = LevelRegistry::new();
        let root = Log::new(None, levels.resolve_level(ROOT_NAMESPACE), dispatch.clone());
        Self {
            levels,
            logs: HashMap::new(),
            root,
        }
    }

    /// Re-resolves every issued handle against the current rules.
    fn refresh_levels(&self) {
        self.root.set_level(self.levels.resolve_level(ROOT_NAMESPACE));
        for (namespace, log) in &self.logs {
            log.set_level(self.levels.resolve_level(namespace));
        }
    }
}

/**
A namespaced logging facade.

A `Scribe` owns the pattern-to-level rules, caches one [`Log`] per namespace and
holds the writer and optional transform that accepted calls flow through. Most
programs use the process-wide instance from [`global::scribe`](crate::global::scribe);
tests and embedders can create their own.

```
use scribe::{InMemoryWriter, Level, Scribe};
use std::sync::Arc;

let scribe = Scribe::new();
let capture = Arc::new(InMemoryWriter::new());
scribe.set_writer(capture.clone());

let login = scribe.get_log("auth:login").unwrap();
assert_eq!(login.level(), Level::Error);

// rule changes reach handles that already exist
scribe.set_level("auth:*", Level::Debug).unwrap();
assert_eq!(login.level(), Level::Debug);

login.debug("checking password", vec![]);
assert_eq!(capture.drain_logs(), "checking password");
```
*/
pub struct Scribe {
    state: RwSpinlock<State>,
    dispatch: Arc<Dispatch>,
}

impl Scribe {
    /// A facade with only the root rule `* -> error`, the console writer and no transform.
    pub fn new() -> Self {
        let dispatch = Arc::new(Dispatch::new());
        Self {
            state: RwSpinlock::new(State::new(&dispatch)),
            dispatch,
        }
    }

    /// The root handle.
    pub fn log(&self) -> Arc<Log> {
        self.state.read(|state| state.root.clone())
    }

    /**
    Returns the handle for `namespace`, creating and caching it on first use.

    # Errors

    [`Error::InvalidNamespace`](crate::Error::InvalidNamespace) when `namespace` is empty or
    does not follow the `module:feature/method` grammar. Nothing is cached in that case.
    */
    pub fn get_log(&self, namespace: &str) -> Result<Arc<Log>> {
        validate_namespace(namespace)?;
        if let Some(log) = self.state.read(|state| state.logs.get(namespace).cloned()) {
            return Ok(log);
        }
        let dispatch = &self.dispatch;
        let log = self.state.write(|state| {
            let State { levels, logs, .. } = state;
            logs.entry(namespace.to_string())
                .or_insert_with(|| {
                    let level = levels.resolve_level(namespace);
                    debug_internal!("created log {namespace:?} at {level}");
                    Log::new(Some(namespace.to_string()), level, dispatch.clone())
                })
                .clone()
        });
        Ok(log)
    }

    /**
    Sets the level for every namespace matching `pattern`.

    The rule goes to the front of the rule list, replacing an earlier rule with the
    identical pattern, and every issued handle is re-resolved.

    # Errors

    [`Error::InvalidPattern`](crate::Error::InvalidPattern) when `pattern` is empty or
    contains characters other than word characters, `:`, `/` and `*`. The rules are
    unchanged in that case.
    */
    pub fn set_level(&self, pattern: &str, level: Level) -> Result<()> {
        self.set_levels([(pattern, level)])
    }

    /// Applies several rules in order under one lock, all or nothing.
    pub(crate) fn set_levels<'p, I>(&self, rules: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'p str, Level)>,
    {
        self.state.write(|state| {
            let mut levels = state.levels.clone();
            for (pattern, level) in rules {
                levels.set_level(pattern, level)?;
                debug_internal!("set level {pattern:?} -> {level}");
            }
            state.levels = levels;
            state.refresh_levels();
            Ok(())
        })
    }

    /// The level `namespace` would get from the current rules.
    pub fn resolve_level(&self, namespace: &str) -> Level {
        self.state.read(|state| state.levels.resolve_level(namespace))
    }

    /// A snapshot of the rule list, highest priority first.
    pub fn rules(&self) -> Vec<LevelRule> {
        self.state.read(|state| state.levels.rules().to_vec())
    }

    /**
    Restores the pristine state.

    Clears every cached handle and rule, recreates the root handle, removes the
    transform and reinstalls the console writer. Handles obtained earlier keep
    working but are no longer returned by [`get_log`](Self::get_log) and no longer
    receive level updates.
    */
    pub fn reset(&self) {
        let dispatch = &self.dispatch;
        //the old handles drop outside the lock
        let _previous = self
            .state
            .write(|state| std::mem::replace(state, State::new(dispatch)));
        self.dispatch.reset();
        debug_internal!("reset");
    }

    pub fn writer(&self) -> Arc<dyn Writer> {
        self.dispatch.writer()
    }

    /// Replaces the writer for every handle, including ones already issued.
    pub fn set_writer(&self, writer: Arc<dyn Writer>) {
        self.dispatch.set_writer(writer);
    }

    /// Whether the shared console writer is installed.
    pub fn has_default_writer(&self) -> bool {
        Arc::ptr_eq(&self.writer(), &crate::console_writer::default_writer())
    }

    pub fn transform(&self) -> Option<Arc<dyn Transform>> {
        self.dispatch.transform()
    }

    /// Installs `transform`, or removes the active one with `None`.
    pub fn set_transform(&self, transform: Option<Arc<dyn Transform>>) {
        self.dispatch.set_transform(transform);
    }
}

impl Default for Scribe {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Scribe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.state.read(|state| {
            f.debug_struct("Scribe")
                .field("rules", &state.levels.rules())
                .field("logs", &state.logs.len())
                .field("dispatch", &self.dispatch)
                .finish()
        })
    }
}
