// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered pattern-to-level rules and namespace resolution.
//!
//! Rules are kept newest first. Resolution scans front to back and the first rule
//! whose pattern matches decides the level, so a rule registered later outranks an
//! older one that also matches, regardless of which pattern is more specific.
//! Registering a pattern that already exists replaces the old rule and moves it
//! to the front.
//!
//! ```
//! use scribe::{Level, LevelRegistry};
//!
//! let mut registry = LevelRegistry::new();
//! registry.set_level("a:*", Level::Trace).unwrap();
//! registry.set_level("a:b/*", Level::Warn).unwrap();
//! assert_eq!(registry.resolve_level("a:b/method"), Level::Warn);
//! assert_eq!(registry.resolve_level("a:c"), Level::Trace);
//! assert_eq!(registry.resolve_level("z"), Level::Error);
//! ```

use crate::error::Result;
use crate::level::Level;
use crate::namespace::NamespacePattern;

/// The threshold of the catch-all rule in a fresh registry.
pub const DEFAULT_ROOT_LEVEL: Level = Level::Error;

/// A single pattern-to-level mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LevelRule {
    pattern: NamespacePattern,
    level: Level,
}

impl LevelRule {
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn matches(&self, namespace: &str) -> bool {
        self.pattern.matches(namespace)
    }

    fn root() -> Self {
        Self {
            pattern: NamespacePattern::root(),
            level: DEFAULT_ROOT_LEVEL,
        }
    }
}

/// An ordered rule list that always contains a catch-all `*` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRegistry {
    rules: Vec<LevelRule>,
}

impl LevelRegistry {
    /// A registry holding only the root rule `* -> error`.
    pub fn new() -> Self {
        Self {
            rules: vec![LevelRule::root()],
        }
    }

    /// Adds or overrides the rule for `pattern`.
    ///
    /// The pattern is validated and compiled before the list is touched, so a
    /// rejected pattern leaves the registry unchanged.
    pub fn set_level(&mut self, pattern: &str, level: Level) -> Result<()> {
        let pattern = NamespacePattern::compile(pattern)?;
        self.rules.retain(|rule| rule.pattern != pattern);
        self.rules.insert(0, LevelRule { pattern, level });
        Ok(())
    }

    /// The level of the first rule matching `namespace`.
    ///
    /// # Panics
    ///
    /// If no rule matches. The registry always holds a `*` rule, so this means the
    /// rule list was corrupted.
    pub fn resolve_level(&self, namespace: &str) -> Level {
        match self.rules.iter().find(|rule| rule.matches(namespace)) {
            Some(rule) => rule.level,
            None => panic!(
                "no level rule matches namespace {namespace:?}; the catch-all rule is missing"
            ),
        }
    }

    /// The rules in priority order, highest first.
    pub fn rules(&self) -> &[LevelRule] {
        &self.rules
    }

    /// The level currently assigned to the catch-all `*` pattern.
    pub fn root_level(&self) -> Level {
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_root())
            .map_or(DEFAULT_ROOT_LEVEL, |rule| rule.level)
    }

    /// Drops every rule except a fresh `* -> error`.
    pub fn reset(&mut self) {
        self.rules.clear();
        self.rules.push(LevelRule::root());
    }
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn fresh_registry_has_only_root() {
        let registry = LevelRegistry::new();
        assert_eq!(registry.rules().len(), 1);
        assert_eq!(registry.rules()[0].pattern(), "*");
        assert_eq!(registry.resolve_level("anything"), Level::Error);
        assert_eq!(registry.resolve_level(""), Level::Error);
    }

    #[test]
    fn same_pattern_overrides() {
        let mut registry = LevelRegistry::new();
        registry.set_level("a:*", Level::Trace).unwrap();
        registry.set_level("a:*", Level::Error).unwrap();
        let matching: Vec<_> = registry
            .rules()
            .iter()
            .filter(|r| r.pattern() == "a:*")
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].level(), Level::Error);
        assert_eq!(registry.rules().len(), 2);
    }

    #[test]
    fn newest_rule_wins_over_more_specific() {
        let mut registry = LevelRegistry::new();
        registry.set_level("a:b/*", Level::Warn).unwrap();
        registry.set_level("a:*", Level::Trace).unwrap();
        assert_eq!(registry.resolve_level("a:b/method"), Level::Trace);

        registry.set_level("a:b/*", Level::Warn).unwrap();
        assert_eq!(registry.resolve_level("a:b/method"), Level::Warn);
    }

    #[test]
    fn unmatched_namespace_falls_back_to_root() {
        let mut registry = LevelRegistry::new();
        registry.set_level("moduleA:*", Level::Debug).unwrap();
        assert_eq!(registry.resolve_level("moduleC:feature1"), Level::Error);
        assert_eq!(registry.resolve_level("moduleA"), Level::Error);
    }

    #[test]
    fn overriding_root_takes_priority() {
        let mut registry = LevelRegistry::new();
        registry.set_level("a:*", Level::Trace).unwrap();
        registry.set_level("*", Level::Info).unwrap();
        assert_eq!(registry.rules().len(), 2);
        assert_eq!(registry.rules()[0].pattern(), "*");
        assert_eq!(registry.root_level(), Level::Info);
        assert_eq!(registry.resolve_level("a:b"), Level::Info);
    }

    #[test]
    fn invalid_pattern_leaves_rules_untouched() {
        let mut registry = LevelRegistry::new();
        registry.set_level("a:*", Level::Warn).unwrap();
        let before = registry.clone();
        let err = registry.set_level("a.b", Level::Trace).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
        let err = registry.set_level("", Level::Trace).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
        assert_eq!(registry, before);
    }

    #[test]
    fn reset_restores_root_only() {
        let mut registry = LevelRegistry::new();
        registry.set_level("*", Level::Trace).unwrap();
        registry.set_level("x:*", Level::Warn).unwrap();
        registry.reset();
        assert_eq!(registry, LevelRegistry::new());
    }

    #[test]
    #[should_panic(expected = "catch-all")]
    fn missing_root_is_fatal() {
        let registry = LevelRegistry { rules: Vec::new() };
        registry.resolve_level("a");
    }
}
