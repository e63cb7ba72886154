//! Rule resolution scenarios: targeting, priority and overriding.

use scribe::{Error, InMemoryWriter, Level, Log, Method, Scribe};
use std::sync::Arc;

#[derive(Clone, Copy, PartialEq)]
enum Order {
    Normal,
    Reverse,
    Mixed,
}

struct Target<'a> {
    pattern: &'a str,
    level: Level,
    namespaces: &'a [&'a str],
}

struct Harness {
    scribe: Scribe,
    capture: Arc<InMemoryWriter>,
}

impl Harness {
    fn new() -> Self {
        let scribe = Scribe::new();
        let capture = Arc::new(InMemoryWriter::new());
        scribe.set_writer(capture.clone());
        Harness { scribe, capture }
    }

    fn logs(&self, namespaces: &[&str]) -> Vec<Arc<Log>> {
        namespaces
            .iter()
            .map(|ns| self.scribe.get_log(ns).unwrap())
            .collect()
    }

    /// Checks the reported level and that exactly the methods at or above it dispatch.
    fn assert_output(&self, log: &Arc<Log>, level: Level) {
        assert_eq!(log.level(), level, "{:?}", log.namespace());
        for method in Method::ALL {
            log.log(method, "a message", vec![]);
            let expected = usize::from(method.level() >= level);
            assert_eq!(
                self.capture.drain_records().len(),
                expected,
                "{method} on {:?} at {level}",
                log.namespace()
            );
        }
    }

    fn change(&self, target: Target<'_>, control: Target<'_>, untouched: &[&str], order: Order) {
        let default_level = self.scribe.log().level();
        assert_ne!(default_level, target.level);
        assert_ne!(target.level, control.level);

        if order == Order::Normal {
            self.scribe.set_level(target.pattern, target.level).unwrap();
            self.scribe.set_level(control.pattern, control.level).unwrap();
        } else {
            self.scribe.set_level(control.pattern, control.level).unwrap();
            self.scribe.set_level(target.pattern, target.level).unwrap();
        }

        self.assert_output(&self.scribe.log(), default_level);

        let (target_logs, control_logs, untouched_logs) = match order {
            Order::Normal => {
                let t = self.logs(target.namespaces);
                let c = self.logs(control.namespaces);
                (t, c, self.logs(untouched))
            }
            Order::Reverse => {
                let u = self.logs(untouched);
                let c = self.logs(control.namespaces);
                (self.logs(target.namespaces), c, u)
            }
            Order::Mixed => {
                let c = self.logs(control.namespaces);
                let u = self.logs(untouched);
                (self.logs(target.namespaces), c, u)
            }
        };

        for log in &target_logs {
            self.assert_output(log, target.level);
        }
        for log in &control_logs {
            self.assert_output(log, control.level);
        }
        for log in &untouched_logs {
            self.assert_output(log, default_level);
        }
    }
}

#[test]
fn rejects_empty_pattern() {
    let harness = Harness::new();
    let err = harness.scribe.set_level("", Level::Debug).unwrap_err();
    assert_eq!(err.parameter(), Some("pattern"));
}

#[test]
fn rejects_invalid_characters() {
    let harness = Harness::new();
    for pattern in ["test$", "test.name", "test name", "test+name"] {
        assert!(
            matches!(
                harness.scribe.set_level(pattern, Level::Debug),
                Err(Error::InvalidPattern { .. })
            ),
            "{pattern}"
        );
    }
}

#[test]
fn targets_everything() {
    let harness = Harness::new();
    harness.scribe.set_level("*", Level::Debug).unwrap();
    harness.assert_output(&harness.scribe.log(), Level::Debug);
    for log in harness.logs(&[
        "moduleA:feature1",
        "moduleA:feature2",
        "moduleA:feature3/method1",
        "moduleA:feature3/method2",
    ]) {
        harness.assert_output(&log, Level::Debug);
    }
}

#[test]
fn targets_all_features_in_a_module() {
    Harness::new().change(
        Target {
            pattern: "moduleA:*",
            level: Level::Debug,
            namespaces: &[
                "moduleA:feature1",
                "moduleA:feature2",
                "moduleA:feature3/method1",
                "moduleA:feature3/method2",
            ],
        },
        Target {
            pattern: "moduleB:*",
            level: Level::Warn,
            namespaces: &["moduleB:feature1", "moduleB:feature2", "moduleB:feature3/method1"],
        },
        &["moduleA1", "_moduleA", "moduleC", "moduleC:feature1", "moduleBB"],
        Order::Normal,
    );
}

#[test]
fn targets_all_methods_in_a_feature() {
    Harness::new().change(
        Target {
            pattern: "moduleA:featureA/*",
            level: Level::Warn,
            namespaces: &[
                "moduleA:featureA/method1",
                "moduleA:featureA/method2",
                "moduleA:featureA/method2/variant",
            ],
        },
        Target {
            pattern: "moduleA:featureB/*",
            level: Level::Trace,
            namespaces: &["moduleA:featureB/method1"],
        },
        &[
            "moduleA",
            "moduleA:featureA",
            "moduleA:featureB",
            "moduleB",
            "moduleB:featureA/method1",
        ],
        Order::Reverse,
    );
}

#[test]
fn targets_a_method_across_modules() {
    Harness::new().change(
        Target {
            pattern: "*:*/methodA",
            level: Level::Trace,
            namespaces: &[
                "moduleA:featureA/methodA",
                "moduleA:featureB/methodA",
                "moduleB:featureA/methodA",
                "moduleC:featureA/methodB/methodA",
            ],
        },
        Target {
            pattern: "*/methodB",
            level: Level::Debug,
            namespaces: &[
                "moduleA:featureA/methodB",
                "moduleA:featureB/methodB",
                "moduleB:featureA/methodB",
                "moduleA:featureA/methodA/methodB",
            ],
        },
        &[
            "moduleA",
            "moduleA:featureA",
            "moduleA:featureA/methodC",
            "moduleB",
            "moduleA:featureA/methodA/variant",
            "moduleA:featureA/methodB/variant",
        ],
        Order::Mixed,
    );
}

#[test]
fn newer_infix_rule_wins() {
    Harness::new().change(
        Target {
            pattern: "moduleA:*",
            level: Level::Trace,
            namespaces: &[
                "moduleA:featureA",
                "moduleA:featureB/methodA/variant",
                "moduleA:featureB/methodB",
                "moduleA:featureB/methodC",
            ],
        },
        Target {
            pattern: "moduleA:*/methodA",
            level: Level::Warn,
            namespaces: &[
                "moduleA:featureA/methodA",
                "moduleA:featureB/methodA",
                "moduleA:featureB/methodB/methodA",
            ],
        },
        &["moduleB", "moduleB:featureA/methodA"],
        Order::Normal,
    );
}

#[test]
fn newer_postfix_rule_wins() {
    Harness::new().change(
        Target {
            pattern: "moduleA:*",
            level: Level::Trace,
            namespaces: &[
                "moduleA:featureA",
                "moduleA:featureB/methodB",
                "moduleA:featureB/methodB/variant",
                "moduleA:featureB/methodC",
            ],
        },
        Target {
            pattern: "moduleA:featureB/methodA*",
            level: Level::Warn,
            namespaces: &[
                "moduleA:featureB/methodA",
                "moduleA:featureB/methodA/variant",
                "moduleA:featureB/methodA/methodA",
            ],
        },
        &["moduleB", "moduleB:featureA/methodA"],
        Order::Normal,
    );
}

#[test]
fn broad_rule_set_last_shadows_specific_rule() {
    Harness::new().change(
        Target {
            pattern: "moduleA:*",
            level: Level::Trace,
            namespaces: &[
                "moduleA:featureA",
                "moduleA:featureA/methodA",
                "moduleA:featureB/methodA",
                "moduleA:featureB/methodB/methodA",
                "moduleA:featureB/methodA/variant",
                "moduleA:featureB/methodB",
            ],
        },
        Target {
            pattern: "moduleA:*/methodA",
            level: Level::Warn,
            namespaces: &[],
        },
        &["moduleB", "moduleB:featureA/methodA"],
        Order::Reverse,
    );
}

#[test]
fn overrides_an_existing_pattern() {
    let harness = Harness::new();
    harness.change(
        Target {
            pattern: "moduleA:*",
            level: Level::Trace,
            namespaces: &[
                "moduleA:featureA",
                "moduleA:featureB",
                "moduleA:featureA/methodA",
                "moduleA:featureA/methodB",
                "moduleA:featureA/methodB/variant",
            ],
        },
        Target {
            pattern: "moduleB:*",
            level: Level::Debug,
            namespaces: &[
                "moduleB:featureA",
                "moduleB:featureB",
                "moduleB:featureA/methodA",
                "moduleB:featureA/methodB",
                "moduleB:featureA/methodB/variant",
            ],
        },
        &["moduleC", "moduleD:featureA", "moduleD:featureA/methodC"],
        Order::Normal,
    );
    harness.change(
        Target {
            pattern: "moduleA:*",
            level: Level::Warn,
            namespaces: &[
                "moduleA:featureA",
                "moduleA:featureB",
                "moduleA:featureA/methodB",
                "moduleA:featureA/methodB/variant",
            ],
        },
        Target {
            pattern: "moduleA:*/methodA*",
            level: Level::Silent,
            namespaces: &[
                "moduleA:featureA/methodA",
                "moduleA:featureA/methodA/variant",
                "moduleA:featureB/methodA",
                "moduleA:featureC/methodA/variant",
            ],
        },
        &["moduleC", "moduleD:featureA", "moduleD:featureA/methodC"],
        Order::Normal,
    );
    let patterns: Vec<String> = harness
        .scribe
        .rules()
        .iter()
        .map(|rule| rule.pattern().to_string())
        .collect();
    assert_eq!(patterns, ["moduleA:*/methodA*", "moduleA:*", "moduleB:*", "*"]);
}

#[test]
fn root_override_outranks_earlier_rules() {
    let harness = Harness::new();
    harness.scribe.set_level("moduleA:*", Level::Trace).unwrap();
    harness.scribe.set_level("*", Level::Warn).unwrap();
    let log = harness.scribe.get_log("moduleA:featureA").unwrap();
    harness.assert_output(&log, Level::Warn);
    harness.assert_output(&harness.scribe.log(), Level::Warn);
    assert_eq!(harness.scribe.rules().len(), 2);
}

#[test]
fn silent_suppresses_everything() {
    let harness = Harness::new();
    harness.scribe.set_level("*", Level::Silent).unwrap();
    harness.assert_output(&harness.scribe.get_log("quiet:please").unwrap(), Level::Silent);
}
