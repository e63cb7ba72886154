// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Colored output
//!
//! [`ColorTransform`] wraps each message in a 24-bit terminal color. Which color is
//! decided by a [`ColoringStrategy`]; two are provided:
//!
//! - [`LevelColoringStrategy`] gives each method a fixed color.
//! - [`NamespaceColoringStrategy`] gives each namespace a random color the first
//!   time it logs and keeps it afterwards, so interleaved output from different
//!   modules is easy to tell apart.
//!
//! ```
//! use scribe::{Color, ColorTransform, LevelColoringStrategy, Method, Scribe};
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! let colors = HashMap::from([
//!     (Method::Warn, Color::rgb(230, 22, 190)),
//!     (Method::Error, Color::hsl(0.0, 0.8, 0.5)),
//! ]);
//! let strategy = LevelColoringStrategy::new(colors).unwrap();
//! let scribe = Scribe::new();
//! scribe.set_transform(Some(Arc::new(ColorTransform::new(strategy))));
//! scribe.log().error("disk full", vec![]);
//!
//! assert!(LevelColoringStrategy::new(HashMap::from([(Method::Info, Color::hsl(400.0, 0.5, 0.5))])).is_err());
//! ```
//!
//! Whether escapes are emitted at all follows the `colored` crate's detection
//! (`NO_COLOR`, `CLICOLOR_FORCE`, tty checks).

use crate::error::{Error, Result};
use crate::internal::debug_internal;
use crate::level::Method;
use crate::log_context::LogContext;
use crate::parameter::LogParameter;
use crate::transform::{Transform, Transformed};
use colored::Colorize;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgb { red: u8, green: u8, blue: u8 },
    /// `hue` in degrees `0..=360`, `saturation` and `lightness` in `0..=1`.
    Hsl {
        hue: f64,
        saturation: f64,
        lightness: f64,
    },
}

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color::Rgb { red, green, blue }
    }

    pub const fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        Color::Hsl {
            hue,
            saturation,
            lightness,
        }
    }

    /// Checks every component is in range. RGB colors are always valid.
    pub fn validate(&self) -> Result<()> {
        if let Color::Hsl {
            hue,
            saturation,
            lightness,
        } = *self
        {
            check_range("hue", hue, 0.0, 360.0)?;
            check_range("saturation", saturation, 0.0, 1.0)?;
            check_range("lightness", lightness, 0.0, 1.0)?;
        }
        Ok(())
    }

    /// The color as `(red, green, blue)`.
    ///
    /// Out-of-range HSL components are clamped.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match *self {
            Color::Rgb { red, green, blue } => (red, green, blue),
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => hsl_to_rgb(hue, saturation, lightness),
        }
    }

    /// `text` wrapped in this color's terminal escapes.
    pub fn paint(&self, text: &str) -> String {
        let (red, green, blue) = self.to_rgb();
        text.truecolor(red, green, blue).to_string()
    }
}

fn check_range(component: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    //NaN fails the contains check
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::ColorOutOfRange {
            component,
            value,
            min,
            max,
        })
    }
}

fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let hue = if hue.is_finite() { hue.rem_euclid(360.0) } else { 0.0 };
    let saturation = saturation.clamp(0.0, 1.0);
    let lightness = lightness.clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let channel = |c: f64| ((c + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}

/// Picks the color for a record. `None` leaves the message uncolored.
pub trait ColoringStrategy: Send + Sync {
    fn color(&self, context: &LogContext) -> Option<Color>;
}

/// One fixed color per method.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelColoringStrategy {
    colors: HashMap<Method, Color>,
}

impl LevelColoringStrategy {
    /**
    Methods missing from `colors` are not colored.

    # Errors

    [`Error::ColorOutOfRange`] for the first color with a component out of range.
    */
    pub fn new(colors: HashMap<Method, Color>) -> Result<Self> {
        for color in colors.values() {
            color.validate()?;
        }
        Ok(Self { colors })
    }
}

impl Default for LevelColoringStrategy {
    fn default() -> Self {
        Self {
            colors: HashMap::from([
                (Method::Trace, Color::rgb(128, 128, 128)),
                (Method::Debug, Color::rgb(0, 175, 215)),
                (Method::Info, Color::rgb(95, 175, 0)),
                (Method::Warn, Color::rgb(215, 175, 0)),
                (Method::Error, Color::rgb(215, 0, 0)),
            ]),
        }
    }
}

impl ColoringStrategy for LevelColoringStrategy {
    fn color(&self, context: &LogContext) -> Option<Color> {
        self.colors.get(&context.method).copied()
    }
}

/// A random color per namespace, stable once assigned. The root handle gets one too.
#[derive(Debug, Default)]
pub struct NamespaceColoringStrategy {
    colors: Mutex<HashMap<Option<String>, Color>>,
}

impl NamespaceColoringStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// The color for `namespace`, assigning one on first use.
    pub fn color_of(&self, namespace: Option<&str>) -> Color {
        let mut colors = self.colors.lock().unwrap_or_else(PoisonError::into_inner);
        *colors
            .entry(namespace.map(str::to_string))
            .or_insert_with(|| Color::rgb(rand::random(), rand::random(), rand::random()))
    }
}

impl ColoringStrategy for NamespaceColoringStrategy {
    fn color(&self, context: &LogContext) -> Option<Color> {
        Some(self.color_of(context.namespace()))
    }
}

/// Colors the message with the color its strategy picks.
#[derive(Debug, Default)]
pub struct ColorTransform<S> {
    strategy: S,
}

impl<S: ColoringStrategy> ColorTransform<S> {
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}

impl<S: ColoringStrategy> Transform for ColorTransform<S> {
    fn transform(&self, context: LogContext) -> Transformed {
        let Some(color) = self.strategy.color(&context) else {
            return Transformed::Ready(context);
        };
        if let Err(e) = color.validate() {
            debug_internal!("not coloring {:?}: {e}", context.namespace());
            return Transformed::Ready(context);
        }
        let painted = color.paint(&context.message.to_string());
        Transformed::Ready(context.with_message(LogParameter::Str(painted)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InMemoryWriter, Level, Scribe};
    use std::sync::Arc;

    fn capture_with<S: ColoringStrategy + 'static>(strategy: S) -> (Scribe, Arc<InMemoryWriter>) {
        colored::control::set_override(true);
        let scribe = Scribe::new();
        let capture = Arc::new(InMemoryWriter::new());
        scribe.set_writer(capture.clone());
        scribe.set_level("*", Level::Trace).unwrap();
        scribe.set_transform(Some(Arc::new(ColorTransform::new(strategy))));
        (scribe, capture)
    }

    #[test]
    fn hsl_conversion() {
        assert_eq!(Color::hsl(0.0, 1.0, 0.5).to_rgb(), (255, 0, 0));
        assert_eq!(Color::hsl(120.0, 1.0, 0.5).to_rgb(), (0, 255, 0));
        assert_eq!(Color::hsl(240.0, 1.0, 0.5).to_rgb(), (0, 0, 255));
        assert_eq!(Color::hsl(360.0, 1.0, 0.5).to_rgb(), (255, 0, 0));
        assert_eq!(Color::hsl(30.0, 0.0, 1.0).to_rgb(), (255, 255, 255));
        assert_eq!(Color::hsl(30.0, 0.0, 0.0).to_rgb(), (0, 0, 0));
    }

    #[test]
    fn validation() {
        assert!(Color::rgb(0, 0, 0).validate().is_ok());
        assert!(Color::hsl(360.0, 1.0, 0.0).validate().is_ok());
        assert_eq!(
            Color::hsl(30.0, 1.5, 0.5).validate(),
            Err(Error::ColorOutOfRange {
                component: "saturation",
                value: 1.5,
                min: 0.0,
                max: 1.0
            })
        );
        assert!(Color::hsl(-1.0, 0.5, 0.5).validate().is_err());
        assert!(Color::hsl(f64::NAN, 0.5, 0.5).validate().is_err());
    }

    #[test]
    fn level_strategy_colors_by_method() {
        let (scribe, capture) = capture_with(LevelColoringStrategy::new(HashMap::from([(
            Method::Warn,
            Color::rgb(230, 22, 190),
        )]))
        .unwrap());
        let log = scribe.get_log("color:level").unwrap();
        log.warn("careful", vec![]);
        log.info("plain", vec![]);
        let records = capture.drain_records();
        let warned = records[0].message.as_str().unwrap();
        assert!(warned.starts_with('\u{1b}'));
        assert!(warned.contains("careful"));
        assert_eq!(records[1].message.as_str(), Some("plain"));
    }

    #[test]
    fn namespace_colors_are_stable() {
        let strategy = NamespaceColoringStrategy::new();
        let a = strategy.color_of(Some("moduleA"));
        assert_eq!(strategy.color_of(Some("moduleA")), a);
        let root = strategy.color_of(None);
        assert_eq!(strategy.color_of(None), root);
    }

    #[test]
    fn namespace_strategy_colors_every_record() {
        let (scribe, capture) = capture_with(NamespaceColoringStrategy::new());
        scribe.get_log("moduleA:foo").unwrap().debug("from a", vec![]);
        scribe.get_log("moduleA:foo").unwrap().debug("from a again", vec![]);
        let records = capture.drain_records();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.message.as_str().unwrap().contains("from a")));
        let painted = ColorTransform::new(NamespaceColoringStrategy::new());
        assert!(painted.strategy().colors.lock().unwrap().is_empty());
    }

    struct Invalid;

    impl ColoringStrategy for Invalid {
        fn color(&self, _context: &LogContext) -> Option<Color> {
            Some(Color::hsl(500.0, 2.0, 2.0))
        }
    }

    #[test]
    fn invalid_strategy_colors_are_skipped() {
        let (scribe, capture) = capture_with(Invalid);
        scribe.log().error("untouched", vec![]);
        assert_eq!(capture.drain_logs(), "untouched");
    }
}
