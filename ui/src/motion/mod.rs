//! Declarative animation parameters compiled to CSS.
//!
//! A [`Keyframes`] value is a named set of property tracks. Every track lists
//! one value per stop, stops are spaced evenly from 0% to 100%, and transform
//! tracks sharing a stop are merged into a single `transform` declaration.
//! A [`Transition`] carries the timing and becomes the `animation` shorthand.

use std::fmt::{self, Write as _};

use crate::error::{Result, UiError};

pub mod effects;

/// A CSS length used by translate tracks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f32),
    Percent(f32),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{v}px"),
            Length::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// One animated property and its value at each stop.
#[derive(Debug, Clone, PartialEq)]
pub enum Track {
    TranslateX(Vec<Length>),
    TranslateY(Vec<Length>),
    Scale(Vec<f32>),
    ScaleX(Vec<f32>),
    /// Degrees.
    Rotate(Vec<f32>),
    Opacity(Vec<f32>),
    BoxShadow(Vec<&'static str>),
}

impl Track {
    fn len(&self) -> usize {
        match self {
            Track::TranslateX(v) | Track::TranslateY(v) => v.len(),
            Track::Scale(v) | Track::ScaleX(v) | Track::Rotate(v) | Track::Opacity(v) => v.len(),
            Track::BoxShadow(v) => v.len(),
        }
    }

    /// Transform function at `stop`, if this is a transform track.
    fn transform_at(&self, stop: usize) -> Option<String> {
        match self {
            Track::TranslateX(v) => Some(format!("translateX({})", v[stop])),
            Track::TranslateY(v) => Some(format!("translateY({})", v[stop])),
            Track::Scale(v) => Some(format!("scale({})", v[stop])),
            Track::ScaleX(v) => Some(format!("scaleX({})", v[stop])),
            Track::Rotate(v) => Some(format!("rotate({}deg)", v[stop])),
            Track::Opacity(_) | Track::BoxShadow(_) => None,
        }
    }

    /// Standalone declaration at `stop`, if this is not a transform track.
    fn declaration_at(&self, stop: usize) -> Option<String> {
        match self {
            Track::Opacity(v) => Some(format!("opacity: {};", v[stop])),
            Track::BoxShadow(v) => Some(format!("box-shadow: {};", v[stop])),
            _ => None,
        }
    }
}

/// A named `@keyframes` rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    pub name: &'static str,
    pub tracks: Vec<Track>,
}

impl Keyframes {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            tracks: Vec::new(),
        }
    }

    pub fn track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    /// Number of stops shared by every track.
    pub fn stops(&self) -> Result<usize> {
        let mut lens = self.tracks.iter().map(Track::len);
        let expected = lens.next().unwrap_or(0);
        if expected < 2 {
            return Err(UiError::TooFewStops(self.name.to_string()));
        }
        if let Some(found) = lens.find(|len| *len != expected) {
            return Err(UiError::TrackLength {
                name: self.name.to_string(),
                expected,
                found,
            });
        }
        Ok(expected)
    }

    pub fn to_css(&self) -> Result<String> {
        let stops = self.stops()?;
        let mut css = format!("@keyframes {} {{\n", self.name);
        for stop in 0..stops {
            let offset = stop as f32 * 100.0 / (stops - 1) as f32;
            let transforms: Vec<String> =
                self.tracks.iter().filter_map(|t| t.transform_at(stop)).collect();
            let mut body = String::new();
            if !transforms.is_empty() {
                let _ = write!(body, " transform: {};", transforms.join(" "));
            }
            for decl in self.tracks.iter().filter_map(|t| t.declaration_at(stop)) {
                body.push(' ');
                body.push_str(&decl);
            }
            let _ = writeln!(css, "  {offset}% {{{body} }}");
        }
        css.push_str("}\n");
        Ok(css)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Forever,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Ease {
    fn as_css(self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::EaseOut => "ease-out",
            Ease::EaseInOut => "ease-in-out",
        }
    }
}

/// Timing of an animation, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub repeat: Repeat,
    pub ease: Ease,
}

impl Transition {
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            repeat: Repeat::Once,
            ease: Ease::EaseInOut,
        }
    }

    pub const fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub const fn forever(mut self) -> Self {
        self.repeat = Repeat::Forever;
        self
    }

    pub const fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Value of the `animation` shorthand for keyframes `name`.
    ///
    /// Play-once entrances fill `backwards` only: once finished they release
    /// `transform` and `opacity` back to the element's own rules (`:hover`
    /// included).
    pub fn animation(&self, name: &str) -> String {
        let (iterations, fill) = match self.repeat {
            Repeat::Once => ("1", "backwards"),
            Repeat::Forever => ("infinite", "both"),
        };
        format!(
            "{name} {}ms {} {}ms {iterations} {fill}",
            self.duration_ms,
            self.ease.as_css(),
            self.delay_ms
        )
    }
}

/// Keyframes reference plus timing; rendered as an inline style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub keyframes: &'static str,
    pub transition: Transition,
}

impl Animation {
    pub fn style(&self) -> String {
        format!("animation: {};", self.transition.animation(self.keyframes))
    }
}
