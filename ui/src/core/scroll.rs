//! Scroll-driven header state.
//!
//! A [`ScrollSource`] reports the viewport's vertical offset and lets callers
//! subscribe to scroll events. [`watch`] turns that stream into
//! [`ScrollState`] transitions; the returned [`ScrollSubscription`] removes the
//! listener when dropped, after which no further transitions are delivered.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::Result;

/// Offset (px) past which the header counts as scrolled.
pub const DEFAULT_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ScrollState {
    /// At or above the threshold: transparent header.
    #[default]
    Top,
    /// Past the threshold: opaque, blurred header.
    Scrolled,
}

impl ScrollState {
    /// Strictly greater than `threshold` counts as scrolled.
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            ScrollState::Scrolled
        } else {
            ScrollState::Top
        }
    }

    pub fn header_class(self) -> &'static str {
        match self {
            ScrollState::Top => "navbar navbar--top",
            ScrollState::Scrolled => "navbar navbar--scrolled",
        }
    }
}

pub type ScrollHandler = Rc<dyn Fn(f64)>;

/// Something that reports the viewport scroll offset.
pub trait ScrollSource {
    /// Current vertical offset in px.
    fn offset(&self) -> f64;

    /// Call `handler` with the new offset on every scroll event until the
    /// returned subscription is dropped.
    fn subscribe(&self, handler: ScrollHandler) -> Result<ScrollSubscription>;
}

/// Listener registration; dropping it deregisters the listener.
#[must_use = "dropping the subscription removes the scroll listener"]
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn inert() -> Self {
        Self { release: None }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Subscribe to `source` and call `on_change` whenever the derived
/// [`ScrollState`] differs from the previous one. The starting state is
/// computed from the source's current offset and is not reported.
pub fn watch<S, F>(source: &S, threshold: f64, on_change: F) -> Result<ScrollSubscription>
where
    S: ScrollSource + ?Sized,
    F: Fn(ScrollState) + 'static,
{
    let last = Cell::new(ScrollState::from_offset(source.offset(), threshold));
    source.subscribe(Rc::new(move |offset| {
        let next = ScrollState::from_offset(offset, threshold);
        if last.replace(next) != next {
            on_change(next);
        }
    }))
}
