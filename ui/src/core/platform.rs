//! Viewport scroll source for the current platform.
//!
//! On wasm32 this listens to `scroll` events on the browser window. Other
//! targets have no viewport to observe, so the offset reads as zero and the
//! subscription is inert.

use super::scroll::{ScrollHandler, ScrollSource, ScrollSubscription};
use crate::error::Result;

/// The browser window's vertical scroll position.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowScroll;

#[cfg(target_arch = "wasm32")]
impl ScrollSource for WindowScroll {
    fn offset(&self) -> f64 {
        web_sys::window()
            .and_then(|win| win.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn subscribe(&self, handler: ScrollHandler) -> Result<ScrollSubscription> {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        use crate::error::UiError;

        let window =
            web_sys::window().ok_or_else(|| UiError::Listener("no browser window".to_string()))?;

        let callback = Closure::<dyn Fn()>::new(move || {
            let offset = web_sys::window()
                .and_then(|win| win.scroll_y().ok())
                .unwrap_or(0.0);
            handler(offset);
        });
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(|err| UiError::Listener(format!("{err:?}")))?;
        tracing::debug!("scroll listener registered");

        Ok(ScrollSubscription::new(move || {
            if let Err(err) = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                tracing::warn!(?err, "failed to remove scroll listener");
            } else {
                tracing::debug!("scroll listener removed");
            }
            drop(callback);
        }))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ScrollSource for WindowScroll {
    fn offset(&self) -> f64 {
        0.0
    }

    fn subscribe(&self, _handler: ScrollHandler) -> Result<ScrollSubscription> {
        tracing::debug!("no viewport on this target; scroll listener not registered");
        Ok(ScrollSubscription::inert())
    }
}
