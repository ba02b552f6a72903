use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::platform::WindowScroll;
use crate::core::scroll::{self, ScrollSource, ScrollState, ScrollSubscription};

/// Track whether the viewport has scrolled past `threshold` px.
///
/// The scroll listener is registered on first render and removed when the
/// calling component unmounts.
pub fn use_scroll_state(threshold: f64) -> Signal<ScrollState> {
    use_scroll_state_from(&WindowScroll, threshold)
}

/// [`use_scroll_state`] over an arbitrary scroll source.
///
/// `source` is only read on the first render; later renders reuse the
/// subscription taken then.
pub fn use_scroll_state_from<S>(source: &S, threshold: f64) -> Signal<ScrollState>
where
    S: ScrollSource + ?Sized,
{
    let state = use_signal(|| ScrollState::from_offset(source.offset(), threshold));

    let subscription: Rc<RefCell<Option<ScrollSubscription>>> = use_hook(|| {
        let slot = Rc::new(RefCell::new(None));
        let watched = scroll::watch(source, threshold, move |next| {
            let mut state = state;
            if *state.peek() != next {
                state.set(next);
            }
        });
        match watched {
            Ok(sub) => {
                slot.borrow_mut().replace(sub);
            }
            Err(err) => {
                tracing::warn!(%err, "header will keep its top-of-page style");
            }
        }
        slot
    });

    use_drop(move || {
        subscription.borrow_mut().take();
    });

    state
}
