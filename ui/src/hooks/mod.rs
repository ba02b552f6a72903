mod use_scroll_state;

pub use use_scroll_state::{use_scroll_state, use_scroll_state_from};
