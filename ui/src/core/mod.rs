//! Framework-independent navbar model: navigation sections, menu and scroll
//! state, and the viewport scroll source.

pub mod menu;
pub mod nav;
pub mod platform;
pub mod scroll;
