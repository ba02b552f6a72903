//! Shared UI crate for the J&C Studios site: the navbar, its state model and
//! the pages it links to.

pub mod components;
pub mod config;
pub mod core;
pub mod error;
pub mod hooks;
pub mod i18n;
pub mod motion;
pub mod views;

pub use components::Navbar;
pub use error::UiError;
