//! Navbar UI components.

pub mod icons;
mod navbar;

pub use navbar::Navbar;
