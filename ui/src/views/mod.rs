//! Route targets for the navbar's four sections.

mod contact;
mod home;
mod portfolio;
mod services;

pub use contact::Contact;
pub use home::Home;
pub use portfolio::Portfolio;
pub use services::Services;
