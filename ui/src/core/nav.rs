//! Navigation destinations.

use crate::t;

/// A site section reachable from the navbar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Inicio,
    Servicios,
    Portafolio,
    Contacto,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Inicio,
        Section::Servicios,
        Section::Portafolio,
        Section::Contacto,
    ];

    pub const fn href(self) -> &'static str {
        match self {
            Section::Inicio => "/",
            Section::Servicios => "/servicios",
            Section::Portafolio => "/portafolio",
            Section::Contacto => "/contacto",
        }
    }

    /// Localized label. Requires `i18n::init` to have run.
    pub fn label(self) -> String {
        match self {
            Section::Inicio => t!("nav-inicio"),
            Section::Servicios => t!("nav-servicios"),
            Section::Portafolio => t!("nav-portafolio"),
            Section::Contacto => t!("nav-contacto"),
        }
    }
}

/// One rendered navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub name: String,
    pub href: &'static str,
}

impl From<Section> for NavItem {
    fn from(section: Section) -> Self {
        Self {
            name: section.label(),
            href: section.href(),
        }
    }
}

/// The navbar's links, always in `Section::ALL` order.
pub fn nav_items() -> Vec<NavItem> {
    Section::ALL.into_iter().map(NavItem::from).collect()
}
