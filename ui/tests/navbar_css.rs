//! Ensures the navbar stylesheet keeps the selectors the component renders.
//!
//! If you rename a class in `components/navbar.rs` or `core/*.rs`, update
//! `REQUIRED_SELECTORS` here as well.

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar--top",
    ".navbar--scrolled",
    ".navbar__particle",
    ".navbar__scan-beam",
    ".navbar__float-icon",
    ".navbar__brand",
    ".navbar__logo",
    ".navbar__links",
    ".navbar__link",
    ".navbar__link--active",
    ".navbar__link-underline",
    ".navbar__cta",
    ".navbar__toggle",
    ".navbar__toggle-icon--open",
    ".navbar__mobile--open",
    ".navbar__mobile--closed",
    ".navbar__mobile-scan",
    ".navbar__mobile-glow",
    ".navbar__mobile-link",
    ".navbar__mobile-cta",
    "@media (min-width: 1024px)",
];

#[test]
fn stylesheet_contains_rendered_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !NAVBAR_CSS.contains(*sel))
        .collect();
    assert!(
        missing.is_empty(),
        "navbar.css is missing selectors: {missing:?}"
    );
}

#[test]
fn scrolled_style_is_opaque_and_blurred() {
    let block = NAVBAR_CSS
        .split(".navbar--scrolled {")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .expect(".navbar--scrolled block");
    assert!(block.contains("background: var(--navbar-bg)"));
    assert!(block.contains("backdrop-filter"));
}

#[test]
fn desktop_breakpoint_hides_mobile_controls() {
    let desktop = NAVBAR_CSS
        .split("@media (min-width: 1024px)")
        .nth(1)
        .expect("desktop breakpoint");
    assert!(desktop.contains(".navbar__toggle"));
    assert!(desktop.contains("display: none"));
}

#[test]
fn closed_mobile_panel_is_not_focusable() {
    let block = NAVBAR_CSS
        .split(".navbar__mobile--closed {")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .expect(".navbar__mobile--closed block");
    assert!(block.contains("max-height: 0"));
    assert!(block.contains("visibility: hidden"));
}
