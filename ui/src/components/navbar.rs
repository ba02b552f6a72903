use dioxus::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::config::SiteConfig;
use crate::core::menu::MenuState;
use crate::core::nav::nav_items;
use crate::hooks::use_scroll_state;
use crate::motion::effects;
use crate::{i18n, t};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const LOGO: Asset = asset!("/assets/logo.svg");

/// Site header: logo, desktop link row, call-to-action, and a mobile menu
/// toggle revealing a vertical link list.
///
/// Reads `SiteConfig` from context when a parent provides one, otherwise the
/// bundled `site.toml`. Must be rendered inside a `Router`.
#[component]
pub fn Navbar() -> Element {
    let config = use_hook(|| try_consume_context::<SiteConfig>().unwrap_or_else(SiteConfig::embedded));
    i18n::init(&config.locale);

    let scroll = use_scroll_state(config.scroll_threshold_px);
    let mut menu = use_signal(MenuState::default);

    let motion_css = use_hook(|| match effects::stylesheet() {
        Ok(css) => css,
        Err(err) => {
            tracing::error!(%err, "navbar animations disabled");
            String::new()
        }
    });

    let menu_state = menu();
    let header_class = scroll().header_class();
    let items = nav_items();
    let cta_label = t!("nav-cta");
    let toggle_label = if menu_state.is_open() {
        t!("nav-menu-close")
    } else {
        t!("nav-menu-open")
    };
    let toggle_glyph = if menu_state.is_open() {
        Glyph::Close
    } else {
        Glyph::Menu
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        document::Style { "{motion_css}" }

        nav {
            id: "navbar",
            class: "{header_class}",
            style: "{effects::header_entrance().style()}",
            aria_label: t!("nav-label"),

            div { class: "navbar__effects", aria_hidden: "true",
                for (i, layer) in effects::particles().into_iter().enumerate() {
                    div { key: "particle-{i}", class: "navbar__particle", style: "{layer.style()}" }
                }
                div { class: "navbar__scan-beam", style: "{effects::scan_beam().style()}" }
                for (i, (glyph, layer)) in effects::floating_icons().into_iter().enumerate() {
                    div { key: "float-{i}", class: "navbar__float-icon", style: "{layer.style()}",
                        Icon { glyph: glyph, size: 16 }
                    }
                }
            }

            div { class: "navbar__inner",
                div { class: "navbar__bar",
                    Link {
                        to: "/",
                        class: "navbar__brand",
                        onclick: move |_| menu.set(menu_state.after_navigation()),
                        span { class: "navbar__logo", style: "{effects::logo_glow().style()}",
                            img { class: "navbar__logo-img", src: LOGO, alt: t!("nav-logo-alt") }
                            span { class: "navbar__logo-ring" }
                        }
                        span { class: "navbar__brand-mark", "{config.brand}" }
                    }

                    div { class: "navbar__links",
                        for (index, item) in items.iter().enumerate() {
                            div {
                                key: "{item.href}",
                                class: "navbar__link-wrap",
                                style: "{effects::desktop_link_entrance(index).style()}",
                                Link {
                                    to: item.href,
                                    class: "navbar__link",
                                    active_class: "navbar__link--active",
                                    onclick: move |_| menu.set(menu_state.after_navigation()),
                                    span { class: "navbar__link-glow" }
                                    span { class: "navbar__link-label", "{item.name}" }
                                    span { class: "navbar__link-underline" }
                                }
                            }
                        }
                        div { class: "navbar__cta-wrap", style: "{effects::cta_entrance().style()}",
                            Link {
                                to: config.cta_href.clone(),
                                class: "navbar__cta",
                                span { class: "navbar__cta-spark", style: "left: 30%; top: 40%;" }
                                span { class: "navbar__cta-spark", style: "left: 70%; top: 40%;" }
                                span { class: "navbar__cta-label", "{cta_label}" }
                            }
                        }
                    }

                    button {
                        r#type: "button",
                        class: "navbar__toggle",
                        aria_controls: "navbar-mobile",
                        aria_expanded: "{menu_state.is_open()}",
                        aria_label: "{toggle_label}",
                        onclick: move |_| {
                            let next = menu.peek().toggled();
                            menu.set(next);
                        },
                        span { class: "{menu_state.icon_class()}",
                            Icon { glyph: toggle_glyph, size: 24 }
                        }
                    }
                }

                div {
                    id: "navbar-mobile",
                    class: "{menu_state.panel_class()}",
                    aria_hidden: "{!menu_state.is_open()}",

                    div { class: "navbar__mobile-effects", aria_hidden: "true",
                        for (i, layer) in effects::mobile_scan_lines().into_iter().enumerate() {
                            div { key: "scan-{i}", class: "navbar__mobile-scan", style: "{layer.style()}" }
                        }
                        div { class: "navbar__mobile-glow", style: "{effects::mobile_glow().style()}" }
                    }

                    div { class: "navbar__mobile-links",
                        for (index, item) in items.iter().enumerate() {
                            div {
                                key: "{item.href}",
                                class: "navbar__mobile-item",
                                style: "transition-delay: {effects::mobile_item_delay_ms(index)}ms;",
                                Link {
                                    to: item.href,
                                    class: "navbar__mobile-link",
                                    active_class: "navbar__link--active",
                                    onclick: move |_| menu.set(menu_state.after_navigation()),
                                    "{item.name}"
                                }
                            }
                        }
                        div { class: "navbar__mobile-cta-wrap",
                            Link {
                                to: config.cta_href.clone(),
                                class: "navbar__mobile-cta",
                                onclick: move |_| menu.set(menu_state.after_navigation()),
                                "{cta_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
