use dioxus::prelude::*;
use tracing::Level;

use ui::config::SiteConfig;
use ui::views::{Contact, Home, Portfolio, Services};
use ui::Navbar;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/servicios")]
    Services {},
    #[route("/portafolio")]
    Portfolio {},
    #[route("/contacto")]
    Contact {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    tracing::info!("starting J&C Studios site");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(SiteConfig::embedded);
    ui::i18n::init(&config.locale);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Router layout placing the shared `Navbar` above every page.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        Navbar {}
        Outlet::<Route> {}
    }
}
