use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            p { {t!("home-intro")} }
        }
    }
}
