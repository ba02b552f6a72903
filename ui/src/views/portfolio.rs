use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Portfolio() -> Element {
    rsx! {
        section { class: "page page-portfolio",
            h1 { {t!("portfolio-title")} }
            p { {t!("portfolio-intro")} }
        }
    }
}
