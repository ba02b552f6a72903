use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Services() -> Element {
    rsx! {
        section { class: "page page-services",
            h1 { {t!("services-title")} }
            p { {t!("services-intro")} }
        }
    }
}
