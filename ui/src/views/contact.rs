use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { class: "page page-contact",
            h1 { {t!("contact-title")} }
            p { {t!("contact-intro")} }
        }
    }
}
