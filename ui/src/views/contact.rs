use dioxus::prelude::*;

use crate::components::ContactForm;
use crate::use_translation;

#[component]
pub fn Contact() -> Element {
    let manager = use_translation();
    let (title, intro) = {
        let manager = manager.read();
        let bundle = manager.active_bundle();
        (bundle.text("contact.title"), bundle.text("contact.intro"))
    };

    rsx! {
        section { class: "page page-contact",
            h1 { "{title}" }
            p { "{intro}" }
            ContactForm {}
        }
    }
}
