use dioxus::prelude::*;

use crate::components::{site_link, NavTarget};
use crate::use_translation;

#[component]
pub fn Home() -> Element {
    let manager = use_translation();
    let manager = manager.read();
    let bundle = manager.active_bundle();

    let skills = bundle.texts("skills.items");
    let cta = site_link(
        NavTarget::Contact,
        manager.locale().as_str(),
        &bundle.text("hero.cta"),
        "hero__cta",
    );

    rsx! {
        section { class: "page page-home",
            div { class: "hero",
                p { class: "hero__greeting", {bundle.text("hero.greeting")} }
                h1 { class: "hero__title", {bundle.text("hero.title")} }
                p { class: "hero__subtitle", {bundle.text("hero.subtitle")} }
                {cta}
            }

            section { class: "about",
                h2 { {bundle.text("about.title")} }
                p { {bundle.text("about.body")} }
            }

            section { class: "skills",
                h2 { {bundle.text("skills.title")} }
                ul { class: "skills__list",
                    for skill in skills {
                        li { key: "{skill}", "{skill}" }
                    }
                }
            }
        }
    }
}
