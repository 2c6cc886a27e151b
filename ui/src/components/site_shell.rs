use dioxus::prelude::*;

use crate::components::SiteNavbar;
use crate::use_translation;

const SITE_CSS: Asset = asset!("/assets/styling/site.css");

/// Page chrome shared by every route. Sets `lang` and `dir` from the
/// language currently rendered, so an RTL auto-translation flips the layout
/// like the Arabic locale does.
#[component]
pub fn SiteShell(children: Element) -> Element {
    let manager = use_translation();

    let (lang, dir, rights) = {
        let manager = manager.read();
        (
            manager.active_lang().to_string(),
            manager.direction().as_attr(),
            manager.active_bundle().text("footer.rights"),
        )
    };

    rsx! {
        document::Link { rel: "stylesheet", href: SITE_CSS }

        div { class: "site", lang: "{lang}", dir: "{dir}",
            SiteNavbar {}
            main { class: "site__main", {children} }
            footer { class: "site__footer",
                p { "© Folio. {rights}" }
            }
        }
    }
}
