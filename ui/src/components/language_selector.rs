use dioxus::prelude::*;

use crate::core::platform;
use crate::use_translation;

/// Cycles through the server locales. Each press is a full navigation to the
/// same page under the next locale.
#[component]
pub fn LanguageSelector() -> Element {
    let mut manager = use_translation();

    let (current, label) = {
        let manager = manager.read();
        (manager.locale(), manager.active_bundle().text("nav.language"))
    };
    let next = current.next();

    let on_click = move |_| {
        let target = manager
            .write()
            .switch_locale(next, &platform::current_path());
        platform::navigate(&target);
    };

    rsx! {
        button {
            class: "navbar__locale-button",
            r#type: "button",
            title: "{label}",
            aria_label: "{label}: {next.label()}",
            onclick: on_click,
            span { aria_hidden: "true", "{current.flag()}" }
            " {current.label()}"
        }
    }
}
