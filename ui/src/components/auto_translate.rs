use dioxus::prelude::*;

use crate::core::platform;
use crate::translation::{BundleTranslator, Outcome, ProxyTranslator, Step, TranslationManager};
use crate::use_translation;

/// Ask the manager for `lang` (or a reset with `None`), running the fetch in
/// the background on a cache miss.
///
/// The signal is only borrowed around `begin` and `complete`, never across
/// the network call, so the page keeps rendering while a translation loads.
pub fn request_language(mut manager: Signal<TranslationManager>, lang: Option<String>) {
    let step = manager.write().begin(lang.as_deref());
    let Step::Fetch(ticket) = step else {
        return;
    };

    spawn(async move {
        let translator = ProxyTranslator::for_current_origin();
        let result = translator.translate(&ticket.source, &ticket.lang).await;
        let outcome = manager.write().complete(ticket, result);
        if let Outcome::Failed { message } = outcome {
            platform::alert(&message);
        }
    });
}

/// Free-form "translate this page" box next to the locale button.
#[component]
pub fn AutoTranslate() -> Element {
    let manager = use_translation();
    let mut draft = use_signal(String::new);

    let (active, loading, texts) = {
        let manager = manager.read();
        let bundle = manager.active_bundle();
        (
            manager.auto_lang().map(str::to_string),
            manager.is_loading(),
            (
                bundle.text("translator.label"),
                bundle.text("translator.placeholder"),
                bundle.text("translator.button"),
                bundle.text("translator.loading"),
                bundle.text("translator.reset"),
            ),
        )
    };
    let (label, placeholder, button, loading_text, reset) = texts;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let lang = draft().trim().to_string();
        if lang.is_empty() {
            return;
        }
        request_language(manager, Some(lang));
    };

    rsx! {
        form { class: "translator", onsubmit: on_submit,
            label { class: "visually-hidden", r#for: "translator-lang", "{label}" }
            input {
                id: "translator-lang",
                class: "translator__input",
                placeholder: "{placeholder}",
                value: "{draft}",
                disabled: loading,
                oninput: move |evt| draft.set(evt.value()),
            }
            button {
                class: "translator__button",
                r#type: "submit",
                disabled: loading,
                if loading { "{loading_text}" } else { "{button}" }
            }
            if let Some(lang) = active {
                button {
                    class: "translator__reset",
                    r#type: "button",
                    disabled: loading,
                    title: "{reset}",
                    onclick: move |_| {
                        draft.set(String::new());
                        request_language(manager, None);
                    },
                    "{reset} ({lang})"
                }
            }
        }
    }
}
