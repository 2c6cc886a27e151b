use api::wire::ContactRequest;
use dioxus::prelude::*;

use crate::contact::ContactClient;
use crate::core::timing::sleep_ms;
use crate::use_translation;

/// How long the "sent" confirmation stays before the form is usable again.
pub const SENT_RESET_MS: u64 = 3_000;

#[derive(Clone, Debug, PartialEq)]
enum SendStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

struct Labels {
    name: String,
    email: String,
    message: String,
    send: String,
    sending: String,
    sent: String,
    failed: String,
}

#[component]
pub fn ContactForm() -> Element {
    let manager = use_translation();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut status = use_signal(|| SendStatus::Idle);

    let labels = {
        let manager = manager.read();
        let bundle = manager.active_bundle();
        Labels {
            name: bundle.text("contact.name"),
            email: bundle.text("contact.email"),
            message: bundle.text("contact.message"),
            send: bundle.text("contact.send"),
            sending: bundle.text("contact.sending"),
            sent: bundle.text("contact.sent"),
            failed: bundle.text("contact.failed"),
        }
    };

    let feedback = match status() {
        SendStatus::Idle => None,
        SendStatus::Sending => Some(("contact__status", labels.sending.clone())),
        SendStatus::Sent => Some(("contact__status contact__status--success", labels.sent.clone())),
        SendStatus::Failed(reason) => Some((
            "contact__status contact__status--error",
            format!("{} ({reason})", labels.failed),
        )),
    };
    let busy = matches!(status(), SendStatus::Sending | SendStatus::Sent);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy {
            return;
        }
        let request = ContactRequest {
            name: name(),
            email: email(),
            message: message(),
        };
        status.set(SendStatus::Sending);

        spawn(async move {
            match ContactClient::for_current_origin().send(&request).await {
                Ok(_) => {
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    status.set(SendStatus::Sent);
                    sleep_ms(SENT_RESET_MS).await;
                    status.set(SendStatus::Idle);
                }
                Err(err) => {
                    tracing::warn!("contact form: {err}");
                    status.set(SendStatus::Failed(err.to_string()));
                }
            }
        });
    };

    rsx! {
        form { class: "contact", onsubmit: on_submit,
            label { r#for: "contact-name", "{labels.name}" }
            input {
                id: "contact-name",
                value: "{name}",
                required: true,
                disabled: busy,
                oninput: move |evt| name.set(evt.value()),
            }
            label { r#for: "contact-email", "{labels.email}" }
            input {
                id: "contact-email",
                r#type: "email",
                value: "{email}",
                required: true,
                disabled: busy,
                oninput: move |evt| email.set(evt.value()),
            }
            label { r#for: "contact-message", "{labels.message}" }
            textarea {
                id: "contact-message",
                rows: "6",
                value: "{message}",
                required: true,
                disabled: busy,
                oninput: move |evt| message.set(evt.value()),
            }
            button { class: "contact__send", r#type: "submit", disabled: busy,
                "{labels.send}"
            }
            if let Some((class, text)) = feedback {
                p { class: "{class}", role: "status", "{text}" }
            }
        }
    }
}
