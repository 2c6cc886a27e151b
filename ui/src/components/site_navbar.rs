use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::components::{AutoTranslate, LanguageSelector};
use crate::use_translation;

/// Platform-supplied navigation links.
///
/// `ui` does not know the platform's `Route` enum, so the platform registers
/// one constructor per destination before rendering the root. Each receives
/// the current locale code, the localized label and the CSS class, and
/// returns a router `Link` whose only child is that label.
///
/// ```ignore
/// register_nav(NavBuilder {
///     home: |locale, label, class| rsx!( Link { class, to: Route::HomePage { locale: locale.into() }, "{label}" } ),
///     contact: |locale, label, class| rsx!( Link { class, to: Route::ContactPage { locale: locale.into() }, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub home: fn(locale: &str, label: &str, class: &str) -> Element,
    pub contact: fn(locale: &str, label: &str, class: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("navigation already registered");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Contact,
}

impl NavTarget {
    /// Path of this page under `locale`.
    pub fn href(self, locale: &str) -> String {
        match self {
            NavTarget::Home => format!("/{locale}"),
            NavTarget::Contact => format!("/{locale}/contact"),
        }
    }
}

/// In-app link to `target` through the registered router links. Without a
/// registration (tests, embedding) it degrades to a plain anchor.
pub fn site_link(target: NavTarget, locale: &str, label: &str, class: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(nav) => match target {
            NavTarget::Home => (nav.home)(locale, label, class),
            NavTarget::Contact => (nav.contact)(locale, label, class),
        },
        None => {
            let href = target.href(locale);
            rsx! {
                a { class: "{class}", href: "{href}", "{label}" }
            }
        }
    }
}

#[component]
pub fn SiteNavbar() -> Element {
    let manager = use_translation();

    let (locale, home_label, contact_label) = {
        let manager = manager.read();
        let bundle = manager.active_bundle();
        (
            manager.locale().as_str(),
            bundle.text("nav.home"),
            bundle.text("nav.contact"),
        )
    };

    let home = site_link(NavTarget::Home, locale, &home_label, "navbar__link");
    let contact = site_link(NavTarget::Contact, locale, &contact_label, "navbar__link");

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-spark", aria_hidden: "true" }
                    span { class: "navbar__brand-mark", "Folio" }
                }

                nav { class: "navbar__links",
                    {home}
                    {contact}
                }

                div { class: "navbar__locale",
                    LanguageSelector {}
                    AutoTranslate {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_stay_under_the_locale() {
        assert_eq!(NavTarget::Home.href("ar"), "/ar");
        assert_eq!(NavTarget::Contact.href("fr"), "/fr/contact");
    }
}
