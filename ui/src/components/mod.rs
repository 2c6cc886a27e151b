mod auto_translate;
mod contact_form;
mod language_selector;
mod site_navbar;
mod site_shell;

pub use auto_translate::{request_language, AutoTranslate};
pub use contact_form::{ContactForm, SENT_RESET_MS};
pub use language_selector::LanguageSelector;
pub use site_navbar::{register_nav, site_link, NavBuilder, NavTarget, SiteNavbar};
pub use site_shell::SiteShell;
