pub mod client;
pub mod manager;

pub use client::{BundleTranslator, ProxyTranslator};
pub use manager::{FetchTicket, Outcome, Step, TranslationManager, TRANSLATION_FAILED_ALERT};
