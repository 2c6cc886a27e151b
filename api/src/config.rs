//! Proxy configuration read from the process environment.
//!
//! Credentials are optional: a missing key disables the matching route
//! (it answers 503) instead of failing startup.

use std::time::Duration;

pub const DEFAULT_TRANSLATE_URL: &str = "https://translation.googleapis.com/language/translate/v2";
pub const DEFAULT_RESEND_URL: &str = "https://api.resend.com/emails";
pub const DEFAULT_CONTACT_FROM: &str = "Contact Form <onboarding@resend.dev>";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// `GOOGLE_TRANSLATE_API_KEY`
    pub translate_api_key: Option<String>,
    /// `GOOGLE_TRANSLATE_URL`
    pub translate_url: String,
    /// `RESEND_API_KEY`
    pub resend_api_key: Option<String>,
    /// `RESEND_API_URL`
    pub resend_url: String,
    /// `CONTACT_TO`: inbox receiving contact form submissions.
    pub contact_to: Option<String>,
    /// `CONTACT_FROM`
    pub contact_from: String,
    /// `UPSTREAM_TIMEOUT_SECS`: applies to every outbound provider request.
    pub upstream_timeout: Duration,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            translate_api_key: None,
            translate_url: DEFAULT_TRANSLATE_URL.to_string(),
            resend_api_key: None,
            resend_url: DEFAULT_RESEND_URL.to_string(),
            contact_to: None,
            contact_from: DEFAULT_CONTACT_FROM.to_string(),
            upstream_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ProxyConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let upstream_timeout = match read("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(value = %raw, "ignoring invalid UPSTREAM_TIMEOUT_SECS");
                    defaults.upstream_timeout
                }
            },
            None => defaults.upstream_timeout,
        };

        Self {
            translate_api_key: read("GOOGLE_TRANSLATE_API_KEY"),
            translate_url: read("GOOGLE_TRANSLATE_URL").unwrap_or(defaults.translate_url),
            resend_api_key: read("RESEND_API_KEY"),
            resend_url: read("RESEND_API_URL").unwrap_or(defaults.resend_url),
            contact_to: read("CONTACT_TO"),
            contact_from: read("CONTACT_FROM").unwrap_or(defaults.contact_from),
            upstream_timeout,
        }
    }
}
