//! Thin wrappers over the host environment: blocking alerts, full page
//! navigation, the current path and the site origin.
//!
//! On native targets there is no browser to drive, so these log instead.

/// Origin used for API calls when not running in a browser.
pub const NATIVE_ORIGIN: &str = "http://127.0.0.1:8080";

/// Show a blocking, user-visible message.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_ok() {
                return;
            }
        }
    }
    tracing::warn!(message, "alert");
}

/// Full navigation to `path` (fresh server render).
pub fn navigate(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().assign(path) {
                tracing::warn!(path, "navigation failed: {err:?}");
            }
            return;
        }
    }
    tracing::info!(path, "navigation requested outside a browser");
}

/// Scheme + host the page was served from; API routes live under it.
pub fn origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }
    std::env::var("FOLIO_ORIGIN").unwrap_or_else(|_| NATIVE_ORIGIN.to_string())
}

/// Path of the page being shown, `/` outside a browser.
pub fn current_path() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(path) = web_sys::window().and_then(|w| w.location().pathname().ok()) {
            return path;
        }
    }
    "/".to_string()
}
