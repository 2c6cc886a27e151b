//! Error taxonomy for the translation gateway and the proxy routes.

use thiserror::Error;

/// Failure of a bundle-to-bundle translation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// No provider credential is configured.
    #[error("translation service not configured")]
    ServiceUnavailable,
    /// The provider call failed or returned content that is not an equivalent bundle.
    #[error("translation upstream failed: {0}")]
    Upstream(String),
}

/// Failure of a proxy route. Every variant maps to one HTTP status.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// A provider credential is missing; the feature is disabled (503).
    #[error("{service} not configured")]
    Configuration { service: &'static str },
    /// The client sent a malformed request (400).
    #[error("{0}")]
    Validation(String),
    /// The provider call failed (500). `detail` is logged, never returned.
    #[error("failed to {action}: {detail}")]
    Upstream { action: &'static str, detail: String },
}

impl ProxyError {
    pub fn status_code(&self) -> u16 {
        match self {
            ProxyError::Configuration { .. } => 503,
            ProxyError::Validation(_) => 400,
            ProxyError::Upstream { .. } => 500,
        }
    }

    /// Message safe to hand back to the browser.
    pub fn public_message(&self) -> String {
        match self {
            ProxyError::Configuration { service } => format!("{service} not configured"),
            ProxyError::Validation(message) => message.clone(),
            ProxyError::Upstream { action, .. } => format!("Failed to {action}"),
        }
    }
}

impl From<TranslateError> for ProxyError {
    fn from(err: TranslateError) -> Self {
        match err {
            TranslateError::ServiceUnavailable => ProxyError::Configuration {
                service: "Translation service",
            },
            TranslateError::Upstream(detail) => ProxyError::Upstream {
                action: "translate content",
                detail,
            },
        }
    }
}

#[cfg(feature = "server")]
mod response {
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    use super::ProxyError;
    use crate::wire::ErrorBody;

    impl IntoResponse for ProxyError {
        fn into_response(self) -> Response {
            let status =
                StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            match &self {
                ProxyError::Upstream { .. } => tracing::error!(error = %self, "proxy upstream failure"),
                ProxyError::Configuration { .. } => tracing::warn!(error = %self, "proxy feature disabled"),
                ProxyError::Validation(_) => tracing::debug!(error = %self, "rejected proxy request"),
            }
            let body = ErrorBody {
                error: self.public_message(),
            };
            (status, Json(body)).into_response()
        }
    }
}
