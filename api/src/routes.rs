//! Axum routes for the internal proxy. Mount under `/api`:
//!
//! - `POST /translate`     `{ targetLang, content }` → translated bundle
//! - `POST /contact-send`  `{ name, email, message }` → provider response

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use crate::bundle::MessageBundle;
use crate::config::ProxyConfig;
use crate::error::{ProxyError, TranslateError};
use crate::gateway::{ensure_same_shape, GoogleTranslate, TranslationGateway};
use crate::mailer::{ContactRelay, ResendMailer};
use crate::wire::{ContactRequest, TranslateRequest};

#[derive(Clone)]
pub struct ProxyState {
    pub gateway: Arc<dyn TranslationGateway>,
    pub relay: Arc<dyn ContactRelay>,
}

impl ProxyState {
    pub fn new(gateway: Arc<dyn TranslationGateway>, relay: Arc<dyn ContactRelay>) -> Self {
        Self { gateway, relay }
    }

    /// Wire the production providers. Missing credentials are not an error
    /// here; the affected route answers 503 until they are configured.
    pub fn from_config(config: &ProxyConfig) -> Result<Self, ProxyError> {
        let gateway = GoogleTranslate::new(config)?;
        if !gateway.is_configured() {
            tracing::warn!("GOOGLE_TRANSLATE_API_KEY not set; /api/translate disabled");
        }
        let relay = ResendMailer::new(config)?;
        Ok(Self::new(Arc::new(gateway), Arc::new(relay)))
    }
}

pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route("/translate", post(translate))
        .route("/contact-send", post(contact_send))
        .with_state(state)
}

pub async fn translate(
    State(state): State<ProxyState>,
    body: Bytes,
) -> Result<Json<MessageBundle>, ProxyError> {
    if !state.gateway.is_configured() {
        return Err(TranslateError::ServiceUnavailable.into());
    }
    let (target_lang, content) = TranslateRequest::parse(&body)?;
    let translated = state.gateway.translate(&content, &target_lang).await?;
    let translated = ensure_same_shape(&content, translated)?;
    tracing::info!(target_lang = %target_lang, "bundle translated");
    Ok(Json(translated))
}

pub async fn contact_send(
    State(state): State<ProxyState>,
    body: Bytes,
) -> Result<Json<Value>, ProxyError> {
    let request = ContactRequest::parse(&body)?;
    let provider_response = state.relay.send(&request).await?;
    Ok(Json(provider_response))
}
