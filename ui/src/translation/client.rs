//! Client side of the Translation Gateway: posts the loaded bundle to the
//! site's own `/api/translate` proxy.

use api::wire::{ErrorBody, TranslateRequest};
use api::{MessageBundle, TranslateError};
use async_trait::async_trait;

use crate::core::platform;

/// Anything that turns a bundle into the same bundle in another language.
///
/// The manager treats implementations as opaque; term skip-lists and
/// provider choice live behind this seam.
#[async_trait(?Send)]
pub trait BundleTranslator {
    async fn translate(
        &self,
        bundle: &MessageBundle,
        target_lang: &str,
    ) -> Result<MessageBundle, TranslateError>;
}

pub struct ProxyTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl ProxyTranslator {
    /// `base` is the site origin, e.g. `https://example.com`.
    pub fn new(base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/translate", base.trim_end_matches('/')),
        }
    }

    pub fn for_current_origin() -> Self {
        Self::new(&platform::origin())
    }
}

#[async_trait(?Send)]
impl BundleTranslator for ProxyTranslator {
    async fn translate(
        &self,
        bundle: &MessageBundle,
        target_lang: &str,
    ) -> Result<MessageBundle, TranslateError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&TranslateRequest::new(target_lang, bundle.clone()))
            .send()
            .await
            .map_err(|err| TranslateError::Upstream(format!("request failed: {err}")))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| TranslateError::Upstream(format!("reading response: {err}")))?;

        if status == 503 {
            return Err(TranslateError::ServiceUnavailable);
        }
        if !(200..300).contains(&status) {
            let reason = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(TranslateError::Upstream(format!("proxy returned {status}: {reason}")));
        }

        let translated = MessageBundle::from_json(&body)
            .map_err(|err| TranslateError::Upstream(format!("malformed bundle: {err}")))?;
        if !bundle.same_shape(&translated) {
            return Err(TranslateError::Upstream(
                "translated bundle has a different structure".to_string(),
            ));
        }
        Ok(translated)
    }
}
