//! Translation Gateway: turns one [`MessageBundle`] into an equivalent
//! bundle in another language.
//!
//! The shipped provider walks the bundle and issues one Google Translate v2
//! request per text leaf. Leaves are independent, so the requests fan out
//! concurrently with no ordering between them. Whatever the provider, the
//! result is checked with [`ensure_same_shape`] before it leaves the gateway.

use async_trait::async_trait;
use futures::future::{try_join_all, BoxFuture};
use futures::FutureExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::bundle::{Message, MessageBundle};
use crate::config::ProxyConfig;
use crate::error::TranslateError;

/// Terms that are sent back verbatim whatever the target language.
pub const SKIP_TERMS: &[&str] = &[
    "CLASSIFIED",
    "Cisco Modeling Labs",
    "Docker",
    "GitHub",
    "LinkedIn",
];

#[async_trait]
pub trait TranslationGateway: Send + Sync {
    /// Whether a provider credential is present. Unconfigured gateways
    /// answer every call with [`TranslateError::ServiceUnavailable`].
    fn is_configured(&self) -> bool;

    async fn translate(
        &self,
        bundle: &MessageBundle,
        target_lang: &str,
    ) -> Result<MessageBundle, TranslateError>;
}

/// Reject a provider result whose keys or nesting differ from the source.
pub fn ensure_same_shape(
    source: &MessageBundle,
    translated: MessageBundle,
) -> Result<MessageBundle, TranslateError> {
    if source.same_shape(&translated) {
        Ok(translated)
    } else {
        Err(TranslateError::Upstream(
            "provider returned a bundle with a different structure".to_string(),
        ))
    }
}

pub fn is_skip_term(text: &str) -> bool {
    SKIP_TERMS.contains(&text)
}

/// Google Cloud Translation (v2, basic) provider.
pub struct GoogleTranslate {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct GoogleRequest<'a> {
    q: &'a str,
    target: &'a str,
    format: &'static str,
}

#[derive(Deserialize)]
struct GoogleResponse {
    data: GoogleData,
}

#[derive(Deserialize)]
struct GoogleData {
    translations: Vec<GoogleTranslation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleTranslation {
    translated_text: String,
}

impl GoogleTranslate {
    pub fn new(config: &ProxyConfig) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .map_err(|err| TranslateError::Upstream(format!("http client: {err}")))?;
        Ok(Self {
            client,
            endpoint: config.translate_url.clone(),
            api_key: config.translate_api_key.clone(),
        })
    }

    fn translate_node<'a>(
        &'a self,
        api_key: &'a str,
        node: &'a Message,
        target: &'a str,
    ) -> BoxFuture<'a, Result<Message, TranslateError>> {
        async move {
            match node {
                Message::Text(text) => self
                    .translate_text(api_key, text, target)
                    .await
                    .map(Message::Text),
                Message::List(items) => {
                    let translated = try_join_all(
                        items
                            .iter()
                            .map(|item| self.translate_node(api_key, item, target)),
                    )
                    .await?;
                    Ok(Message::List(translated))
                }
                Message::Group(group) => self
                    .translate_group(api_key, group, target)
                    .await
                    .map(Message::Group),
            }
        }
        .boxed()
    }

    async fn translate_group(
        &self,
        api_key: &str,
        group: &MessageBundle,
        target: &str,
    ) -> Result<MessageBundle, TranslateError> {
        let pending = group.iter().map(|(key, node)| async move {
            let translated = self.translate_node(api_key, node, target).await?;
            Ok::<_, TranslateError>((key.clone(), translated))
        });
        Ok(try_join_all(pending).await?.into_iter().collect())
    }

    async fn translate_text(
        &self,
        api_key: &str,
        text: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        if is_skip_term(text) || text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .json(&GoogleRequest {
                q: text,
                target,
                format: "text",
            })
            .send()
            .await
            .map_err(|err| TranslateError::Upstream(format!("request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Upstream(format!(
                "Google Translate API error: {}",
                status.as_u16()
            )));
        }

        let body: GoogleResponse = response
            .json()
            .await
            .map_err(|err| TranslateError::Upstream(format!("malformed response: {err}")))?;
        body.data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| TranslateError::Upstream("response carried no translation".to_string()))
    }
}

#[async_trait]
impl TranslationGateway for GoogleTranslate {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn translate(
        &self,
        bundle: &MessageBundle,
        target_lang: &str,
    ) -> Result<MessageBundle, TranslateError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(TranslateError::ServiceUnavailable);
        };
        tracing::info!(
            target_lang,
            leaves = bundle.leaf_count(),
            "translating bundle"
        );
        let translated = self.translate_group(api_key, bundle, target_lang).await?;
        ensure_same_shape(bundle, translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_terms_match_exact_leaves_only() {
        assert!(is_skip_term("Docker"));
        assert!(is_skip_term("Cisco Modeling Labs"));
        assert!(!is_skip_term("docker"));
        assert!(!is_skip_term("I ship Docker images"));
    }

    #[test]
    fn shape_guard_rejects_restructured_output() {
        let source = MessageBundle::new().with("hero", MessageBundle::new().with("title", "Hi"));
        let good = MessageBundle::new().with("hero", MessageBundle::new().with("title", "Ciao"));
        let bad = MessageBundle::new().with("hero", "Ciao");
        assert_eq!(ensure_same_shape(&source, good.clone()), Ok(good));
        assert!(matches!(
            ensure_same_shape(&source, bad),
            Err(TranslateError::Upstream(_))
        ));
    }

    #[tokio::test]
    async fn missing_key_is_service_unavailable() {
        let gateway = GoogleTranslate::new(&ProxyConfig::default()).unwrap();
        assert!(!gateway.is_configured());
        let result = gateway
            .translate(&MessageBundle::new().with("a", "b"), "es")
            .await;
        assert_eq!(result, Err(TranslateError::ServiceUnavailable));
    }
}
