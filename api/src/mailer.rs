//! Contact relay: forwards contact form submissions to a transactional
//! email provider (Resend) and mirrors the provider's answer.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::wire::ContactRequest;

const SERVICE: &str = "Contact relay";
const ACTION: &str = "send message";

#[async_trait]
pub trait ContactRelay: Send + Sync {
    async fn send(&self, request: &ContactRequest) -> Result<Value, ProxyError>;
}

/// Email as posted to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
    pub reply_to: String,
}

impl OutgoingEmail {
    pub fn compose(request: &ContactRequest, from: &str, to: &str) -> Self {
        let name = request.name.trim();
        let email = request.email.trim();
        Self {
            from: from.to_string(),
            to: vec![to.to_string()],
            subject: format!("New Contact Form Submission from {name}"),
            text: format!(
                "Name: {name}\nEmail: {email}\nMessage: {}",
                request.message.trim()
            ),
            reply_to: email.to_string(),
        }
    }
}

pub struct ResendMailer {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    from: String,
    to: Option<String>,
}

impl ResendMailer {
    pub fn new(config: &ProxyConfig) -> Result<Self, ProxyError> {
        let client = Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .map_err(|err| ProxyError::Upstream {
                action: ACTION,
                detail: format!("http client: {err}"),
            })?;
        Ok(Self {
            client,
            endpoint: config.resend_url.clone(),
            api_key: config.resend_api_key.clone(),
            from: config.contact_from.clone(),
            to: config.contact_to.clone(),
        })
    }
}

#[async_trait]
impl ContactRelay for ResendMailer {
    async fn send(&self, request: &ContactRequest) -> Result<Value, ProxyError> {
        let (Some(api_key), Some(to)) = (self.api_key.as_deref(), self.to.as_deref()) else {
            return Err(ProxyError::Configuration { service: SERVICE });
        };

        let email = OutgoingEmail::compose(request, &self.from, to);
        let upstream = |detail: String| ProxyError::Upstream {
            action: ACTION,
            detail,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&email)
            .send()
            .await
            .map_err(|err| upstream(format!("request failed: {err}")))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(upstream(format!("provider returned {}: {body}", status.as_u16())));
        }

        tracing::info!(subject = %email.subject, "contact message relayed");
        serde_json::from_str(&body).map_err(|err| upstream(format!("malformed response: {err}")))
    }
}
