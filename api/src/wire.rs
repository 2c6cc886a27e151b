//! Request and response bodies shared by the proxy routes and the browser client.

use serde::{Deserialize, Serialize};

use crate::bundle::MessageBundle;
use crate::error::ProxyError;

/// Body of `POST /api/translate`.
///
/// Both fields default so that a missing field surfaces as a validation
/// error with a readable message instead of a deserializer rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    #[serde(default)]
    pub target_lang: String,
    #[serde(default)]
    pub content: Option<MessageBundle>,
}

impl TranslateRequest {
    pub fn new(target_lang: impl Into<String>, content: MessageBundle) -> Self {
        Self {
            target_lang: target_lang.into(),
            content: Some(content),
        }
    }

    /// Parse a raw body, returning the trimmed target language and the bundle.
    pub fn parse(body: &[u8]) -> Result<(String, MessageBundle), ProxyError> {
        let request: TranslateRequest = serde_json::from_slice(body)
            .map_err(|err| ProxyError::Validation(format!("Invalid request body: {err}")))?;
        let target = request.target_lang.trim().to_string();
        match (target.is_empty(), request.content) {
            (false, Some(content)) => Ok((target, content)),
            _ => Err(ProxyError::Validation(
                "Missing targetLang or content".to_string(),
            )),
        }
    }
}

/// Body of `POST /api/contact-send`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactRequest {
    pub fn parse(body: &[u8]) -> Result<Self, ProxyError> {
        let request: ContactRequest = serde_json::from_slice(body)
            .map_err(|err| ProxyError::Validation(format!("Invalid request body: {err}")))?;
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), ProxyError> {
        let missing: Vec<&str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ProxyError::Validation(format!(
                "Missing {}",
                missing.join(", ")
            )));
        }
        if !self.email.contains('@') {
            return Err(ProxyError::Validation(
                "email must be an address".to_string(),
            ));
        }
        Ok(())
    }
}

/// Error body returned by every failing proxy route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
