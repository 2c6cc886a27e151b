//! Browser side of the contact relay.

use api::wire::{ContactRequest, ErrorBody};
use thiserror::Error;

use crate::core::platform;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0}")]
    Invalid(String),
    #[error("contact relay returned {status}: {reason}")]
    Rejected { status: u16, reason: String },
    #[error("contact request failed: {0}")]
    Transport(String),
}

pub struct ContactClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/contact-send", base.trim_end_matches('/')),
        }
    }

    pub fn for_current_origin() -> Self {
        Self::new(&platform::origin())
    }

    /// Validate locally, then post. Returns the provider's reply on success.
    pub async fn send(&self, request: &ContactRequest) -> Result<serde_json::Value, ContactError> {
        request
            .validate()
            .map_err(|err| ContactError::Invalid(err.public_message()))?;

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|err| ContactError::Transport(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| ContactError::Transport(err.to_string()))?;

        if !(200..300).contains(&status) {
            let reason = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(ContactError::Rejected { status, reason });
        }

        serde_json::from_str(&body).map_err(|err| ContactError::Transport(err.to_string()))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::io::Read;
    use std::thread;
    use tiny_http::{Response, Server};

    fn serve_once(status: u16, body: &'static str) -> (String, thread::JoinHandle<String>) {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let handle = thread::spawn(move || {
            let mut request = server.recv().unwrap();
            let mut received = String::new();
            request.as_reader().read_to_string(&mut received).unwrap();
            let _ = request.respond(Response::from_string(body).with_status_code(status));
            received
        });
        (format!("http://{addr}"), handle)
    }

    fn filled() -> ContactRequest {
        ContactRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
        }
    }

    #[tokio::test]
    async fn posts_the_form() {
        let (base, handle) = serve_once(200, r#"{"id":"email_1"}"#);
        let reply = ContactClient::new(&base).send(&filled()).await.unwrap();
        assert_eq!(reply["id"], "email_1");

        let sent: ContactRequest = serde_json::from_str(&handle.join().unwrap()).unwrap();
        assert_eq!(sent, filled());
    }

    #[tokio::test]
    async fn blank_fields_never_leave_the_browser() {
        // nothing listens here; a request would fail with Transport
        let client = ContactClient::new("http://127.0.0.1:9");
        let request = ContactRequest {
            message: "  ".into(),
            ..filled()
        };
        assert_eq!(
            client.send(&request).await,
            Err(ContactError::Invalid("Missing message".into()))
        );
    }

    #[tokio::test]
    async fn relay_error_is_surfaced() {
        let (base, handle) = serve_once(503, r#"{"error":"Contact relay not configured"}"#);
        let result = ContactClient::new(&base).send(&filled()).await;
        assert_eq!(
            result,
            Err(ContactError::Rejected {
                status: 503,
                reason: "Contact relay not configured".into()
            })
        );
        handle.join().unwrap();
    }
}
