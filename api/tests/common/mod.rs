//! Test helpers: a throwaway HTTP upstream standing in for the providers.
#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;

use tiny_http::{Header, Response, Server};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub url: String,
    pub body: String,
    pub authorization: Option<String>,
}

pub struct MockUpstream {
    pub url: String,
    server: Arc<Server>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockUpstream {
    /// Serve every request with `respond(request) -> (status, json body)`.
    pub fn start<F>(respond: F) -> Self
    where
        F: Fn(&Recorded) -> (u16, String) + Send + 'static,
    {
        let server = Arc::new(Server::http("127.0.0.1:0").unwrap());
        let addr = server.server_addr().to_ip().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let worker = server.clone();
        let log = requests.clone();
        thread::spawn(move || {
            for mut request in worker.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let recorded = Recorded {
                    url: request.url().to_string(),
                    body,
                    authorization: request
                        .headers()
                        .iter()
                        .find(|h| h.field.equiv("Authorization"))
                        .map(|h| h.value.to_string()),
                };
                let (status, reply) = respond(&recorded);
                log.lock().unwrap().push(recorded);

                let header =
                    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
                let response = Response::from_string(reply)
                    .with_status_code(status)
                    .with_header(header);
                let _ = request.respond(response);
            }
        });

        Self {
            url: format!("http://{addr}"),
            server,
            requests,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.server.unblock();
    }
}

/// Google Translate v2 look-alike: prefixes every `q` with `[target]`,
/// except "Hi" which becomes "Ciao".
pub fn google_like(request: &Recorded) -> (u16, String) {
    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    let q = body["q"].as_str().unwrap_or_default();
    let target = body["target"].as_str().unwrap_or_default();
    let translated = match q {
        "Hi" => "Ciao".to_string(),
        other => format!("[{target}] {other}"),
    };
    let reply = serde_json::json!({
        "data": { "translations": [ { "translatedText": translated } ] }
    });
    (200, reply.to_string())
}
