//! Shared types and the server-side proxy for the Folio site.
//!
//! Always available (browser and server):
//! - [`bundle`]: nested message bundles
//! - [`wire`]: request/response bodies of the proxy routes
//! - [`error`]: error taxonomy
//!
//! With the `server` feature: the translation gateway, the contact relay,
//! configuration and the axum router mounted under `/api`.

pub mod bundle;
pub mod error;
pub mod wire;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod gateway;
#[cfg(feature = "server")]
pub mod mailer;
#[cfg(feature = "server")]
pub mod routes;

pub use bundle::{Message, MessageBundle};
pub use error::{ProxyError, TranslateError};

#[cfg(feature = "server")]
pub use config::ProxyConfig;
#[cfg(feature = "server")]
pub use routes::{router, ProxyState};
