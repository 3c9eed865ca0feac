// src/lib.rs
//! ssl-monitor-client: client side of the certificate-monitoring dashboard API
//!
//! Features:
//! - RSA PKCS#1 v1.5 credential encryption for the login form
//! - Authenticated API client: `/api` prefixing, session-token header,
//!   `{code, msg, data}` envelope unwrapping
//! - Session storage with an injectable token provider
//! - TOML config with a dev proxy rule

pub mod aliases;
pub mod client;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod envelope;
pub mod session;

pub mod error;

#[cfg(feature = "cli")]
pub mod logging;

// Re-export everything users need at the crate root
pub use aliases::{Credential, SessionToken};
pub use client::{ApiClient, HttpTransport, RequestOptions, Transport};
pub use config::load as load_config;
pub use crypto::{decrypt_credential, encrypt_credential, CredentialEncryptor};
pub use envelope::ResponseEnvelope;
pub use error::{CoreError, Result as CoreResult};
pub use session::{SessionStore, StaticToken, TokenProvider};
