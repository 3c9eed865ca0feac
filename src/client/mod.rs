// src/client/mod.rs
//! Authenticated API client
//!
//! Every call goes out under the API prefix with the session token as its
//! `Authorization` header. `request` absorbs every failure into `None`;
//! `try_request` keeps the error for callers that need to tell causes apart.

mod request;
mod transport;

pub use request::{normalize_path, prepare, PreparedRequest, RequestOptions};
pub use transport::{decode_body, HttpTransport, Transport};

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::envelope::ResponseEnvelope;
use crate::error::Result;
use crate::session::TokenProvider;

#[derive(Clone)]
pub struct ApiClient {
    prefix: String,
    tokens: Arc<dyn TokenProvider>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(
        prefix: impl Into<String>,
        tokens: Arc<dyn TokenProvider>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            tokens,
            transport,
        }
    }

    /// reqwest-backed client for the configured origin, prefix and proxy
    pub fn from_config(config: &Config, tokens: Arc<dyn TokenProvider>) -> Self {
        let transport = HttpTransport::from_config(&config.api, config.proxy.as_ref());
        Self::new(config.api.prefix.clone(), tokens, Arc::new(transport))
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Raw JSON body, no envelope shape check; an empty 2xx body is `Null`
    pub async fn try_request_value(&self, path: &str, options: RequestOptions) -> Result<Value> {
        let prepared = prepare(&self.prefix, path, options, self.tokens.token())?;
        self.transport.send(prepared).await
    }

    pub async fn try_request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ResponseEnvelope<T>> {
        let body = self.try_request_value(path, options).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Envelope on success, `None` on any failure (logged, never raised).
    ///
    /// Decoding into `ResponseEnvelope<T>` is the only place the envelope
    /// shape is checked: a 2xx body that does not fit is `None` here. Use
    /// [`ApiClient::request_value`] to get such a body as-is.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Option<ResponseEnvelope<T>> {
        match self.try_request(path, options).await {
            Ok(envelope) => Some(envelope),
            Err(e) => {
                tracing::error!(path = %path, error = %e, "API request failed");
                None
            }
        }
    }

    pub async fn request_value(&self, path: &str, options: RequestOptions) -> Option<Value> {
        match self.try_request_value(path, options).await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::error!(path = %path, error = %e, "API request failed");
                None
            }
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Option<ResponseEnvelope<T>> {
        self.request(path, RequestOptions::new()).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
    ) -> Option<ResponseEnvelope<T>> {
        self.request(path, RequestOptions::new().method(Method::POST).json(body))
            .await
    }
}
