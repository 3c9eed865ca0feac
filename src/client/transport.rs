// src/client/transport.rs
//! The HTTP seam under the API client
//!
//! `HttpTransport` is the production implementation on top of reqwest.
//! Tests plug in their own `Transport` to observe what would be sent.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::request::PreparedRequest;
use crate::config::{Api, ProxyRule};
use crate::error::{CoreError, Result};

#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request; `Ok` only for a 2xx response with a JSON or empty body
    async fn send(&self, request: PreparedRequest) -> Result<Value>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    origin: String,
    proxy: Option<ProxyRule>,
    timeout: Option<Duration>,
}

impl HttpTransport {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            origin: origin.into(),
            proxy: None,
            timeout: None,
        }
    }

    pub fn from_config(api: &Api, proxy: Option<&ProxyRule>) -> Self {
        let mut transport = Self::new(api.origin.clone());
        transport.proxy = proxy.cloned();
        transport.timeout = api.timeout();
        transport
    }

    pub fn with_proxy(mut self, rule: ProxyRule) -> Self {
        self.proxy = Some(rule);
        self
    }

    pub fn with_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Absolute URL for an already-prefixed path, after any proxy rewrite
    pub fn resolve_url(&self, path: &str) -> String {
        if let Some(rule) = &self.proxy {
            if path.starts_with(rule.prefix.as_str()) {
                let rest = if rule.strip_prefix {
                    &path[rule.prefix.len()..]
                } else {
                    path
                };
                let rest = if rest.is_empty() { "/" } else { rest };
                return format!("{}{}", rule.target.trim_end_matches('/'), rest);
            }
        }
        format!("{}{}", self.origin.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: PreparedRequest) -> Result<Value> {
        let url = self.resolve_url(&request.path);
        tracing::debug!(method = %request.method, url = %url, "sending API request");

        let mut builder = self
            .http
            .request(request.method, &url)
            .headers(request.headers);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(timeout) = request.timeout.or(self.timeout) {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        decode_body(&bytes)
    }
}

/// JSON body of a 2xx response; an empty body (e.g. 204) is `Null`
pub fn decode_body(bytes: &[u8]) -> Result<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dev_rule() -> ProxyRule {
        ProxyRule {
            prefix: "/api".into(),
            target: "http://127.0.0.1:4006".into(),
            strip_prefix: true,
        }
    }

    #[test]
    fn test_decode_body_empty_is_null() {
        assert_eq!(decode_body(b"").unwrap(), Value::Null);
        assert_eq!(decode_body(b" \r\n").unwrap(), Value::Null);
        assert_eq!(decode_body(br#"{"code":0}"#).unwrap()["code"], 0);
        assert!(matches!(decode_body(b"<html>"), Err(CoreError::Decode(_))));
    }

    #[test]
    fn test_resolve_url_without_proxy_joins_origin() {
        let transport = HttpTransport::new("https://monitor.example.com/");
        assert_eq!(
            transport.resolve_url("/api/users"),
            "https://monitor.example.com/api/users"
        );
    }

    #[test]
    fn test_resolve_url_proxy_strips_prefix() {
        let transport = HttpTransport::new("http://127.0.0.1:3000").with_proxy(dev_rule());
        assert_eq!(
            transport.resolve_url("/api/users"),
            "http://127.0.0.1:4006/users"
        );
        assert_eq!(transport.resolve_url("/api"), "http://127.0.0.1:4006/");
    }

    #[test]
    fn test_resolve_url_proxy_keeps_prefix_when_not_stripping() {
        let rule = ProxyRule {
            strip_prefix: false,
            ..dev_rule()
        };
        let transport = HttpTransport::new("http://127.0.0.1:3000").with_proxy(rule);
        assert_eq!(
            transport.resolve_url("/api/users"),
            "http://127.0.0.1:4006/api/users"
        );
    }

    #[test]
    fn test_resolve_url_unmatched_path_goes_to_origin() {
        let transport = HttpTransport::new("http://127.0.0.1:3000").with_proxy(dev_rule());
        assert_eq!(
            transport.resolve_url("/static/app.js"),
            "http://127.0.0.1:3000/static/app.js"
        );
    }
}
