// src/client/request.rs
//! Request options, path normalization and header injection

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde_json::Value;

use crate::aliases::SessionToken;
use crate::error::{CoreError, Result};

/// Caller-side options; everything here is passed through to the transport
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Option<HeaderMap>,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers
            .get_or_insert_with(HeaderMap::new)
            .insert(name, value);
        self
    }

    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// What the transport actually sends: prefixed path, merged headers
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

/// `prefix + path` when `path` starts with `/`, else `prefix + "/" + path`
pub fn normalize_path(prefix: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{prefix}{path}")
    } else {
        format!("{prefix}/{path}")
    }
}

/// Merge caller options with the session token.
///
/// `Authorization` always ends up as the token (empty when absent),
/// replacing whatever the caller put there.
pub fn prepare(
    prefix: &str,
    path: &str,
    options: RequestOptions,
    token: Option<SessionToken>,
) -> Result<PreparedRequest> {
    let authorization = match token {
        Some(token) => HeaderValue::from_str(token.expose_secret())
            .map_err(|e| CoreError::InvalidHeader(e.to_string()))?,
        None => HeaderValue::from_static(""),
    };

    let mut headers = options.headers.unwrap_or_default();
    headers.insert(AUTHORIZATION, authorization);

    Ok(PreparedRequest {
        method: options.method,
        path: normalize_path(prefix, path),
        headers,
        body: options.body,
        query: options.query,
        timeout: options.timeout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::CONTENT_TYPE;

    #[test]
    fn test_normalize_path_inserts_separator_once() {
        assert_eq!(normalize_path("/api", "users"), "/api/users");
        assert_eq!(normalize_path("/api", "/users"), "/api/users");
        assert_eq!(normalize_path("/api", "certs/42"), "/api/certs/42");
        assert_eq!(normalize_path("/api", ""), "/api/");
    }

    #[test]
    fn test_prepare_creates_header_map_when_caller_has_none() {
        let prepared = prepare("/api", "users", RequestOptions::new(), None).unwrap();
        assert_eq!(prepared.headers.len(), 1);
        assert_eq!(prepared.headers[AUTHORIZATION], "");
    }

    #[test]
    fn test_prepare_overrides_stale_authorization_and_keeps_others() {
        let options = RequestOptions::new()
            .header(AUTHORIZATION, HeaderValue::from_static("stale"))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let prepared = prepare(
            "/api",
            "/users",
            options,
            Some(SessionToken::new("abc".to_owned())),
        )
        .unwrap();

        assert_eq!(prepared.headers[AUTHORIZATION], "abc");
        assert_eq!(prepared.headers.get_all(AUTHORIZATION).iter().count(), 1);
        assert_eq!(prepared.headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_prepare_rejects_token_with_newline() {
        let result = prepare(
            "/api",
            "users",
            RequestOptions::new(),
            Some(SessionToken::new("bad\ntoken".to_owned())),
        );
        assert!(matches!(result, Err(CoreError::InvalidHeader(_))));
    }
}
