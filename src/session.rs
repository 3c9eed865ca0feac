// src/session.rs
//! Session-scoped storage and the token seam the API client reads through
//!
//! `SessionStore` plays the role of the dashboard's per-tab session storage:
//! a keyed string map that login fills and logout clears. The client never
//! reaches for it directly; it asks a [`TokenProvider`].

use std::collections::HashMap;
use std::sync::RwLock;

use crate::aliases::SessionToken;
use crate::consts::SESSION_TOKEN_KEY;

/// Read-only access to the current bearer token
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<SessionToken>;
}

/// Keyed, string-valued, in-process session storage
pub struct SessionStore {
    token_key: String,
    items: RwLock<HashMap<String, SessionToken>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("token_key", &self.token_key)
            .field("items", &self.len())
            .finish()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_token_key(SESSION_TOKEN_KEY)
    }

    pub fn with_token_key(token_key: impl Into<String>) -> Self {
        Self {
            token_key: token_key.into(),
            items: RwLock::new(HashMap::new()),
        }
    }

    pub fn token_key(&self) -> &str {
        &self.token_key
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        let items = self.items.read().unwrap_or_else(|e| e.into_inner());
        items.get(key).map(|value| value.expose_secret().clone())
    }

    pub fn set_item(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        items.insert(key.into(), SessionToken::new(value.into()));
    }

    pub fn remove_item(&self, key: &str) {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        items.remove(key);
    }

    pub fn clear(&self) {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Login: store the bearer token under the configured key
    pub fn set_token(&self, token: impl Into<String>) {
        tracing::debug!(key = %self.token_key, "session token set");
        self.set_item(self.token_key.clone(), token);
    }

    /// Logout
    pub fn clear_token(&self) {
        tracing::debug!(key = %self.token_key, "session token cleared");
        self.remove_item(&self.token_key);
    }
}

impl TokenProvider for SessionStore {
    fn token(&self) -> Option<SessionToken> {
        self.get_item(&self.token_key).map(SessionToken::new)
    }
}

/// Fixed token, for one-off callers and tests
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<SessionToken> {
        self.0.clone().map(SessionToken::new)
    }
}
