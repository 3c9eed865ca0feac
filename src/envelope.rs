// src/envelope.rs
//! The `{code, msg, data}` body every API response is expected to carry
//!
//! `code` is never interpreted here; that is the caller's business.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T = serde_json::Value> {
    pub code: i64,
    pub msg: String,
    pub data: T,
}

impl<T> ResponseEnvelope<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}
