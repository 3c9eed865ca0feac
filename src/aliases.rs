// src/aliases.rs
//! Re-exports secure-gate's secret types
//!
//! These are the canonical secret wrappers used throughout ssl-monitor-client.

pub use secure_gate::dynamic_alias;

// Dynamic secrets
dynamic_alias!(SessionToken, String); // Bearer credential read on every request
dynamic_alias!(Credential, String); // Raw login credential before encryption
