// src/config/mod.rs
//! Configuration system for ssl-monitor-client
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{config_path, load, Api, Config, Crypto, ProxyRule, Session};

mod app;
mod defaults;
