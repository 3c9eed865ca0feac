// src/consts.rs
//! Shared constants: wire contract and defaults

/// API mount point every request path is joined onto
pub const API_PREFIX: &str = "/api";

/// Session storage key holding the bearer token
pub const SESSION_TOKEN_KEY: &str = "token";

/// Key-size hint the credential encryptor is built with
pub const DEFAULT_KEY_SIZE_BITS: usize = 512;

/// Origin the dashboard is served from during development
pub const DEFAULT_API_ORIGIN: &str = "http://127.0.0.1:3000";

/// Backend the dev server forwards `/api` to
pub const DEV_PROXY_TARGET: &str = "http://127.0.0.1:4006";

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "SSLMON_CONFIG";

/// Environment variable overriding `api.origin`
pub const API_ORIGIN_ENV: &str = "SSLMON_API_ORIGIN";

/// Config file name looked up in the working and config directories
pub const CONFIG_FILE_NAME: &str = "sslmon.toml";
