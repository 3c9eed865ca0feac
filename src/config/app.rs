// src/config/app.rs
use super::defaults::*;
use crate::consts::{API_ORIGIN_ENV, CONFIG_ENV, CONFIG_FILE_NAME};
use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_api")]
    pub api: Api,
    #[serde(default = "default_crypto")]
    pub crypto: Crypto,
    #[serde(default = "default_session")]
    pub session: Session,
    #[serde(default)]
    pub proxy: Option<ProxyRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Api {
    pub origin: String,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Api {
    /// Timeout handed to the transport; the client itself enforces none
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Crypto {
    pub key_size_bits: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Session {
    pub token_key: String,
}

/// Dev-server forwarding rule: paths under `prefix` go to `target`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProxyRule {
    pub prefix: String,
    pub target: String,
    #[serde(default = "default_strip_prefix")]
    pub strip_prefix: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api: default_api(),
            crypto: default_crypto(),
            session: default_session(),
            proxy: Some(default_proxy()),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Apply `SSLMON_API_ORIGIN` if set
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(origin) = std::env::var(API_ORIGIN_ENV) {
            self.api.origin = origin;
        }
        self
    }
}

/// First existing candidate: `$SSLMON_CONFIG`, `./sslmon.toml`, `<config_dir>/sslmon/sslmon.toml`
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("sslmon").join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at runtime: defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let conf = match config_path() {
            Some(path) => match Config::from_file(&path) {
                Ok(conf) => conf,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Config unreadable, using built-in defaults");
                    Config::default()
                }
            },
            None => {
                tracing::warn!("{CONFIG_FILE_NAME} not found, using built-in defaults");
                Config::default()
            }
        };

        conf.with_env_overrides()
    })
}
