// src/config/defaults.rs
use crate::config::app::{Api, Crypto, ProxyRule, Session};
use crate::consts::{
    API_PREFIX, DEFAULT_API_ORIGIN, DEFAULT_KEY_SIZE_BITS, DEV_PROXY_TARGET, SESSION_TOKEN_KEY,
};

pub fn default_prefix() -> String {
    API_PREFIX.into()
}

pub fn default_strip_prefix() -> bool {
    true
}

pub fn default_api() -> Api {
    Api {
        origin: DEFAULT_API_ORIGIN.into(),
        prefix: default_prefix(),
        timeout_secs: None,
    }
}

pub fn default_crypto() -> Crypto {
    Crypto {
        key_size_bits: DEFAULT_KEY_SIZE_BITS,
    }
}

pub fn default_session() -> Session {
    Session {
        token_key: SESSION_TOKEN_KEY.into(),
    }
}

pub fn default_proxy() -> ProxyRule {
    ProxyRule {
        prefix: API_PREFIX.into(),
        target: DEV_PROXY_TARGET.into(),
        strip_prefix: default_strip_prefix(),
    }
}
