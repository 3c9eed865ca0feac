// src/crypto/keys.rs
//! RSA key parsing and generation
//!
//! Public keys are accepted as SPKI PEM, PKCS#1 PEM, or the bare Base64
//! body of either DER encoding. Private keys as PKCS#8 or PKCS#1 PEM.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::error::{CoreError, Result};

/// PEM-encoded key pair
pub struct KeyPair {
    pub public_pem: String,
    pub private_pem: String,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_pem", &self.public_pem)
            .field("private_pem", &"[REDACTED]")
            .finish()
    }
}

pub fn parse_public_key(input: &str) -> Result<RsaPublicKey> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CoreError::InvalidKey("empty key".into()));
    }

    if input.starts_with("-----BEGIN") {
        if let Ok(key) = RsaPublicKey::from_public_key_pem(input) {
            return Ok(key);
        }
        return RsaPublicKey::from_pkcs1_pem(input)
            .map_err(|e| CoreError::InvalidKey(e.to_string()));
    }

    // Header-less key: Base64 DER, whitespace allowed between lines
    let body: String = input.split_whitespace().collect();
    let der = STANDARD
        .decode(body)
        .map_err(|e| CoreError::InvalidKey(e.to_string()))?;

    if let Ok(key) = RsaPublicKey::from_public_key_der(&der) {
        return Ok(key);
    }
    RsaPublicKey::from_pkcs1_der(&der).map_err(|e| CoreError::InvalidKey(e.to_string()))
}

pub fn parse_private_key(input: &str) -> Result<RsaPrivateKey> {
    let input = input.trim();
    if let Ok(key) = RsaPrivateKey::from_pkcs8_pem(input) {
        return Ok(key);
    }
    RsaPrivateKey::from_pkcs1_pem(input).map_err(|e| CoreError::InvalidKey(e.to_string()))
}

/// Generate a fresh key pair with a modulus of `bits`
pub fn generate_keypair(bits: usize) -> Result<KeyPair> {
    let mut rng = rand::rngs::OsRng;
    let private = RsaPrivateKey::new(&mut rng, bits)?;
    let public = RsaPublicKey::from(&private);

    let public_pem = public
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| CoreError::InvalidKey(e.to_string()))?;
    let private_pem = private
        .to_pkcs8_pem(LineEnding::LF)
        .map_err(|e| CoreError::InvalidKey(e.to_string()))?
        .as_str()
        .to_owned();

    Ok(KeyPair {
        public_pem,
        private_pem,
    })
}
