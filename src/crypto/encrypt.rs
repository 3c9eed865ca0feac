// src/crypto/encrypt.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::Pkcs1v15Encrypt;

use super::keys::{generate_keypair, parse_public_key, KeyPair};
use crate::aliases::Credential;
use crate::consts::DEFAULT_KEY_SIZE_BITS;
use crate::error::Result;

/// RSA credential encryptor built with a fixed key-size hint
///
/// The hint only sizes generated key pairs; encryption always uses the
/// modulus of the key it is handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialEncryptor {
    key_size_bits: usize,
}

impl Default for CredentialEncryptor {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialEncryptor {
    pub const fn new() -> Self {
        Self::with_key_size(DEFAULT_KEY_SIZE_BITS)
    }

    pub const fn with_key_size(key_size_bits: usize) -> Self {
        Self { key_size_bits }
    }

    pub fn key_size_bits(&self) -> usize {
        self.key_size_bits
    }

    /// Encrypt → Base64 ciphertext, or `None` if the key or plaintext is rejected
    pub fn encrypt_credential(&self, plaintext: &str, public_key_pem: &str) -> Option<String> {
        match self.try_encrypt_credential(plaintext, public_key_pem) {
            Ok(ciphertext) => Some(ciphertext),
            Err(e) => {
                tracing::warn!(error = %e, "credential encryption failed");
                None
            }
        }
    }

    /// PKCS#1 v1.5 encryption with the error kind kept
    pub fn try_encrypt_credential(&self, plaintext: &str, public_key_pem: &str) -> Result<String> {
        let credential = Credential::new(plaintext.to_owned());
        let key = parse_public_key(public_key_pem)?;
        let mut rng = rand::rngs::OsRng;
        let ciphertext = key.encrypt(
            &mut rng,
            Pkcs1v15Encrypt,
            credential.expose_secret().as_bytes(),
        )?;
        Ok(STANDARD.encode(ciphertext))
    }

    pub fn generate_keypair(&self) -> Result<KeyPair> {
        generate_keypair(self.key_size_bits)
    }
}

/// One-call helper using the default 512-bit encryptor
pub fn encrypt_credential(plaintext: &str, public_key_pem: &str) -> Option<String> {
    CredentialEncryptor::new().encrypt_credential(plaintext, public_key_pem)
}
