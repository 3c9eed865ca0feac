// src/crypto/decrypt.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::Pkcs1v15Encrypt;

use super::keys::parse_private_key;
use crate::error::Result;

/// Base64 ciphertext → credential, with the error kind kept
pub fn try_decrypt_credential(ciphertext_b64: &str, private_key_pem: &str) -> Result<String> {
    let key = parse_private_key(private_key_pem)?;
    let ciphertext = STANDARD.decode(ciphertext_b64.trim())?;
    let plaintext = key.decrypt(Pkcs1v15Encrypt, &ciphertext)?;
    Ok(String::from_utf8(plaintext)?)
}

pub fn decrypt_credential(ciphertext_b64: &str, private_key_pem: &str) -> Option<String> {
    try_decrypt_credential(ciphertext_b64, private_key_pem)
        .map_err(|e| tracing::warn!(error = %e, "credential decryption failed"))
        .ok()
}
