// src/crypto/mod.rs
//! Credential encryption: no I/O, no network
//!
//! Wraps RSA PKCS#1 v1.5 so a login credential can be sealed with the
//! server's public key before it leaves the process.
mod decrypt;
mod encrypt;
mod keys;

pub use decrypt::{decrypt_credential, try_decrypt_credential};
pub use encrypt::{encrypt_credential, CredentialEncryptor};
pub use keys::{generate_keypair, parse_private_key, parse_public_key, KeyPair};
