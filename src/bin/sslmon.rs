//! sslmon: command-line front end for the certificate-monitoring API

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use rpassword::prompt_password;
use reqwest::Method;
use serde_json::Value;
use ssl_monitor_client::{
    load_config, logging, ApiClient, CredentialEncryptor, RequestOptions, SessionStore,
};
use tracing::info;

const USAGE: &str = "usage:
  sslmon encrypt <public-key.pem>   prompt for a credential, print its ciphertext
  sslmon keygen                     print a fresh key pair
  sslmon get <path>                 GET <prefix>/<path>, print the response body
  sslmon post <path> <json>         POST a JSON body, print the response body

env: SSLMON_TOKEN (session token), SSLMON_CONFIG (config file), RUST_LOG";

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let config = load_config();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["encrypt", key_path] => {
            let pem = std::fs::read_to_string(key_path)
                .with_context(|| format!("Failed to read public key {key_path}"))?;
            let credential = prompt_password("Credential: ").context("Failed to read credential")?;

            let encryptor = CredentialEncryptor::with_key_size(config.crypto.key_size_bits);
            match encryptor.encrypt_credential(&credential, &pem) {
                Some(ciphertext) => println!("{ciphertext}"),
                None => bail!("Encryption failed, check the key and credential length"),
            }
        }
        ["keygen"] => {
            let encryptor = CredentialEncryptor::with_key_size(config.crypto.key_size_bits);
            info!(bits = encryptor.key_size_bits(), "Generating key pair");
            let pair = encryptor
                .generate_keypair()
                .context("Key generation failed")?;
            print!("{}{}", pair.public_pem, pair.private_pem);
        }
        ["get", path] => {
            let body = client(config)
                .request_value(path, RequestOptions::new())
                .await;
            print_body(body)?;
        }
        ["post", path, body] => {
            let body = serde_json::from_str(body).context("Request body is not valid JSON")?;
            let options = RequestOptions::new().method(Method::POST).json(body);
            let body = client(config).request_value(path, options).await;
            print_body(body)?;
        }
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}

fn client(config: &ssl_monitor_client::config::Config) -> ApiClient {
    let session = SessionStore::with_token_key(config.session.token_key.clone());
    if let Ok(token) = std::env::var("SSLMON_TOKEN") {
        session.set_token(token);
    }
    ApiClient::from_config(config, Arc::new(session))
}

/// Body is printed as received, envelope-shaped or not
fn print_body(body: Option<Value>) -> Result<()> {
    match body {
        Some(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        None => {
            println!("null");
            bail!("Request did not succeed")
        }
    }
}
