// tests/common.rs
//! Shared test utilities: logging setup, a recording transport, a one-shot HTTP server

#![allow(dead_code)] // each test binary uses a different subset

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use ssl_monitor_client::client::{HttpTransport, PreparedRequest, Transport};
use ssl_monitor_client::error::{CoreError, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging; idempotent
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

pub enum Reply {
    Body(Value),
    Status(u16),
}

/// Transport that records every request and answers with a canned reply
pub struct RecordingTransport {
    reply: Reply,
    sent: Mutex<Vec<PreparedRequest>>,
}

impl RecordingTransport {
    pub fn replying(body: Value) -> Self {
        Self {
            reply: Reply::Body(body),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            reply: Reply::Status(status),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<PreparedRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> PreparedRequest {
        self.sent
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: PreparedRequest) -> Result<Value> {
        self.sent.lock().unwrap().push(request);
        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Status(status) => Err(CoreError::Status {
                status: *status,
                body: String::new(),
            }),
        }
    }
}

/// reqwest transport that ignores any proxy set in the environment
pub fn local_transport(origin: impl Into<String>) -> HttpTransport {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpTransport::new(origin).with_client(http)
}

/// Bind a local port, answer exactly one request, hand back the raw request text
pub async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];

        let header_end = loop {
            let n = socket.read(&mut buf).await.unwrap();
            assert!(n > 0, "client closed before sending headers");
            raw.extend_from_slice(&buf[..n]);
            if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&raw[..header_end]).to_lowercase();
        let content_length = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        while raw.len() < header_end + content_length {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
        }

        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&raw).into_owned()
    });

    (origin, handle)
}
