//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use url_relay::config::RelayConfig;
use url_relay::http::HttpServer;
use url_relay::lifecycle::Shutdown;

/// What a mock upstream answers with.
#[derive(Clone)]
pub struct Canned {
    pub status: u16,
    /// Raw header bytes, written as is.
    pub content_type: Option<Vec<u8>>,
    pub location: Option<String>,
    pub body: Vec<u8>,
    pub delay: Duration,
}

impl Canned {
    pub fn ok(content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            content_type: Some(content_type.as_bytes().to_vec()),
            location: None,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: Some(b"text/plain".to_vec()),
            location: None,
            body: format!("status {status}").into_bytes(),
            delay: Duration::ZERO,
        }
    }

    /// A `302 Found` pointing at `location`.
    pub fn redirect(location: String) -> Self {
        Self {
            status: 302,
            content_type: Some(b"text/plain".to_vec()),
            location: Some(location),
            body: Vec::new(),
            delay: Duration::ZERO,
        }
    }

    /// A 200 whose content-type is sent as the given raw bytes.
    pub fn raw_content_type(content_type: &[u8], body: impl Into<Vec<u8>>) -> Self {
        Self {
            content_type: Some(content_type.to_vec()),
            ..Self::ok("text/plain", body)
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        302 => "Found",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// Start a programmable upstream on an ephemeral port.
///
/// `f` receives the request path and decides the response.
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Canned> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let f = f.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let head = String::from_utf8_lossy(&buf[..n]);
                let path = head
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("/")
                    .to_string();

                let canned = f(path).await;
                tokio::time::sleep(canned.delay).await;

                let mut response =
                    format!("HTTP/1.1 {} {}\r\n", canned.status, reason(canned.status)).into_bytes();
                if let Some(ct) = &canned.content_type {
                    response.extend_from_slice(b"Content-Type: ");
                    response.extend_from_slice(ct);
                    response.extend_from_slice(b"\r\n");
                }
                if let Some(location) = &canned.location {
                    response.extend_from_slice(format!("Location: {location}\r\n").as_bytes());
                }
                response.extend_from_slice(
                    format!(
                        "Content-Length: {}\r\nConnection: close\r\n\r\n",
                        canned.body.len()
                    )
                    .as_bytes(),
                );

                let _ = socket.write_all(&response).await;
                let _ = socket.write_all(&canned.body).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

/// Start an upstream that always answers the same way.
#[allow(dead_code)]
pub async fn start_mock_backend(canned: Canned) -> SocketAddr {
    start_programmable_backend(move |_| {
        let canned = canned.clone();
        async move { canned }
    })
    .await
}

/// Start the relay on an ephemeral port.
pub async fn start_relay() -> (SocketAddr, Shutdown) {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let server = HttpServer::new(RelayConfig::default(), client);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Client used to talk to the relay itself.
pub fn caller() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
