//! Throwaway HTTP server and gzip helpers shared by the unit tests.

use async_compression::tokio::write::GzipEncoder;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[derive(Debug, Clone)]
pub(crate) enum CannedResponse {
    /// `200 OK` with the given body.
    Ok(Vec<u8>),
    /// Empty body with the given status code.
    Status(u16),
    /// Accepts the connection and never answers.
    Silent,
}

pub(crate) async fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzipEncoder::new(Vec::new());
    encoder.write_all(data).await.expect("gzip write");
    encoder.shutdown().await.expect("gzip finish");
    encoder.into_inner()
}

/// Serves `response` to every connection on a fresh loopback port and returns the feed url.
pub(crate) async fn serve(response: CannedResponse) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            tokio::spawn(answer(socket, response.clone()));
        }
    });

    format!("http://{}/data/cache/metars.cache.xml.gz", addr)
}

/// A url on a loopback port nobody listens on.
pub(crate) async fn unused_local_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    format!("http://{}/data/cache/metars.cache.xml.gz", addr)
}

async fn answer(mut socket: TcpStream, response: CannedResponse) {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let (status_line, body) = match response {
        CannedResponse::Ok(body) => ("200 OK".to_string(), body),
        CannedResponse::Status(code) => (format!("{} Canned", code), Vec::new()),
        CannedResponse::Silent => {
            tokio::time::sleep(Duration::from_secs(60)).await;
            return;
        }
    };

    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/x-gzip\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status_line,
        body.len()
    );
    let _ = socket.write_all(head.as_bytes()).await;
    let _ = socket.write_all(&body).await;
    let _ = socket.shutdown().await;
}
