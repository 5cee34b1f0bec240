// common/mod.rs - Shared test utilities
//
// Catalog fixtures plus a throwaway HTTP endpoint bound on 127.0.0.1:0,
// so source tests never reach the real network.

#![allow(dead_code)]

use catalog_browser::catalog::Product;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Three products in a deliberately non-sorted order.
pub const THREE_PRODUCTS_JSON: &str = r#"[
    {"id": 7, "title": "Mens Casual Slim Fit", "price": 15.99, "description": "Slim fit shirt", "category": "men's clothing", "image": "https://example.com/7.jpg", "rating": {"rate": 2.1, "count": 430}},
    {"id": 2, "title": "Solid Gold Petite Micropave", "price": 168, "category": "jewelery"},
    {"id": "x-9", "title": "Gift Card", "price": "Contact us"}
]"#;

/// The catalog from the "Yoga Mat / Water Bottle / Coffee Beans" scenarios.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Yoga Mat", 39.99).with_category("Sports"),
        Product::new(2, "Water Bottle", 29.99).with_category("Sports"),
        Product::new(3, "Coffee Beans", 24.99).with_category("Food"),
    ]
}

/// Serve exactly one HTTP response, returning the endpoint URL and a handle
/// that resolves to the raw request text.
pub async fn serve_once(status_line: &'static str, body: &str) -> anyhow::Result<(String, JoinHandle<String>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let body = body.to_string();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = match listener.accept().await {
            Ok(conn) => conn,
            Err(_) => return String::new(),
        };

        let mut buf = vec![0u8; 8192];
        let n = socket.read(&mut buf).await.unwrap_or(0);
        let request = String::from_utf8_lossy(&buf[..n]).to_string();

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
        request
    });

    Ok((format!("http://{addr}/products"), handle))
}

/// Accept one connection and never answer it.
pub async fn serve_silence(hold: Duration) -> anyhow::Result<(String, JoinHandle<()>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        if let Ok((socket, _)) = listener.accept().await {
            tokio::time::sleep(hold).await;
            drop(socket);
        }
    });

    Ok((format!("http://{addr}/products"), handle))
}

/// A localhost URL with nothing listening on it.
pub async fn closed_endpoint() -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}/products"))
}
