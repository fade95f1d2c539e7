//! End-to-end tests for `MetalsClient` against a local canned HTTP responder.
//!
//! Each test binds a loopback listener that answers the next N connections
//! with scripted responses and records the request lines it saw.

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use metals_client::error::HttpError;
use metals_client::prelude::*;
use metals_client::sync::Subject;

// ─── Canned responder ────────────────────────────────────────────────────────

type Seen = Arc<Mutex<Vec<String>>>;

/// Serve `responses` in order, one per connection. Returns the base URL and
/// the request lines received so far.
async fn serve(responses: Vec<(u16, &'static str)>) -> (String, Seen) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen: Seen = Arc::default();

    let log = seen.clone();
    tokio::spawn(async move {
        for (status, body) in responses {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };

            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => head.extend_from_slice(&buf[..n]),
                }
            }
            let request_line = String::from_utf8_lossy(&head)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string();
            log.lock().unwrap().push(request_line);

            let response = format!(
                "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{}", addr), seen)
}

/// A base URL nothing is listening on.
async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn client(base_url: &str) -> MetalsClient {
    MetalsClient::builder().base_url(base_url).build().unwrap()
}

const PRICES_BODY: &str = r#"{
    "status": "success",
    "data": [
        {"symbol": "GOLD", "name": "Gold", "price": 2050.5, "unit": "USD/oz", "timestamp": "2024-03-01T12:00:00.123456"},
        {"symbol": "SILVER", "name": "", "price": null, "unit": "USD/oz", "timestamp": null}
    ]
}"#;

// ─── Prices ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_current_prices() {
    let (url, seen) = serve(vec![(200, PRICES_BODY)]).await;

    let quotes = client(&url)
        .prices()
        .current(&CurrencyCode::usd())
        .await
        .unwrap();

    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].symbol.as_str(), "GOLD");
    assert_eq!(display_price(quotes[0].price), "2,050.5");
    assert_eq!(quotes[1].display_name, "Silver");
    assert_eq!(display_price(quotes[1].price), "N/A");
    assert_eq!(display_timestamp(quotes[1].observed_at), "N/A");

    let seen = seen.lock().unwrap();
    assert!(seen[0].starts_with("GET /api/metals/current?currency=USD "));
}

#[tokio::test]
async fn test_unsuccessful_envelope_on_200() {
    let (url, _) = serve(vec![(
        200,
        r#"{"status": "error", "message": "Invalid currency: XYZ"}"#,
    )])
    .await;

    let err = client(&url)
        .prices()
        .current(&CurrencyCode::new("XYZ"))
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::Api { .. }));
    assert_eq!(err.api_message().as_deref(), Some("Invalid currency: XYZ"));
}

#[tokio::test]
async fn test_malformed_body() {
    let (url, _) = serve(vec![(200, "<html>oops</html>")]).await;

    let err = client(&url)
        .prices()
        .current(&CurrencyCode::usd())
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::Http(HttpError::Decode(_))));
    assert!(err.is_malformed());
}

// ─── History ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_history_sorted_oldest_first() {
    let (url, seen) = serve(vec![(
        200,
        r#"{"status": "success", "data": [
            {"price": 2010.0, "timestamp": "2024-03-02T00:00:00"},
            {"price": 2000.0, "timestamp": "2024-03-01T00:00:00"}
        ]}"#,
    )])
    .await;
    let query = Filter::new(
        "gold",
        chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        chrono::NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
    )
    .history_query()
    .unwrap();

    let points = client(&url).history().get(&query).await.unwrap();

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].price, 2000.0);
    assert!(points[0].observed_at < points[1].observed_at);
    assert!(seen.lock().unwrap()[0]
        .starts_with("GET /api/metals/history?metal=GOLD&date_from=2024-03-01&date_to=2024-03-10 "));
}

// ─── Health ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_health_ok() {
    let (url, seen) = serve(vec![(200, r#"{"status": "ok"}"#)]).await;

    let status = client(&url).health().status().await;

    assert!(status.is_healthy());
    assert_eq!(status.message(), "API is running");
    assert!(seen.lock().unwrap()[0].starts_with("GET /api/health "));
}

#[tokio::test]
async fn test_health_non_success_status() {
    let (url, _) = serve(vec![(503, "")]).await;

    let status = client(&url).health().status().await;

    assert_eq!(status.message(), "API returned status: 503");
}

#[tokio::test]
async fn test_health_unreachable() {
    let url = closed_port().await;

    let status = client(&url).health().status().await;

    assert!(!status.is_healthy());
    assert_eq!(status.message(), "API is unreachable");
}

// ─── Update / analysis ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_posts_and_returns_message() {
    let (url, seen) = serve(vec![
        (200, r#"{"status": "success", "message": "Prices refreshed"}"#),
        (200, r#"{"status": "success"}"#),
    ])
    .await;
    let client = client(&url);

    assert_eq!(client.updates().trigger().await.unwrap(), "Prices refreshed");
    assert_eq!(client.updates().trigger().await.unwrap(), "Metal prices updated");
    assert!(seen.lock().unwrap()[0].starts_with("POST /api/metals/update "));
}

#[tokio::test]
async fn test_analysis() {
    let (url, seen) = serve(vec![(
        200,
        r#"{"status": "success", "data": {
            "metal": "SILVER", "trend": "down", "volatility": "high", "sentiment": "negative",
            "period_start": "2024-02-01T00:00:00", "period_end": "2024-03-01T00:00:00"
        }}"#,
    )])
    .await;

    let analysis = client(&url)
        .analysis()
        .get(&MetalSymbol::new("silver"))
        .await
        .unwrap();

    assert_eq!(analysis.trend, Trend::Down);
    assert_eq!(analysis.volatility, Volatility::High);
    assert_eq!(analysis.sentiment, Sentiment::Negative);
    assert!(seen.lock().unwrap()[0].starts_with("GET /api/metals/analysis?metal=SILVER "));
}

// ─── Synchronizer over HTTP ──────────────────────────────────────────────────

#[tokio::test]
async fn test_server_error_envelope_reaches_view() {
    let (url, _) = serve(vec![(500, r#"{"status": "error", "message": "X"}"#)]).await;
    let view = Synchronizer::new(client(&url));

    view.refresh_current_prices(CurrencyCode::usd()).await;

    let state = view.snapshot().await;
    assert_eq!(state.prices.error(), Some("X"));
    assert!(!state.prices.is_loading());
}

#[tokio::test]
async fn test_malformed_body_reaches_view() {
    let (url, _) = serve(vec![(200, "not json")]).await;
    let view = Synchronizer::new(client(&url));

    view.refresh_current_prices(CurrencyCode::usd()).await;

    assert_eq!(
        view.snapshot().await.prices.error(),
        Some("Received a malformed response while loading current prices")
    );
}

#[tokio::test]
async fn test_mount_against_closed_port() {
    let view = Synchronizer::new(client(&closed_port().await));

    view.mount().await;

    let state = view.snapshot().await;
    assert_eq!(
        state.health.as_ref().map(HealthStatus::message),
        Some("API is unreachable")
    );
    assert_eq!(
        state.prices.error(),
        Some(Subject::Prices.generic_fallback().as_str())
    );
}
