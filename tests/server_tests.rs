//! HTTP boundary tests against a live listener.

use std::sync::Arc;
use std::time::Duration;

use regress_engine::evaluation::RegressionEngine;
use regress_engine::server::{self, ErrorBody, GenerateResponse};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let engine = Arc::new(RegressionEngine::default());
    tokio::spawn(server::serve(listener, engine));
    addr
}

async fn send(addr: &str, raw: impl AsRef<[u8]>) -> (u16, Vec<u8>) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw.as_ref()).await.unwrap();

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();

    let split = buf
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has a header terminator");
    let head = String::from_utf8(buf[..split].to_vec()).unwrap();
    let status = head
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .expect("status code");
    (status, buf[split + 4..].to_vec())
}

fn post(path: &str, body: &str) -> String {
    format!(
        "POST {path} HTTP/1.1\r\nHost: test\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{body}",
        body.len()
    )
}

#[tokio::test]
async fn test_generate_round_trip() {
    let addr = spawn_server().await;
    let body = r#"{"n_points": 50, "coefficient_a": -1.5, "noise_variance": 0.5, "random_seed": 7}"#;

    let (status, body) = send(&addr, post("/generate", body)).await;
    assert_eq!(status, 200);

    let response: GenerateResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.plot_data.x.len(), 50);
    assert_eq!(response.plot_data.y.len(), 50);
    assert_eq!(response.plot_data.y_pred.len(), 50);
    assert_eq!(response.target_coefficient, -1.5);
    assert_eq!(response.outliers.len(), 5);

    let points: Vec<usize> = response.outliers.iter().map(|o| o.point - 1).collect();
    assert_eq!(response.plot_data.outlier_indices, points);
}

#[tokio::test]
async fn test_response_keys() {
    let addr = spawn_server().await;
    let (status, body) = send(&addr, post("/generate", "{}")).await;
    assert_eq!(status, 200);

    let value: Value = serde_json::from_slice(&body).unwrap();
    for key in ["x", "y", "y_pred", "outlier_indices", "x_line", "y_line"] {
        assert!(value["plot_data"][key].is_array(), "missing plot_data.{key}");
    }
    for key in ["coefficient_a", "intercept_b", "r_squared"] {
        assert!(value["coefficients"][key].is_number(), "missing {key}");
    }
    let outlier = &value["outliers"][0];
    for key in ["Point", "X", "Y (Actual)", "Y (Predicted)", "Residual"] {
        assert!(outlier[key].is_number(), "missing outlier key {key}");
    }
    assert_eq!(value["target_coefficient"], 2.0);
}

#[tokio::test]
async fn test_same_request_same_response() {
    let addr = spawn_server().await;
    let (_, first) = send(&addr, post("/generate", r#"{"random_seed": 3}"#)).await;
    let (_, second) = send(&addr, post("/generate", r#"{"random_seed": 3}"#)).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_validation_error_is_400() {
    let addr = spawn_server().await;
    let (status, body) = send(&addr, post("/generate", r#"{"n_points": 1000}"#)).await;

    assert_eq!(status, 400);
    let err: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert_eq!(err.error, "n_points must be between 20 and 500");
}

#[tokio::test]
async fn test_malformed_request_is_400() {
    let addr = spawn_server().await;
    let (status, body) = send(&addr, "NONSENSE\r\n\r\n".to_string()).await;

    assert_eq!(status, 400);
    let err: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert!(err.error.starts_with("malformed request"));
}

#[tokio::test]
async fn test_health_and_unknown_path() {
    let addr = spawn_server().await;

    let (status, body) = send(
        &addr,
        "GET /health HTTP/1.1\r\nHost: test\r\n\r\n".to_string(),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body, br#"{"status":"ok"}"#);

    let (status, _) = send(&addr, post("/missing", "{}")).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let addr = spawn_server().await;

    let mut handles = Vec::new();
    for seed in 0..8u64 {
        let addr = addr.clone();
        handles.push(tokio::spawn(async move {
            let body = format!(r#"{{"random_seed": {seed}}}"#);
            send(&addr, post("/generate", &body)).await
        }));
    }

    let mut bodies = Vec::new();
    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, 200);
        bodies.push(body);
    }

    // Each seed answered alone gives the same bytes as under concurrency
    let (_, alone) = send(&addr, post("/generate", r#"{"random_seed": 5}"#)).await;
    assert_eq!(bodies[5], alone);
}

#[tokio::test]
async fn test_chunked_body_is_refused() {
    let addr = spawn_server().await;
    let payload = r#"{"n_points":50,"coefficient_a":-3.0}"#;
    let raw = format!(
        "POST /generate HTTP/1.1\r\nHost: test\r\nTransfer-Encoding: chunked\r\n\r\n{:x}\r\n{payload}\r\n0\r\n\r\n",
        payload.len()
    );

    let (status, body) = send(&addr, raw).await;
    assert_eq!(status, 400);
    let err: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert!(err.error.contains("transfer-encoding"));
}

#[tokio::test]
async fn test_non_utf8_request_line_is_400() {
    let addr = spawn_server().await;
    let raw: &[u8] = b"POST /gen\xff\xfe HTTP/1.1\r\nContent-Length: 0\r\n\r\n";

    let (status, body) = send(&addr, raw).await;
    assert_eq!(status, 400);
    let err: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert!(err.error.starts_with("malformed request"));
}

#[tokio::test]
async fn test_stalled_request_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let engine = RegressionEngine::default();
        server::handle_connection_within(stream, &engine, Duration::from_millis(100)).await
    });

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"POST /generate HTTP/1.1\r\nHost: te")
        .await
        .unwrap();

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with("HTTP/1.1 408 Request Timeout\r\n"));
    assert!(text.ends_with(r#"{"error":"request timed out"}"#));
}

#[tokio::test]
async fn test_server_survives_dropped_clients() {
    let addr = spawn_server().await;
    for _ in 0..5 {
        drop(TcpStream::connect(addr.as_str()).await.unwrap());
    }

    let (status, _) = send(&addr, "GET /health HTTP/1.1\r\nHost: test\r\n\r\n").await;
    assert_eq!(status, 200);
}
