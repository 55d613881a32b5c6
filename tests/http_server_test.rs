#![cfg(feature = "cli")]

mod common;

use common::*;
use httpmock::prelude::*;
use std::net::SocketAddr;
use std::sync::Arc;
use tarot_relay::adapters::http::serve_with_listener;
use tokio::net::TcpListener;

async fn spawn_relay(config: TestConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handler = Arc::new(handler(config));

    tokio::spawn(async move {
        serve_with_listener(listener, handler).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn test_post_on_any_path_returns_reading() {
    let server = MockServer::start();
    let upstream = mock_success(
        &server,
        "gemini-2.5-flash",
        &format!("```json\n{}\n```", reading_json("서버")),
    );
    let addr = spawn_relay(TestConfig::new(&server, &["gemini-2.5-flash"])).await;

    let client = reqwest::Client::new();
    for path in ["/", "/api/reading"] {
        let response = client
            .post(format!("http://{}{}", addr, path))
            .header("Content-Type", "application/json")
            .body(CAREER_REQUEST)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "*"
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["intro"], "서버");
        assert_eq!(body["readings"].as_array().unwrap().len(), 3);
    }

    upstream.assert_hits(2);
}

#[tokio::test]
async fn test_preflight_and_wrong_method_over_http() {
    let server = MockServer::start();
    let addr = spawn_relay(TestConfig::new(&server, &["gemini-2.5-flash"])).await;
    let client = reqwest::Client::new();

    let preflight = client
        .request(reqwest::Method::OPTIONS, format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(preflight.status(), 204);
    assert_eq!(
        preflight.headers()["access-control-allow-methods"],
        "POST, OPTIONS"
    );
    assert_eq!(
        preflight.headers()["access-control-allow-headers"],
        "Content-Type"
    );

    let get = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(get.status(), 405);
    assert_eq!(get.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_missing_credential_over_http() {
    let server = MockServer::start();
    let upstream = server.mock(|when, then| {
        when.method(POST);
        then.status(200);
    });

    let mut config = TestConfig::new(&server, &["gemini-2.5-flash"]);
    config.api_key = None;
    let addr = spawn_relay(config).await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/", addr))
        .body(CAREER_REQUEST)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 401);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("API 키"));
    assert_eq!(upstream.hits(), 0);
}
