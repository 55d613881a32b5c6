#![allow(dead_code)]

use httpmock::prelude::*;
use httpmock::Mock;
use serde_json::json;
use std::time::Duration;
use tarot_relay::core::ConfigProvider;
use tarot_relay::{GeminiClient, ModelCandidate, ReadingHandler};

pub const API_KEY: &str = "AIzaSyTEST0123456789abcdefghijklmnop";

pub const CAREER_REQUEST: &str = r#"{"concern":"career change","cards":[{"name":"The Fool","isReversed":false},{"name":"The Tower","isReversed":true},{"name":"The Sun","isReversed":false}]}"#;

pub struct TestConfig {
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub candidates: Vec<ModelCandidate>,
    pub timeout: Duration,
}

impl TestConfig {
    pub fn new(server: &MockServer, models: &[&str]) -> Self {
        Self {
            api_key: Some(API_KEY.to_string()),
            api_base_url: server.base_url(),
            candidates: models
                .iter()
                .map(|model| ModelCandidate::new("v1beta", *model))
                .collect(),
            timeout: Duration::from_secs(5),
        }
    }
}

impl ConfigProvider for TestConfig {
    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn candidates(&self) -> &[ModelCandidate] {
        &self.candidates
    }

    fn request_timeout(&self) -> Duration {
        self.timeout
    }
}

pub fn handler(config: TestConfig) -> ReadingHandler<GeminiClient, TestConfig> {
    let client = GeminiClient::from_config(&config).unwrap();
    ReadingHandler::new(client, config)
}

pub fn model_path(model: &str) -> String {
    format!("/v1beta/models/{}:generateContent", model)
}

/// Upstream answers with generated `text` for `model`.
pub fn mock_success<'a>(server: &'a MockServer, model: &str, text: &str) -> Mock<'a> {
    let body = json!({
        "candidates": [{"content": {"parts": [{"text": text}], "role": "model"}, "finishReason": "STOP"}]
    });
    server.mock(|when, then| {
        when.method(POST)
            .path(model_path(model))
            .query_param("key", API_KEY);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(body);
    })
}

/// Upstream answers with an error payload for `model`.
pub fn mock_failure<'a>(server: &'a MockServer, model: &str, status: u16, message: &str) -> Mock<'a> {
    let body = json!({"error": {"code": status, "message": message, "status": "UNAVAILABLE"}});
    server.mock(|when, then| {
        when.method(POST).path(model_path(model));
        then.status(status)
            .header("Content-Type", "application/json")
            .json_body(body);
    })
}

pub fn reading_json(text: &str) -> String {
    format!(
        r#"{{"intro":"{}","readings":["a","b","c"],"conclusion":"d"}}"#,
        text
    )
}
