use crate::domain::model::ModelCandidate;
use crate::domain::ports::{ConfigProvider, Generator};
use crate::utils::error::{RelayError, Result, UpstreamError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// `generateContent` client for the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RelayError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.api_base_url(), config.request_timeout())
    }

    pub fn endpoint(&self, candidate: &ModelCandidate) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            candidate.api_version,
            candidate.model_id
        )
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(
        &self,
        candidate: &ModelCandidate,
        api_key: &str,
        prompt: &str,
    ) -> std::result::Result<String, UpstreamError> {
        let payload = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        tracing::debug!(candidate = %candidate, "Sending generateContent request");

        // URL 帶有金鑰，錯誤訊息中必須去除
        let response = self
            .client
            .post(self.endpoint(candidate))
            .query(&[("key", api_key)])
            .json(&payload)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.without_url()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Transport(e.without_url()))?;

        tracing::debug!(candidate = %candidate, status = %status, "Received upstream response");

        let body: GenerateResponse = match serde_json::from_slice(&bytes) {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(UpstreamError::Status {
                    status: status.as_u16(),
                    message: status
                        .canonical_reason()
                        .unwrap_or("알 수 없는 오류")
                        .to_string(),
                    reason: None,
                });
            }
            Err(e) => return Err(UpstreamError::InvalidBody(e)),
        };

        if !status.is_success() {
            let (message, reason) = match body.error {
                Some(error) => (error.message, error.status),
                None => ("알 수 없는 오류".to_string(), None),
            };
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message,
                reason,
            });
        }

        body.candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or(UpstreamError::MissingText)
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<GenerateCandidate>>,
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct GenerateCandidate {
    content: Option<GenerateContent>,
}

#[derive(Deserialize)]
struct GenerateContent {
    #[serde(default)]
    parts: Vec<GeneratePart>,
}

#[derive(Deserialize)]
struct GeneratePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
    #[serde(default)]
    status: Option<String>,
}
