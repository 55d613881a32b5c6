use crate::core::normalize::normalize_reading;
use crate::core::policy::CandidatePolicy;
use crate::core::prompt::build_prompt;
use crate::domain::model::{Reading, ReadingRequest};
use crate::domain::ports::{ConfigProvider, Generator};
use crate::utils::error::{RelayError, Result};
use crate::utils::validation::validate_credential;
use serde::Serialize;

pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

const JSON_CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json; charset=utf-8");

/// Transport-neutral response; each adapter maps it onto its own wire type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: Option<String>,
}

impl HandlerResponse {
    fn empty(status: u16) -> Self {
        Self {
            status,
            headers: CORS_HEADERS.to_vec(),
            body: None,
        }
    }

    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => {
                let mut headers = CORS_HEADERS.to_vec();
                headers.push(JSON_CONTENT_TYPE);
                Self {
                    status,
                    headers,
                    body: Some(body),
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response body");
                Self::empty(500)
            }
        }
    }

    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub struct ReadingHandler<G: Generator, C: ConfigProvider> {
    policy: CandidatePolicy<G>,
    config: C,
}

impl<G: Generator, C: ConfigProvider> ReadingHandler<G, C> {
    pub fn new(generator: G, config: C) -> Self {
        Self {
            policy: CandidatePolicy::new(generator),
            config,
        }
    }

    pub async fn handle(&self, method: &str, body: &[u8]) -> HandlerResponse {
        if method.eq_ignore_ascii_case("OPTIONS") {
            return HandlerResponse::empty(204);
        }

        // 沒有憑證就不呼叫上游，且優先於方法檢查
        let api_key = match validate_credential(self.config.api_key()) {
            Ok(key) => key,
            Err(e) => {
                tracing::error!(error = %e, "Credential check failed");
                return self.error_response(e);
            }
        };

        if !method.eq_ignore_ascii_case("POST") {
            return self.error_response(RelayError::MethodNotAllowed {
                method: method.to_string(),
            });
        }

        match self.read(api_key, body).await {
            Ok(reading) => HandlerResponse::json(200, &reading),
            Err(e) => self.error_response(e),
        }
    }

    async fn read(&self, api_key: &str, body: &[u8]) -> Result<Reading> {
        let request: ReadingRequest =
            serde_json::from_slice(body).map_err(|e| RelayError::MalformedRequest {
                message: e.to_string(),
            })?;
        let prompt = build_prompt(&request)?;

        let success = self
            .policy
            .run(self.config.candidates(), api_key, &prompt)
            .await?;

        tracing::info!(
            candidate = %success.candidate,
            attempts = success.attempts,
            "Reading generated"
        );
        Ok(normalize_reading(&success.text))
    }

    fn error_response(&self, error: RelayError) -> HandlerResponse {
        let status = error.status_code();
        if status != 200 {
            return HandlerResponse::json(
                status,
                &ErrorBody {
                    error: error.user_friendly_message(),
                },
            );
        }

        let diagnostic = match &error {
            RelayError::UpstreamExhausted {
                last_failure,
                attempts,
            } => {
                tracing::warn!(attempts, last_failure = %last_failure, "All model candidates failed, serving fallback reading");
                last_failure.clone()
            }
            RelayError::MalformedRequest { message } => {
                tracing::warn!(error = %message, "Malformed reading request, serving fallback reading");
                format!("요청 형식 오류: {}", message)
            }
            other => {
                tracing::warn!(error = %other, "Reading failed, serving fallback reading");
                other.to_string()
            }
        };

        HandlerResponse::json(200, &Reading::fallback(&diagnostic))
    }
}
