use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Method not allowed: {method}")]
    MethodNotAllowed { method: String },

    #[error("Malformed request: {message}")]
    MalformedRequest { message: String },

    #[error("All model candidates failed: {last_failure}")]
    UpstreamExhausted { last_failure: String, attempts: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Client,
    Upstream,
    Internal,
}

impl RelayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RelayError::ConfigError { .. }
            | RelayError::MissingConfigError { .. }
            | RelayError::InvalidConfigValueError { .. }
            | RelayError::TomlError(_) => ErrorCategory::Configuration,
            RelayError::MethodNotAllowed { .. } | RelayError::MalformedRequest { .. } => {
                ErrorCategory::Client
            }
            RelayError::UpstreamExhausted { .. } => ErrorCategory::Upstream,
            RelayError::IoError(_) | RelayError::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    /// HTTP status surfaced to the caller.
    ///
    /// Only configuration and method errors leave the handler as non-200;
    /// everything else is absorbed into a fallback reading.
    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::Configuration => 401,
            ErrorCategory::Client => match self {
                RelayError::MethodNotAllowed { .. } => 405,
                _ => 200,
            },
            ErrorCategory::Upstream | ErrorCategory::Internal => 200,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RelayError::MissingConfigError { field } => {
                format!("필수 설정 `{}` 이(가) 없습니다.", field)
            }
            RelayError::InvalidConfigValueError { field, reason, .. } => {
                format!("설정 `{}` 값이 올바르지 않습니다: {}", field, reason)
            }
            RelayError::ConfigError { message } => message.clone(),
            RelayError::TomlError(e) => format!("설정 파일을 읽을 수 없습니다: {}", e),
            RelayError::IoError(e) => format!("파일을 열 수 없습니다: {}", e),
            other => other.to_string(),
        }
    }
}

/// One failed upstream attempt. Never crosses the handler boundary.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned {status}: {message}")]
    Status {
        status: u16,
        message: String,
        reason: Option<String>,
    },

    #[error("response did not contain generated text")]
    MissingText,

    #[error("response body was not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl UpstreamError {
    /// Raw message used for classification and diagnostics.
    /// The upstream status string (e.g. `RESOURCE_EXHAUSTED`) is appended when present.
    pub fn message(&self) -> String {
        match self {
            UpstreamError::Status {
                message,
                reason: Some(reason),
                ..
            } => format!("{} ({})", message, reason),
            UpstreamError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
