#[cfg(feature = "lambda")]
use crate::adapters::gemini::DEFAULT_API_BASE_URL;
#[cfg(feature = "lambda")]
use crate::config::toml_config::RelayFileConfig;
#[cfg(feature = "lambda")]
use crate::config::{validate_upstream, DEFAULT_TIMEOUT_SECS};
#[cfg(feature = "lambda")]
use crate::domain::model::{default_candidates, ModelCandidate};
#[cfg(feature = "lambda")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "lambda")]
use crate::utils::error::Result;
#[cfg(feature = "lambda")]
use std::env;
#[cfg(feature = "lambda")]
use std::time::Duration;

#[cfg(feature = "lambda")]
#[derive(Clone)]
pub struct LambdaConfig {
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub timeout_secs: u64,
    pub candidates: Vec<ModelCandidate>,
}

#[cfg(feature = "lambda")]
impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self {
            api_key: env::var("GEMINI_API_KEY").ok(),
            api_base_url: env::var("GEMINI_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            timeout_secs: env::var("CANDIDATE_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            candidates: default_candidates(),
        };

        if let Ok(path) = env::var("RELAY_CONFIG_PATH") {
            let file = RelayFileConfig::from_file(&path)?;
            config.candidates = file.candidates;
            if let Some(timeout) = file.timeout_secs {
                config.timeout_secs = timeout;
            }
            if let Some(url) = file.api_base_url {
                config.api_base_url = url;
            }
        }

        Ok(config)
    }
}

#[cfg(feature = "lambda")]
impl std::fmt::Debug for LambdaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LambdaConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("candidates", &self.candidates)
            .finish()
    }
}

#[cfg(feature = "lambda")]
impl ConfigProvider for LambdaConfig {
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
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(feature = "lambda")]
impl crate::utils::validation::Validate for LambdaConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_upstream(self)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
