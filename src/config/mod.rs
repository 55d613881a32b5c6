#[cfg(feature = "lambda")]
pub mod lambda;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{RelayError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url};

#[cfg(feature = "cli")]
use crate::adapters::gemini::DEFAULT_API_BASE_URL;
#[cfg(feature = "cli")]
use crate::domain::model::{default_candidates, ModelCandidate};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::{Args, Parser};
#[cfg(feature = "cli")]
use std::net::SocketAddr;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const MAX_TIMEOUT_SECS: u64 = 120;

/// Checks shared by every config source. The credential is checked per request instead.
pub fn validate_upstream<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_url("api_base_url", config.api_base_url())?;
    validate_range(
        "timeout_secs",
        config.request_timeout().as_secs(),
        1,
        MAX_TIMEOUT_SECS,
    )?;

    validate_candidates(config.candidates())
}

pub fn validate_candidates(candidates: &[crate::domain::model::ModelCandidate]) -> Result<()> {
    if candidates.is_empty() {
        return Err(RelayError::MissingConfigError {
            field: "candidates".to_string(),
        });
    }
    for candidate in candidates {
        validate_non_empty_string("candidates.api_version", &candidate.api_version)?;
        validate_non_empty_string("candidates.model_id", &candidate.model_id)?;
    }
    Ok(())
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "tarot-relay")]
#[command(about = "Tarot reading relay in front of the Gemini API")]
pub struct ServerConfig {
    #[arg(long, default_value = "127.0.0.1:8787")]
    pub bind: SocketAddr,

    #[command(flatten)]
    pub upstream: UpstreamConfig,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Clone, Args)]
pub struct UpstreamConfig {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "GEMINI_API_BASE_URL")]
    pub api_base_url: Option<String>,

    #[arg(long, help = "Per-candidate upstream timeout in seconds")]
    pub timeout_secs: Option<u64>,

    #[arg(long, env = "RELAY_CONFIG_PATH", help = "TOML file overriding the model candidates")]
    pub config: Option<PathBuf>,

    #[arg(skip = default_candidates())]
    pub candidates: Vec<ModelCandidate>,
}

#[cfg(feature = "cli")]
impl UpstreamConfig {
    /// Merge the optional TOML file. Command-line values win over the file.
    pub fn resolve(mut self) -> Result<Self> {
        if let Some(path) = &self.config {
            let file = toml_config::RelayFileConfig::from_file(path)?;
            tracing::info!(
                path = %path.display(),
                candidates = file.candidates.len(),
                "Loaded relay config file"
            );

            self.candidates = file.candidates;
            self.timeout_secs = self.timeout_secs.or(file.timeout_secs);
            self.api_base_url = self.api_base_url.or(file.api_base_url);
        }
        Ok(self)
    }
}

#[cfg(feature = "cli")]
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("config", &self.config)
            .field("candidates", &self.candidates)
            .finish()
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for UpstreamConfig {
    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    fn candidates(&self) -> &[ModelCandidate] {
        &self.candidates
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

#[cfg(feature = "cli")]
impl Validate for UpstreamConfig {
    fn validate(&self) -> Result<()> {
        validate_upstream(self)?;
        tracing::debug!("✅ Upstream configuration validation passed");
        Ok(())
    }
}
