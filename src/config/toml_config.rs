use crate::domain::model::ModelCandidate;
use crate::config::{validate_candidates, MAX_TIMEOUT_SECS};
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Process-level overrides for the upstream candidates.
///
/// ```toml
/// timeout_secs = 8
///
/// [[candidates]]
/// api_version = "v1beta"
/// model_id = "gemini-2.5-flash"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayFileConfig {
    pub candidates: Vec<ModelCandidate>,
    pub timeout_secs: Option<u64>,
    pub api_base_url: Option<String>,
}

impl RelayFileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for RelayFileConfig {
    fn validate(&self) -> Result<()> {
        validate_candidates(&self.candidates)?;

        if let Some(timeout) = self.timeout_secs {
            validate_range("timeout_secs", timeout, 1, MAX_TIMEOUT_SECS)?;
        }
        if let Some(url) = &self.api_base_url {
            validate_url("api_base_url", url)?;
        }

        Ok(())
    }
}
