use crate::domain::model::ModelCandidate;
use crate::utils::error::UpstreamError;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> Option<&str>;
    fn api_base_url(&self) -> &str;
    fn candidates(&self) -> &[ModelCandidate];
    fn request_timeout(&self) -> Duration;
}

/// Upstream generative-language collaborator. One call is one attempt.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(
        &self,
        candidate: &ModelCandidate,
        api_key: &str,
        prompt: &str,
    ) -> std::result::Result<String, UpstreamError>;
}
