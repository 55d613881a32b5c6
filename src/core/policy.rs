use crate::domain::model::ModelCandidate;
use crate::domain::ports::Generator;
use crate::utils::classify::describe_failure;
use crate::utils::error::{RelayError, Result};

#[derive(Debug, Clone)]
pub struct Success {
    pub candidate: ModelCandidate,
    pub text: String,
    pub attempts: usize,
}

/// Sequential first-success walk over the candidate list.
pub struct CandidatePolicy<G: Generator> {
    generator: G,
}

impl<G: Generator> CandidatePolicy<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    #[cfg(test)]
    fn generator(&self) -> &G {
        &self.generator
    }

    pub async fn run(
        &self,
        candidates: &[ModelCandidate],
        api_key: &str,
        prompt: &str,
    ) -> Result<Success> {
        let mut last_failure = String::from("no model candidates configured");
        let mut attempts = 0;

        // 依序嘗試，成功即停止；不並行以免浪費共用配額
        for candidate in candidates {
            attempts += 1;
            tracing::debug!(candidate = %candidate, attempt = attempts, "Trying model candidate");

            match self.generator.generate(candidate, api_key, prompt).await {
                Ok(text) => {
                    tracing::debug!(candidate = %candidate, attempts, "Model candidate succeeded");
                    return Ok(Success {
                        candidate: candidate.clone(),
                        text,
                        attempts,
                    });
                }
                Err(e) => {
                    last_failure = format!("[{}] {}", candidate.model_id, describe_failure(&e.message()));
                    tracing::warn!(candidate = %candidate, error = %e, "Model candidate failed");
                }
            }
        }

        Err(RelayError::UpstreamExhausted {
            last_failure,
            attempts,
        })
    }
}
