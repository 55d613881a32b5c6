pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{ServerConfig, UpstreamConfig};

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use adapters::gemini::GeminiClient;
pub use core::handler::{HandlerResponse, ReadingHandler};
pub use domain::model::{CardDraw, ModelCandidate, Reading, ReadingRequest};
pub use utils::error::{RelayError, Result};
