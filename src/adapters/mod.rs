// Adapters layer: concrete implementations for external systems (upstream API, HTTP server, Lambda).

pub mod gemini;

#[cfg(feature = "cli")]
pub mod http;

#[cfg(feature = "lambda")]
pub mod gateway;
