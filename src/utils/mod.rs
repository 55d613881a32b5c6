pub mod classify;
pub mod error;
pub mod logger;
pub mod validation;
