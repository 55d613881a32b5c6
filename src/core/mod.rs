pub mod fallback;
pub mod handler;
pub mod normalize;
pub mod policy;
pub mod prompt;

pub use crate::domain::model::{CardDraw, ModelCandidate, Reading, ReadingRequest};
pub use crate::domain::ports::{ConfigProvider, Generator};
pub use crate::utils::error::Result;
