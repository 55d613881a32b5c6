use crate::utils::error::{RelayError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDraw {
    pub name: String,
    #[serde(rename = "isReversed", default)]
    pub is_reversed: Option<bool>,
}

impl CardDraw {
    pub fn orientation(&self) -> Orientation {
        if self.is_reversed.unwrap_or(false) {
            Orientation::Reversed
        } else {
            Orientation::Upright
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingRequest {
    pub concern: String,
    pub cards: Vec<CardDraw>,
}

impl ReadingRequest {
    /// Pair the three drawn cards with their spread positions.
    pub fn spread(&self) -> Result<[(Position, &CardDraw); 3]> {
        match self.cards.as_slice() {
            [past, present, future] => Ok([
                (Position::Past, past),
                (Position::Present, present),
                (Position::Future, future),
            ]),
            cards => Err(RelayError::MalformedRequest {
                message: format!("expected 3 cards, got {}", cards.len()),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Past,
    Present,
    Future,
}

impl Position {
    pub fn label(self) -> &'static str {
        match self {
            Position::Past => "과거",
            Position::Present => "현재",
            Position::Future => "미래",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Upright,
    Reversed,
}

impl Orientation {
    pub fn label(self) -> &'static str {
        match self {
            Orientation::Upright => "정방향",
            Orientation::Reversed => "역방향",
        }
    }
}

/// The only shape ever returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub intro: String,
    pub readings: [String; 3],
    pub conclusion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCandidate {
    pub api_version: String,
    pub model_id: String,
}

impl ModelCandidate {
    pub fn new(api_version: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            api_version: api_version.into(),
            model_id: model_id.into(),
        }
    }
}

impl fmt::Display for ModelCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.api_version, self.model_id)
    }
}

/// Built-in priority order, most preferred first.
pub fn default_candidates() -> Vec<ModelCandidate> {
    vec![
        ModelCandidate::new("v1beta", "gemini-2.5-flash"),
        ModelCandidate::new("v1beta", "gemini-flash-latest"),
        ModelCandidate::new("v1beta", "gemini-1.5-flash"),
        ModelCandidate::new("v1", "gemini-1.5-flash"),
    ]
}
