//! Our custom error type.

use flashcards::LookupError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type WebResult<T> = Result<T, WebError>;

#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct WebError {
    pub message: String,
}

impl WebError {
    pub fn from<E: std::error::Error>(e: E) -> Self {
        Self {
            message: e.to_string(),
        }
    }
}

impl From<eyre::Report> for WebError {
    fn from(value: eyre::Report) -> Self {
        Self {
            message: value.to_string(),
        }
    }
}

impl From<LookupError> for WebError {
    fn from(value: LookupError) -> Self {
        Self {
            message: value.to_string(),
        }
    }
}
