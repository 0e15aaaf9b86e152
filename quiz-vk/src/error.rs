//! VK client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VkError {
    #[error("VK HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("VK API error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("VK response decode error: {0}")]
    Decode(String),
}

impl From<VkError> for quiz_core::QuizError {
    fn from(e: VkError) -> Self {
        quiz_core::QuizError::SendFailure(e.to_string())
    }
}
