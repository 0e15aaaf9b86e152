//! Session store error types.

use thiserror::Error;

/// Errors that can occur when reading or writing sessions.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}

impl From<StoreError> for quiz_core::QuizError {
    fn from(e: StoreError) -> Self {
        quiz_core::QuizError::StoreUnavailable(e.to_string())
    }
}
