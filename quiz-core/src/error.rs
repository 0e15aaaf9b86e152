use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    /// No questions were loaded; the bot must not start serving.
    #[error("Question bank is empty")]
    EmptyBank,

    /// The session points at a question that is no longer in the bank.
    #[error("Session references unknown question: {0}")]
    StateDesync(String),

    #[error("Session store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Send failure: {0}")]
    SendFailure(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
