//! Session state as derived from the store, and what a transition does to it.

/// Durable state of one session. Derived from the store on every event; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    AwaitingNewQuestion,
    AwaitingAnswer { question: String },
}

impl SessionState {
    /// Absent pending question means the user is expected to ask for a new one.
    pub fn from_pending(pending: Option<String>) -> Self {
        match pending {
            Some(question) => SessionState::AwaitingAnswer { question },
            None => SessionState::AwaitingNewQuestion,
        }
    }

    pub fn pending_question(&self) -> Option<&str> {
        match self {
            SessionState::AwaitingAnswer { question } => Some(question.as_str()),
            SessionState::AwaitingNewQuestion => None,
        }
    }
}

/// Where the conversation stands after a transition.
/// `Closed` is stored exactly like `AwaitingNewQuestion` (no pending question).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingNewQuestion,
    AwaitingAnswer,
    Closed,
}

/// Store mutation produced by a transition; applied as one store call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    Keep,
    Set(String),
    Clear,
}
