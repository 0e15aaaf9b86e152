//! # quiz-engine
//!
//! The quiz conversation: [`Event`] vocabulary, [`SessionState`] derived from the session store,
//! the [`ConversationEngine`] state machine, and [`QuizHandler`], which applies a transition to
//! the store and delivers replies through a [`quiz_core::Bot`].

mod engine;
mod event;
mod handler;
mod state;

pub use engine::{ConversationEngine, Transition};
pub use event::{Event, START_COMMAND};
pub use handler::QuizHandler;
pub use state::{Phase, SessionState, SessionUpdate};
