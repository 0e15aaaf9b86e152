//! # quiz-core
//!
//! Core types and traits for the quiz bot: [`Bot`], incoming [`Message`], outgoing [`Reply`] with keyboard
//! directives, [`QuizTexts`], the [`QuizError`] taxonomy, answer matching, and tracing initialization.
//! Transport-agnostic; used by quiz-engine, quiz-telegram and quiz-vk.

pub mod bot;
pub mod error;
pub mod logger;
pub mod matcher;
pub mod texts;
pub mod types;

pub use bot::Bot;
pub use error::{QuizError, Result};
pub use logger::init_tracing;
pub use matcher::is_answer_correct;
pub use texts::QuizTexts;
pub use types::{
    Button, ButtonKind, Chat, Keyboard, KeyboardDirective, Message, Platform, Reply, SessionKey,
    ToCoreMessage, ToCoreUser, User,
};
