//! # quiz-telegram
//!
//! Telegram front-end: adapters, [`quiz_core::Bot`] implementation with reply keyboards, minimal
//! config, REPL runner. Only translates between teloxide and the quiz engine; no quiz logic here.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{keyboard_markup, TelegramBotAdapter};
pub use config::TelegramConfig;
pub use runner::run_repl;
