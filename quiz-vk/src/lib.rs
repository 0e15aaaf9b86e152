//! # quiz-vk
//!
//! VK front-end: a small API client, Bots Long Poll session, keyboard rendering, a
//! [`quiz_core::Bot`] implementation and the polling runner.

mod adapters;
mod api;
mod bot_adapter;
mod config;
mod error;
mod keyboard;
mod longpoll;
mod runner;

pub use adapters::{is_start_payload, VkMessageWrapper};
pub use api::{LongPollServer, PollResponse, Update, VkApiClient};
pub use bot_adapter::VkBotAdapter;
pub use config::VkConfig;
pub use error::VkError;
pub use keyboard::{directive_json, empty_keyboard_json, keyboard_json};
pub use longpoll::{incoming_messages, LongPoll, VkMessage};
pub use runner::{group_by_session, handle_batch, run_longpoll};
