//! Bot abstraction for delivering replies.
//!
//! [`Bot`] is transport-agnostic; quiz-telegram and quiz-vk implement it.

use crate::error::Result;
use crate::types::{Chat, Reply};
use async_trait::async_trait;

/// Sends replies to a chat. Implementations map to a transport (Telegram, VK).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends one reply, applying its keyboard directive. Delivery errors are [`crate::QuizError::SendFailure`].
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()>;
}
