//! Implements [`quiz_core::Bot`] over `messages.send`.

use async_trait::async_trait;
use quiz_core::{Bot, Chat, QuizError, Reply, Result};
use tracing::debug;

use crate::api::VkApiClient;
use crate::keyboard::directive_json;

pub struct VkBotAdapter {
    api: VkApiClient,
}

impl VkBotAdapter {
    pub fn new(api: VkApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Bot for VkBotAdapter {
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        let keyboard =
            directive_json(&reply.keyboard).map_err(|e| QuizError::SendFailure(e.to_string()))?;
        let message_id = self
            .api
            .send_message(chat.id, &reply.text, keyboard.as_deref())
            .await?;
        debug!(peer_id = chat.id, message_id, "VK message sent");
        Ok(())
    }
}
