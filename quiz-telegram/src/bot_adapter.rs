//! Wraps teloxide::Bot and implements [`quiz_core::Bot`], rendering keyboard directives as reply keyboards.

use async_trait::async_trait;
use quiz_core::{Bot as CoreBot, Chat, Keyboard, KeyboardDirective, QuizError, Reply, Result};
use teloxide::prelude::*;
use teloxide::types::{ChatId, KeyboardButton, KeyboardMarkup, KeyboardRemove};

/// Renders a core keyboard as a Telegram reply keyboard, row for row.
pub fn keyboard_markup(keyboard: &Keyboard) -> KeyboardMarkup {
    KeyboardMarkup::new(keyboard.rows.iter().map(|row| {
        row.iter()
            .map(|button| KeyboardButton::new(button.label.clone()))
            .collect::<Vec<_>>()
    }))
}

/// Thin wrapper around teloxide::Bot that implements quiz-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        let request = self.bot.send_message(ChatId(chat.id), reply.text.clone());
        let sent = match &reply.keyboard {
            KeyboardDirective::Keep => request.await,
            KeyboardDirective::Show(keyboard) => {
                request.reply_markup(keyboard_markup(keyboard)).await
            }
            KeyboardDirective::Hide => request.reply_markup(KeyboardRemove::new()).await,
        };
        sent.map_err(|e| QuizError::SendFailure(e.to_string()))?;
        Ok(())
    }
}
