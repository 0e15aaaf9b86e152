//! REPL runner: converts teloxide messages to core messages and passes them to the QuizHandler.
//!
//! teloxide dispatches updates of one chat sequentially and different chats concurrently, so
//! a chat's events reach the handler in arrival order. Handling is awaited in place for that reason.

use anyhow::Result;
use quiz_core::ToCoreMessage;
use quiz_engine::QuizHandler;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Starts long polling with the given teloxide Bot; every text message goes to `handler`.
/// Handler errors are logged and never stop the loop.
#[instrument(skip(bot, handler))]
pub async fn run_repl(bot: teloxide::Bot, handler: QuizHandler) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Telegram bot identity resolved");
        }
    }

    teloxide::repl(bot, move |msg: teloxide::types::Message| {
        let handler = handler.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            if msg.text().is_none() {
                debug!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Ignoring non-text message"
                );
                return respond(());
            }

            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_id = %core_msg.id,
                "Received message"
            );

            if let Err(e) = handler.handle(&core_msg).await {
                error!(error = %e, chat_id = core_msg.chat.id, "Quiz handler failed");
            }

            respond(())
        }
    })
    .await;

    Ok(())
}
