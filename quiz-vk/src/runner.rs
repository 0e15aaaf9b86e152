//! Long poll runner: fetches batches and feeds them to the QuizHandler.
//!
//! Within a batch, messages of one session are handled in arrival order and different sessions
//! concurrently. The next poll starts only after the whole batch is done.

use anyhow::Result;
use futures::future::join_all;
use quiz_core::{Message, SessionKey, ToCoreMessage};
use quiz_engine::QuizHandler;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::adapters::VkMessageWrapper;
use crate::longpoll::{LongPoll, VkMessage};

const RETRY_DELAY: Duration = Duration::from_secs(3);

/// Groups messages by session, keeping arrival order inside each group and first-seen order of groups.
pub fn group_by_session(messages: impl IntoIterator<Item = Message>) -> Vec<Vec<Message>> {
    let mut index: HashMap<SessionKey, usize> = HashMap::new();
    let mut groups: Vec<Vec<Message>> = Vec::new();
    for message in messages {
        let key = message.session_key();
        match index.get(&key).copied() {
            Some(i) => groups[i].push(message),
            None => {
                index.insert(key, groups.len());
                groups.push(vec![message]);
            }
        }
    }
    groups
}

/// Handles one poll batch. Messages without text are skipped; handler errors are logged.
pub async fn handle_batch(handler: &QuizHandler, batch: Vec<VkMessage>) {
    let messages = batch
        .iter()
        .map(|m| VkMessageWrapper(m).to_core())
        .filter(|m| {
            let keep = !m.content.trim().is_empty();
            if !keep {
                debug!(user_id = m.user.id, "Ignoring VK message without text");
            }
            keep
        });

    join_all(group_by_session(messages).into_iter().map(|group| async move {
        for message in group {
            info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                message_id = %message.id,
                "Received message"
            );
            if let Err(e) = handler.handle(&message).await {
                error!(error = %e, user_id = message.user.id, "Quiz handler failed");
            }
        }
    }))
    .await;
}

/// Polls until Ctrl-C. Transport errors are logged and polling resumes after a short delay.
#[instrument(skip(poll, handler))]
pub async fn run_longpoll(mut poll: LongPoll, handler: QuizHandler) -> Result<()> {
    info!("VK long poll started");
    loop {
        let batch = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl-C received, stopping VK long poll");
                return Ok(());
            }
            batch = poll.next_batch() => batch,
        };

        match batch {
            Ok(batch) => handle_batch(&handler, batch).await,
            Err(e) => {
                error!(error = %e, "VK long poll failed, retrying");
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }
    }
}
