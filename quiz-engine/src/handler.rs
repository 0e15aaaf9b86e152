//! Drives one incoming message through the engine: read session, transition, write session, send replies.
//!
//! Both adapters call [`QuizHandler::handle`]; they are responsible for handing over one
//! session's messages in arrival order.

use quiz_core::{Bot, Chat, Message, QuizError, Reply, Result};
use session_store::SessionStore;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::engine::ConversationEngine;
use crate::event::Event;
use crate::state::{Phase, SessionState, SessionUpdate};

#[derive(Clone)]
pub struct QuizHandler {
    engine: ConversationEngine,
    store: Arc<dyn SessionStore>,
    bot: Arc<dyn Bot>,
}

impl QuizHandler {
    pub fn new(engine: ConversationEngine, store: Arc<dyn SessionStore>, bot: Arc<dyn Bot>) -> Self {
        Self { engine, store, bot }
    }

    /// Processes one message.
    ///
    /// The store update is applied before any reply is sent. If the store fails, the user only
    /// gets the "try again" text and the session is left as it was. Send failures are logged and
    /// not retried. The remaining replies are still sent, so a failed reveal does not hide the
    /// stored next question; the first failure is returned.
    #[instrument(skip(self, message), fields(session = %message.session_key()))]
    pub async fn handle(&self, message: &Message) -> Result<Phase> {
        let key = message.session_key();
        let event = Event::from_message(message, self.engine.texts());

        let pending = match self.store.get(&key).await {
            Ok(pending) => pending,
            Err(e) => return Err(self.abort(&message.chat, e.into()).await),
        };
        let state = SessionState::from_pending(pending);

        info!(
            event = %event,
            has_pending = state.pending_question().is_some(),
            "step: transition"
        );

        let transition = {
            let mut rng = rand::thread_rng();
            self.engine.transition(&state, event, &mut rng)
        };

        let stored = match &transition.update {
            SessionUpdate::Keep => Ok(()),
            SessionUpdate::Set(question) => self.store.set(&key, question).await,
            SessionUpdate::Clear => self.store.clear(&key).await,
        };
        if let Err(e) = stored {
            return Err(self.abort(&message.chat, e.into()).await);
        }

        let mut send_error = None;
        for reply in &transition.replies {
            if let Err(e) = self.send(&message.chat, reply).await {
                send_error.get_or_insert(e);
            }
        }
        if let Some(e) = send_error {
            return Err(e);
        }

        info!(
            phase = ?transition.phase,
            replies = transition.replies.len(),
            "step: message handled"
        );
        Ok(transition.phase)
    }

    async fn send(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        self.bot.send_reply(chat, reply).await.map_err(|e| {
            warn!(error = %e, chat_id = chat.id, "Failed to send reply");
            e
        })
    }

    /// Logs a store failure and tells the user to retry; returns the error for the caller.
    async fn abort(&self, chat: &Chat, e: QuizError) -> QuizError {
        error!(error = %e, chat_id = chat.id, "Session store unavailable, event aborted");
        let reply = Reply::plain(&self.engine.texts().try_again);
        let _ = self.send(chat, &reply).await;
        e
    }
}
