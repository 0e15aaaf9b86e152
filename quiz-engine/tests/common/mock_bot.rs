//! Mock implementation of [`quiz_core::Bot`] for integration tests.
//!
//! Records every `send_reply` so tests can assert on the reply texts and keyboards without a transport.

use async_trait::async_trait;
use quiz_core::{Bot, Chat, KeyboardDirective, QuizError, Reply, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// One recorded call to `send_reply(chat, reply)`.
#[derive(Debug, Clone)]
pub struct SentReply {
    pub chat_id: i64,
    pub reply: Reply,
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentReply>>,
    /// When set, every send fails with `SendFailure`.
    fail: AtomicBool,
    /// When set, replies that leave the keyboard untouched fail with `SendFailure`.
    fail_plain: AtomicBool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn set_failing_plain(&self, fail: bool) {
        self.fail_plain.store(fail, Ordering::SeqCst);
    }

    /// Returns and clears the recorded replies.
    pub fn take(&self) -> Vec<SentReply> {
        std::mem::take(&mut *self.sent.lock().unwrap())
    }

    pub fn texts(&self) -> Vec<String> {
        self.take().into_iter().map(|s| s.reply.text).collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        let plain = reply.keyboard == KeyboardDirective::Keep;
        if self.fail.load(Ordering::SeqCst) || (plain && self.fail_plain.load(Ordering::SeqCst)) {
            return Err(QuizError::SendFailure("mock send failure".to_string()));
        }
        self.sent.lock().unwrap().push(SentReply {
            chat_id: chat.id,
            reply: reply.clone(),
        });
        Ok(())
    }
}
