//! Core types: platform, user, chat, incoming message, session key, and outgoing reply with keyboard directive.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chat platform a message arrived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Telegram,
    Vk,
}

impl Platform {
    /// Short prefix used in session keys.
    pub fn prefix(&self) -> &'static str {
        match self {
            Platform::Telegram => "tg",
            Platform::Vk => "vk",
        }
    }
}

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (dialog) identity; `id` is where replies are delivered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A single incoming message, already translated from the platform type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub platform: Platform,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Key of the quiz session this message belongs to.
    /// Telegram sessions follow the chat, VK sessions follow the sender.
    pub fn session_key(&self) -> SessionKey {
        match self.platform {
            Platform::Telegram => SessionKey::new(Platform::Telegram, self.chat.id),
            Platform::Vk => SessionKey::new(Platform::Vk, self.user.id),
        }
    }
}

/// Identifies one user's session across platforms sharing a store, e.g. `tg:42`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionKey {
    pub platform: Platform,
    pub user_id: i64,
}

impl SessionKey {
    pub fn new(platform: Platform, user_id: i64) -> Self {
        Self { platform, user_id }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.platform.prefix(), self.user_id)
    }
}

/// What a keyboard button does; adapters may style buttons by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    NewQuestion,
    End,
    GiveUp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub kind: ButtonKind,
}

/// Reply keyboard as rows of buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    /// All labels, row by row.
    pub fn labels(&self) -> Vec<Vec<&str>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|b| b.label.as_str()).collect())
            .collect()
    }
}

/// What to do with the user's keyboard when a reply is delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardDirective {
    /// Leave whatever keyboard is currently shown.
    Keep,
    Show(Keyboard),
    Hide,
}

/// One outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: KeyboardDirective,
}

impl Reply {
    pub fn new(text: impl Into<String>, keyboard: KeyboardDirective) -> Self {
        Self {
            text: text.into(),
            keyboard,
        }
    }

    /// Reply that leaves the keyboard untouched.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, KeyboardDirective::Keep)
    }
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}
