//! Adapter from VK long poll messages to quiz_core types.

use chrono::{DateTime, Utc};
use quiz_core::{Chat, Message, Platform, ToCoreMessage, User};
use quiz_engine::START_COMMAND;
use serde::Deserialize;

use crate::longpoll::VkMessage;

#[derive(Debug, Deserialize)]
struct ButtonPayload {
    command: Option<String>,
}

/// True for the payload VK attaches to the "Start" button of a new dialog.
pub fn is_start_payload(payload: Option<&str>) -> bool {
    payload
        .and_then(|p| serde_json::from_str::<ButtonPayload>(p).ok())
        .and_then(|p| p.command)
        .is_some_and(|command| command == "start")
}

/// Wraps a VK message for conversion to core [`Message`]. Replies go to `peer_id`.
pub struct VkMessageWrapper<'a>(pub &'a VkMessage);

impl<'a> ToCoreMessage for VkMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let content = if is_start_payload(self.0.payload.as_deref()) {
            START_COMMAND.to_string()
        } else {
            self.0.text.clone()
        };
        Message {
            id: self.0.id.to_string(),
            platform: Platform::Vk,
            user: User {
                id: self.0.from_id,
                username: None,
                first_name: None,
                last_name: None,
            },
            chat: Chat {
                id: self.0.peer_id,
                chat_type: if self.0.peer_id == self.0.from_id {
                    "private".to_string()
                } else {
                    "group".to_string()
                },
            },
            content,
            created_at: DateTime::<Utc>::from_timestamp(self.0.date, 0).unwrap_or_else(Utc::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::SessionKey;

    fn vk_message(text: &str, payload: Option<&str>) -> VkMessage {
        VkMessage {
            id: 7,
            from_id: 100,
            peer_id: 100,
            text: text.to_string(),
            payload: payload.map(str::to_string),
            date: 1_700_000_000,
        }
    }

    #[test]
    fn test_to_core_keeps_text_and_keys_by_sender() {
        let msg = VkMessageWrapper(&vk_message("Новый вопрос", None)).to_core();
        assert_eq!(msg.content, "Новый вопрос");
        assert_eq!(msg.chat.id, 100);
        assert_eq!(msg.chat.chat_type, "private");
        assert_eq!(msg.session_key(), SessionKey::new(Platform::Vk, 100));
        assert_eq!(msg.created_at.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_start_payload_becomes_start_command() {
        let msg = VkMessageWrapper(&vk_message("Начать", Some(r#"{"command":"start"}"#))).to_core();
        assert_eq!(msg.content, START_COMMAND);
    }

    #[test]
    fn test_is_start_payload() {
        assert!(is_start_payload(Some(r#"{"command":"start"}"#)));
        assert!(!is_start_payload(Some(r#"{"command":"other"}"#)));
        assert!(!is_start_payload(Some("not json")));
        assert!(!is_start_payload(None));
    }
}
