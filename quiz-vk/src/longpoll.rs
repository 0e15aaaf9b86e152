//! Bots Long Poll session: keeps the server key and `ts`, recovers from `failed` replies.

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::api::{LongPollServer, Update, VkApiClient};
use crate::error::VkError;

/// A `message_new` message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VkMessage {
    #[serde(default)]
    pub id: i64,
    pub from_id: i64,
    pub peer_id: i64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub payload: Option<String>,
    #[serde(default)]
    pub date: i64,
}

#[derive(Debug, Deserialize)]
struct MessageNew {
    message: VkMessage,
}

/// Extracts user messages from a batch of updates. Other update types and community senders are skipped.
pub fn incoming_messages(updates: Vec<Update>) -> Vec<VkMessage> {
    updates
        .into_iter()
        .filter(|update| update.kind == "message_new")
        .filter_map(
            |update| match serde_json::from_value::<MessageNew>(update.object) {
                Ok(new) => Some(new.message),
                Err(e) => {
                    warn!(error = %e, "Skipping malformed message_new update");
                    None
                }
            },
        )
        .filter(|message| message.from_id > 0)
        .collect()
}

pub struct LongPoll {
    api: VkApiClient,
    group_id: u64,
    wait_secs: u64,
    server: Option<LongPollServer>,
}

impl LongPoll {
    pub fn new(api: VkApiClient, group_id: u64, wait_secs: u64) -> Self {
        Self {
            api,
            group_id,
            wait_secs,
            server: None,
        }
    }

    async fn fetch_server(&self) -> Result<LongPollServer, VkError> {
        let server = self.api.get_long_poll_server(self.group_id).await?;
        info!(group_id = self.group_id, ts = %server.ts, "VK long poll server obtained");
        Ok(server)
    }

    /// Waits for the next batch of messages, in arrival order.
    ///
    /// A `failed` reply yields an empty batch after fixing the session:
    /// 1 moves `ts` forward, 2 fetches a new key, 3 starts over with a new key and `ts`.
    pub async fn next_batch(&mut self) -> Result<Vec<VkMessage>, VkError> {
        let mut server = match self.server.take() {
            Some(server) => server,
            None => self.fetch_server().await?,
        };

        let response = match self.api.poll(&server, self.wait_secs).await {
            Ok(response) => response,
            Err(e) => {
                self.server = Some(server);
                return Err(e);
            }
        };

        match response.failed {
            None => {
                if let Some(ts) = response.ts {
                    server.ts = ts;
                }
                self.server = Some(server);
                let messages = incoming_messages(response.updates);
                debug!(messages = messages.len(), "VK long poll batch");
                Ok(messages)
            }
            Some(1) => {
                warn!("VK long poll history outdated, moving ts forward");
                if let Some(ts) = response.ts {
                    server.ts = ts;
                }
                self.server = Some(server);
                Ok(Vec::new())
            }
            Some(2) => {
                warn!("VK long poll key expired, requesting a new one");
                let fresh = self.fetch_server().await?;
                server.key = fresh.key;
                server.server = fresh.server;
                self.server = Some(server);
                Ok(Vec::new())
            }
            Some(code) => {
                warn!(failed = code, "VK long poll session lost, starting over");
                self.server = Some(self.fetch_server().await?);
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn update(kind: &str, object: serde_json::Value) -> Update {
        Update {
            kind: kind.to_string(),
            object,
        }
    }

    #[test]
    fn test_incoming_messages_filters_updates() {
        let updates = vec![
            update(
                "message_new",
                json!({"message": {"id": 1, "from_id": 10, "peer_id": 10, "text": "Привет", "date": 1700000000}}),
            ),
            update("message_typing_state", json!({"from_id": 10})),
            update("message_new", json!({"message": {"from_id": -5, "peer_id": 10, "text": "от сообщества"}})),
            update("message_new", json!({"unexpected": true})),
            update(
                "message_new",
                json!({"message": {"id": 2, "from_id": 11, "peer_id": 11, "text": "", "payload": "{\"command\":\"start\"}"}}),
            ),
        ];

        let messages = incoming_messages(updates);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "Привет");
        assert_eq!(messages[1].from_id, 11);
        assert_eq!(messages[1].payload.as_deref(), Some(r#"{"command":"start"}"#));
    }
}
