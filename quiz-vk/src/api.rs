//! Minimal VK API client: method calls over HTTPS form posts and Bots Long Poll requests.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::time::Duration;
use tracing::debug;

use crate::config::VkConfig;
use crate::error::VkError;

/// Extra time on top of the long poll wait before an HTTP request is abandoned.
const HTTP_TIMEOUT_MARGIN_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    response: Option<T>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error_code: i64,
    #[serde(default)]
    error_msg: String,
}

/// VK sends `ts` as a string from the API and as a number in some long poll replies.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TsValue {
    Text(String),
    Number(i64),
}

impl TsValue {
    fn into_string(self) -> String {
        match self {
            TsValue::Text(s) => s,
            TsValue::Number(n) => n.to_string(),
        }
    }
}

fn ts_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    TsValue::deserialize(deserializer).map(TsValue::into_string)
}

fn optional_ts_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<TsValue>::deserialize(deserializer).map(|ts| ts.map(TsValue::into_string))
}

/// Long poll server address returned by `groups.getLongPollServer`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LongPollServer {
    pub key: String,
    pub server: String,
    #[serde(deserialize_with = "ts_string")]
    pub ts: String,
}

/// One long poll update; only `message_new` is interpreted.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub object: serde_json::Value,
}

/// Reply of an `a_check` request.
#[derive(Debug, Clone, Deserialize)]
pub struct PollResponse {
    #[serde(default, deserialize_with = "optional_ts_string")]
    pub ts: Option<String>,
    #[serde(default)]
    pub updates: Vec<Update>,
    pub failed: Option<u8>,
}

#[derive(Debug, Clone)]
pub struct VkApiClient {
    client: Client,
    api_url: String,
    token: String,
    version: String,
}

impl VkApiClient {
    pub fn new(config: &VkConfig) -> Result<Self, VkError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(
                config.long_poll_wait_secs + HTTP_TIMEOUT_MARGIN_SECS,
            ))
            .build()?;
        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            token: config.token.clone(),
            version: config.api_version.clone(),
        })
    }

    /// Calls an API method and unwraps the `response` / `error` envelope.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &[(&str, String)],
    ) -> Result<T, VkError> {
        let url = format!("{}/{}", self.api_url, method);
        let mut form: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        form.push(("access_token", self.token.as_str()));
        form.push(("v", self.version.as_str()));

        debug!(method = %method, "VK API call");
        let response = self
            .client
            .post(&url)
            .form(&form)
            .send()
            .await?
            .error_for_status()?;
        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|e| VkError::Decode(e.to_string()))?;

        match envelope {
            ApiEnvelope {
                error: Some(error), ..
            } => Err(VkError::Api {
                code: error.error_code,
                message: error.error_msg,
            }),
            ApiEnvelope {
                response: Some(response),
                ..
            } => Ok(response),
            _ => Err(VkError::Decode(format!(
                "{} returned neither response nor error",
                method
            ))),
        }
    }

    pub async fn get_long_poll_server(&self, group_id: u64) -> Result<LongPollServer, VkError> {
        self.call(
            "groups.getLongPollServer",
            &[("group_id", group_id.to_string())],
        )
        .await
    }

    /// Sends a message to `peer_id`; `keyboard` is the keyboard JSON, if any. Returns the message id.
    pub async fn send_message(
        &self,
        peer_id: i64,
        text: &str,
        keyboard: Option<&str>,
    ) -> Result<i64, VkError> {
        let mut params = vec![
            ("peer_id", peer_id.to_string()),
            ("message", text.to_string()),
            ("random_id", rand::random::<i32>().to_string()),
        ];
        if let Some(keyboard) = keyboard {
            params.push(("keyboard", keyboard.to_string()));
        }
        self.call("messages.send", &params).await
    }

    /// Waits up to `wait_secs` for updates after `server.ts`.
    pub async fn poll(
        &self,
        server: &LongPollServer,
        wait_secs: u64,
    ) -> Result<PollResponse, VkError> {
        let wait = wait_secs.to_string();
        let response = self
            .client
            .get(&server.server)
            .query(&[
                ("act", "a_check"),
                ("key", server.key.as_str()),
                ("ts", server.ts.as_str()),
                ("wait", wait.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;
        response
            .json()
            .await
            .map_err(|e| VkError::Decode(e.to_string()))
    }
}
