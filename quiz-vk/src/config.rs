//! VK config: community token, group id, API endpoint and long poll wait.
//! Loaded from VK_TOKEN, VK_GROUP_ID, VK_API_URL, VK_API_VERSION, VK_LONG_POLL_WAIT_SECS.

use anyhow::Result;
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.vk.com/method";
pub const DEFAULT_API_VERSION: &str = "5.131";
pub const DEFAULT_LONG_POLL_WAIT_SECS: u64 = 25;

#[derive(Debug, Clone)]
pub struct VkConfig {
    /// VK_TOKEN (community access token)
    pub token: String,
    /// VK_GROUP_ID
    pub group_id: u64,
    /// VK_API_URL, without trailing slash
    pub api_url: String,
    /// VK_API_VERSION
    pub api_version: String,
    /// VK_LONG_POLL_WAIT_SECS
    pub long_poll_wait_secs: u64,
}

impl VkConfig {
    /// Loads from environment variables. `token` overrides VK_TOKEN if provided.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let token = match token {
            Some(token) => token,
            None => env::var("VK_TOKEN").map_err(|_| anyhow::anyhow!("VK_TOKEN not set"))?,
        };
        let group_id = env::var("VK_GROUP_ID")
            .map_err(|_| anyhow::anyhow!("VK_GROUP_ID not set"))?
            .trim()
            .parse::<u64>()
            .map_err(|e| anyhow::anyhow!("VK_GROUP_ID must be a positive integer: {}", e))?;
        let api_url = env::var("VK_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let api_version =
            env::var("VK_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());
        let long_poll_wait_secs = env::var("VK_LONG_POLL_WAIT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_LONG_POLL_WAIT_SECS);

        Ok(Self {
            token,
            group_id,
            api_url,
            api_version,
            long_poll_wait_secs,
        })
    }

    /// Config with defaults for everything except token and group.
    pub fn new(token: String, group_id: u64) -> Self {
        Self {
            token,
            group_id,
            api_url: DEFAULT_API_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            long_poll_wait_secs: DEFAULT_LONG_POLL_WAIT_SECS,
        }
    }

    /// Points the client at another API endpoint.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            anyhow::bail!("VK token is empty");
        }
        if self.group_id == 0 {
            anyhow::bail!("VK_GROUP_ID must be a positive integer");
        }
        if reqwest::Url::parse(&self.api_url).is_err() {
            anyhow::bail!("VK_API_URL is not a valid URL: {}", self.api_url);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "VK_TOKEN",
            "VK_GROUP_ID",
            "VK_API_URL",
            "VK_API_VERSION",
            "VK_LONG_POLL_WAIT_SECS",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        env::set_var("VK_TOKEN", "vk_token");
        env::set_var("VK_GROUP_ID", "12345");

        let config = VkConfig::from_env(None).unwrap();
        assert_eq!(config.token, "vk_token");
        assert_eq!(config.group_id, 12345);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
        assert_eq!(config.long_poll_wait_secs, 25);
        assert!(config.validate().is_ok());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_or_bad_group_id() {
        clear_env();
        assert!(VkConfig::from_env(Some("t".to_string())).is_err());

        env::set_var("VK_GROUP_ID", "-5");
        assert!(VkConfig::from_env(Some("t".to_string())).is_err());

        env::set_var("VK_GROUP_ID", "0");
        let config = VkConfig::from_env(Some("t".to_string())).unwrap();
        assert!(config.validate().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_api_url() {
        clear_env();
        env::set_var("VK_GROUP_ID", "1");
        env::set_var("VK_API_URL", "not a url");

        let config = VkConfig::from_env(Some("t".to_string())).unwrap();
        assert!(config.validate().is_err());

        clear_env();
    }

    #[test]
    fn test_with_api_url_trims_slash() {
        let config = VkConfig::new("t".to_string(), 1).with_api_url("http://127.0.0.1:1234/");
        assert_eq!(config.api_url, "http://127.0.0.1:1234");
    }
}
