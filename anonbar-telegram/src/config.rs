//! Minimal bot configuration: token, target chat, API URL, timeout and log path.
//! Loaded from BOT_TOKEN, CHAT_ID, TELEGRAM_API_URL, TELEGRAM_TIMEOUT_SECS and LOG_FILE.

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::time::Duration;

use crate::mask::mask_token;

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_LOG_FILE: &str = "logs/anonbar.log";

pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    /// Bot API base URL; `None` means [`DEFAULT_API_URL`]. Tests point this at a mock server.
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
    /// Total request timeout. `None` keeps reqwest's default, which never times out.
    pub timeout: Option<Duration>,
}

impl TelegramConfig {
    /// Loads from the environment. `token` and `chat_id`, when given, take precedence over
    /// BOT_TOKEN and CHAT_ID.
    pub fn load(token: Option<String>, chat_id: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let chat_id = match chat_id {
            Some(c) => c,
            None => env::var("CHAT_ID").map_err(|_| anyhow::anyhow!("CHAT_ID not set"))?,
        };
        if bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if chat_id.trim().is_empty() {
            anyhow::bail!("CHAT_ID is empty");
        }

        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let timeout = match env::var("TELEGRAM_TIMEOUT_SECS") {
            Ok(s) => Some(Duration::from_secs(s.trim().parse().with_context(|| {
                format!("TELEGRAM_TIMEOUT_SECS must be a whole number of seconds, got {s:?}")
            })?)),
            Err(_) => None,
        };
        let log_file = Some(env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string()));

        Ok(Self {
            bot_token,
            chat_id,
            telegram_api_url,
            log_file,
            timeout,
        })
    }

    /// Loads with no overrides.
    pub fn from_env() -> Result<Self> {
        Self::load(None, None)
    }

    /// Token and chat only; everything else unset.
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            telegram_api_url: None,
            log_file: None,
            timeout: None,
        }
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.telegram_api_url = Some(url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Base URL without a trailing slash.
    pub fn api_base_url(&self) -> &str {
        self.telegram_api_url
            .as_deref()
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &mask_token(&self.bot_token))
            .field("chat_id", &self.chat_id)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("log_file", &self.log_file)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 6] = [
        "BOT_TOKEN",
        "CHAT_ID",
        "TELEGRAM_API_URL",
        "TELOXIDE_API_URL",
        "TELEGRAM_TIMEOUT_SECS",
        "LOG_FILE",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_new() {
        let config = TelegramConfig::new("test_token", "42");
        assert_eq!(config.bot_token, "test_token");
        assert_eq!(config.chat_id, "42");
        assert!(config.telegram_api_url.is_none());
        assert!(config.log_file.is_none());
        assert!(config.timeout.is_none());
        assert_eq!(config.api_base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_api_base_url_trims_trailing_slash() {
        let config = TelegramConfig::new("t", "1").with_api_url("http://127.0.0.1:8081/");
        assert_eq!(config.api_base_url(), "http://127.0.0.1:8081");
    }

    #[test]
    #[serial]
    fn test_load_with_defaults() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");
        env::set_var("CHAT_ID", "-100123");

        let config = TelegramConfig::from_env().unwrap();
        assert_eq!(config.bot_token, "env_token");
        assert_eq!(config.chat_id, "-100123");
        assert!(config.telegram_api_url.is_none());
        assert!(config.timeout.is_none());
        assert_eq!(config.log_file.as_deref(), Some(DEFAULT_LOG_FILE));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_overrides_and_optional_vars() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");
        env::set_var("CHAT_ID", "1");
        env::set_var("TELOXIDE_API_URL", "http://localhost:9000");
        env::set_var("TELEGRAM_TIMEOUT_SECS", "15");
        env::set_var("LOG_FILE", "/tmp/anonbar-test.log");

        let config =
            TelegramConfig::load(Some("cli_token".to_string()), Some("2".to_string())).unwrap();
        assert_eq!(config.bot_token, "cli_token");
        assert_eq!(config.chat_id, "2");
        assert_eq!(config.api_base_url(), "http://localhost:9000");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.log_file.as_deref(), Some("/tmp/anonbar-test.log"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_missing_required() {
        clear_env();
        let err = TelegramConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("BOT_TOKEN"));

        env::set_var("BOT_TOKEN", "env_token");
        let err = TelegramConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("CHAT_ID"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_rejects_bad_timeout() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");
        env::set_var("CHAT_ID", "1");
        env::set_var("TELEGRAM_TIMEOUT_SECS", "soon");
        assert!(TelegramConfig::from_env().is_err());
        clear_env();
    }

    #[test]
    fn test_debug_masks_token() {
        let config = TelegramConfig::new("1234567890:ABCdefGHIjklMNO", "1");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("ABCdefGHIjklMNO"));
        assert!(debug.contains("1234567***lMNO"));
    }
}
