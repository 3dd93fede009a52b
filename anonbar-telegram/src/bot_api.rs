//! [`anonbar_core::Bot`] over the Telegram Bot API: one JSON POST per message via reqwest.

use anonbar_core::{ApiResponse, Bot, BotError, Result, SendMessageRequest};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, instrument, warn};

use crate::config::TelegramConfig;
use crate::mask::mask_token;

/// HTTP client bound to one bot token and API base URL.
pub struct TelegramBotApi {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl TelegramBotApi {
    /// Builds the reqwest client; applies `config.timeout` when set.
    pub fn new(config: &TelegramConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BotError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, config))
    }

    /// Uses an existing reqwest client (shared connection pool, custom TLS).
    pub fn with_client(client: reqwest::Client, config: &TelegramConfig) -> Self {
        Self {
            client,
            base_url: config.api_base_url().to_string(),
            token: config.bot_token.clone(),
        }
    }

    /// `<base>/bot<token>/<method>`.
    pub fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }
}

/// Maps an HTTP status and raw body to the decoded envelope or a typed error.
pub(crate) fn decode_response(status: StatusCode, body: &str) -> Result<ApiResponse> {
    match serde_json::from_str::<ApiResponse>(body) {
        Ok(resp) if resp.ok && status.is_success() => Ok(resp),
        Ok(resp) => Err(BotError::api(
            resp.error_code.or(Some(i64::from(status.as_u16()))),
            resp.description,
        )),
        Err(_) if !status.is_success() => Err(BotError::Api {
            code: i64::from(status.as_u16()),
            description: status
                .canonical_reason()
                .unwrap_or("non-JSON error response")
                .to_string(),
        }),
        Err(e) => Err(BotError::InvalidResponse(format!(
            "sendMessage returned {} with undecodable body: {}",
            status, e
        ))),
    }
}

#[async_trait]
impl Bot for TelegramBotApi {
    #[instrument(skip(self, request), fields(chat_id = %request.chat_id))]
    async fn send_message(&self, request: &SendMessageRequest) -> Result<ApiResponse> {
        debug!(
            base_url = %self.base_url,
            token = %mask_token(&self.token),
            has_markup = request.reply_markup.is_some(),
            "POST sendMessage"
        );

        // without_url: reqwest errors otherwise embed the token-bearing URL.
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(request)
            .send()
            .await
            .map_err(|e| BotError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BotError::Transport(e.without_url().to_string()))?;

        decode_response(status, &body).map_err(|e| {
            warn!(status = %status, error = %e, "sendMessage failed");
            e
        })
    }
}
