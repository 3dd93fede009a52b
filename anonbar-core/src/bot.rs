//! Bot abstraction for sending messages.
//!
//! [`Bot`] is transport-agnostic; `anonbar_telegram::TelegramBotApi` implements it over HTTP.

use crate::error::Result;
use crate::types::{ApiResponse, SendMessageRequest};
use async_trait::async_trait;

/// Sends a prepared `sendMessage` body and returns the decoded response envelope.
///
/// Implementations turn `ok: false` envelopes into [`crate::BotError::Api`], so a returned
/// [`ApiResponse`] always has `ok == true`.
#[async_trait]
pub trait Bot: Send + Sync {
    async fn send_message(&self, request: &SendMessageRequest) -> Result<ApiResponse>;
}
