//! Maps callback identifiers to the three canned messages and sends them to the configured chat.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::bot::Bot;
use crate::error::Result;
use crate::types::{ApiResponse, MenuOption, ReplyMarkup, SendMessageRequest};

/// Message dispatcher bound to a single chat. Every call is independent; nothing is cached.
pub struct Dispatcher {
    bot: Arc<dyn Bot>,
    chat_id: String,
}

impl Dispatcher {
    pub fn new(bot: Arc<dyn Bot>, chat_id: impl Into<String>) -> Self {
        Self {
            bot,
            chat_id: chat_id.into(),
        }
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Builds the `sendMessage` body for `option`. Only [`MenuOption::Start`] carries the menu keyboard.
    pub fn build_request(&self, option: MenuOption) -> SendMessageRequest {
        let request = SendMessageRequest::new(self.chat_id.clone(), option.response_text());
        match option {
            MenuOption::Start => request.with_reply_markup(ReplyMarkup::main_menu()),
            MenuOption::ContactAdmin | MenuOption::JoinChannel => request,
        }
    }

    /// Sends the welcome text with the three-button menu.
    pub async fn send_start_message(&self) -> Result<ApiResponse> {
        self.dispatch_option(MenuOption::Start).await
    }

    pub async fn send_contact_admin(&self) -> Result<ApiResponse> {
        self.dispatch_option(MenuOption::ContactAdmin).await
    }

    pub async fn send_join_channel(&self) -> Result<ApiResponse> {
        self.dispatch_option(MenuOption::JoinChannel).await
    }

    /// Sends the message for an already-parsed option.
    #[instrument(skip(self), fields(chat_id = %self.chat_id))]
    pub async fn dispatch_option(&self, option: MenuOption) -> Result<ApiResponse> {
        let request = self.build_request(option);
        let response = self.bot.send_message(&request).await?;
        info!(
            option = %option,
            message_id = ?response.message_id(),
            "Sent menu message"
        );
        Ok(response)
    }

    /// Routes `callback_data` by exact match. Unrecognized identifiers send nothing and
    /// return `Ok(None)`; use [`MenuOption::from_str`](std::str::FromStr) for a strict parse.
    pub async fn dispatch(&self, callback_data: &str) -> Result<Option<ApiResponse>> {
        match MenuOption::from_callback(callback_data) {
            Some(option) => self.dispatch_option(option).await.map(Some),
            None => {
                warn!(callback_data = %callback_data, "Unrecognized callback, ignoring");
                Ok(None)
            }
        }
    }
}
