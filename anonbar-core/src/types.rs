//! Core types: menu options, sendMessage request body, reply markup, and the Telegram response envelope.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BotError;

/// One of the three buttons of the start menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOption {
    Start,
    ContactAdmin,
    JoinChannel,
}

impl MenuOption {
    /// All options in keyboard order.
    pub const ALL: [MenuOption; 3] = [
        MenuOption::Start,
        MenuOption::ContactAdmin,
        MenuOption::JoinChannel,
    ];

    /// Callback identifier carried by the option's button.
    pub fn callback_data(self) -> &'static str {
        match self {
            MenuOption::Start => "start",
            MenuOption::ContactAdmin => "contact_admin",
            MenuOption::JoinChannel => "join_channel",
        }
    }

    /// Button label shown in the keyboard.
    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Start => "Start",
            MenuOption::ContactAdmin => "Contact Admin",
            MenuOption::JoinChannel => "Join Our Telegram Channel",
        }
    }

    /// Message text sent when the option is selected.
    pub fn response_text(self) -> &'static str {
        match self {
            MenuOption::Start => "Welcome! Please choose an option below:",
            MenuOption::ContactAdmin => "You can contact the admin at: @mehedi_exx",
            MenuOption::JoinChannel => "Join our Telegram channel here: https://t.me/Anonbar",
        }
    }

    /// Exact-match lookup; `None` for anything outside the three identifiers.
    pub fn from_callback(data: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.callback_data() == data)
    }

    pub fn button(self) -> KeyboardButton {
        KeyboardButton {
            text: self.label().to_string(),
            callback_data: self.callback_data().to_string(),
        }
    }
}

impl FromStr for MenuOption {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_callback(s).ok_or_else(|| BotError::UnrecognizedCallback(s.to_string()))
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.callback_data())
    }
}

/// Button document inside `reply_markup.keyboard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardButton {
    pub text: String,
    pub callback_data: String,
}

/// Keyboard attached to a message: rows of buttons plus display hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    pub one_time_keyboard: bool,
    pub resize_keyboard: bool,
}

impl ReplyMarkup {
    /// Single-row, one-time, auto-resized keyboard with every [`MenuOption`].
    pub fn main_menu() -> Self {
        Self {
            keyboard: vec![MenuOption::ALL.iter().map(|o| o.button()).collect()],
            one_time_keyboard: true,
            resize_keyboard: true,
        }
    }
}

/// JSON body of `POST /bot<token>/sendMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub chat_id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendMessageRequest {
    pub fn new(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            reply_markup: None,
        }
    }

    pub fn with_reply_markup(mut self, markup: ReplyMarkup) -> Self {
        self.reply_markup = Some(markup);
        self
    }
}

/// Telegram Bot API response envelope. `result` is kept as a raw document; callers that need
/// the sent message fields read them from there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,
}

impl ApiResponse {
    /// `message_id` of the sent message, when `result` is a Message object.
    pub fn message_id(&self) -> Option<i64> {
        self.result
            .as_ref()
            .and_then(|r| r.get("message_id"))
            .and_then(Value::as_i64)
    }
}
