//! # anonbar-telegram
//!
//! Telegram transport for the menu bot: env-based [`TelegramConfig`] and [`TelegramBotApi`],
//! the reqwest implementation of [`anonbar_core::Bot`]. No receive loop, no persistence.

mod bot_api;
mod config;
mod mask;

pub use bot_api::TelegramBotApi;
pub use config::{TelegramConfig, DEFAULT_API_URL, DEFAULT_LOG_FILE};
pub use mask::mask_token;
