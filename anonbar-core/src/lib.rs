//! # anonbar-core
//!
//! Core types and traits for the menu bot: [`MenuOption`], the `sendMessage` wire types,
//! the transport-agnostic [`Bot`] trait, the [`Dispatcher`] and tracing initialization.
//! Used by anonbar-telegram (HTTP transport) and anonbar-cli.

pub mod bot;
pub mod dispatcher;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use dispatcher::Dispatcher;
pub use error::{BotError, Result};
pub use logger::{init_tracing, open_log_file};
pub use types::{ApiResponse, KeyboardButton, MenuOption, ReplyMarkup, SendMessageRequest};
