use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// The request never produced an HTTP response (connect, DNS, timeout, body read).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Telegram answered with a non-success status or `"ok": false`.
    #[error("Telegram API error {code}: {description}")]
    Api { code: i64, description: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Unrecognized callback: {0:?}")]
    UnrecognizedCallback(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl BotError {
    /// Builds a [`BotError::Api`] from the optional fields of an error envelope.
    pub fn api(code: Option<i64>, description: Option<String>) -> Self {
        BotError::Api {
            code: code.unwrap_or_default(),
            description: description.unwrap_or_else(|| "no description".to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = BotError::api(Some(400), Some("Bad Request: chat not found".to_string()));
        assert_eq!(
            err.to_string(),
            "Telegram API error 400: Bad Request: chat not found"
        );
    }

    #[test]
    fn test_api_error_defaults() {
        match BotError::api(None, None) {
            BotError::Api { code, description } => {
                assert_eq!(code, 0);
                assert_eq!(description, "no description");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
