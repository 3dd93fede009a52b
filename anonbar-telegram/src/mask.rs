/// Masks a bot token for safe logging: first 7 chars + "***" + last 4 chars.
/// Tokens of 11 chars or fewer become "***". Works on chars, so non-ASCII input cannot split a code point.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[len - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_token_short_returns_all_star() {
        assert_eq!(mask_token(""), "***");
        assert_eq!(mask_token("123:abc"), "***");
        assert_eq!(mask_token("12345678901"), "***");
    }

    #[test]
    fn mask_token_long_shows_head_and_tail() {
        assert_eq!(mask_token("123456789012"), "1234567***9012");
        assert_eq!(
            mask_token("1234567890:ABCdefGHIjklMNOpqrSTUvwxYZ"),
            "1234567***wxYZ"
        );
    }
}
