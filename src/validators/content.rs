//! Rules for comment and alert text fields.

use validator::ValidationError;

use super::common::{non_empty_string, string_length};

pub const COMMENT_TEXT_MAX_CHARS: usize = 1000;
pub const ALERT_TITLE_MIN_CHARS: usize = 3;
pub const ALERT_TITLE_MAX_CHARS: usize = 100;
pub const ALERT_MESSAGE_MAX_CHARS: usize = 1000;

pub fn validate_comment_text(text: &str) -> Result<(), ValidationError> {
    non_empty_string("text", text)?;
    string_length("text", text, 1, COMMENT_TEXT_MAX_CHARS)
}

pub fn validate_alert_title(title: &str) -> Result<(), ValidationError> {
    non_empty_string("title", title)?;
    string_length("title", title, ALERT_TITLE_MIN_CHARS, ALERT_TITLE_MAX_CHARS)
}

pub fn validate_alert_message(message: &str) -> Result<(), ValidationError> {
    non_empty_string("message", message)?;
    string_length("message", message, 1, ALERT_MESSAGE_MAX_CHARS)
}
