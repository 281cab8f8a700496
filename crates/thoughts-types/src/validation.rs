use thiserror::Error;

pub const MESSAGE_MIN_CHARS: usize = 5;
pub const MESSAGE_MAX_CHARS: usize = 120;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("message is required")]
    Missing,
    #[error("message is too short: {0} characters after trimming, minimum is 5")]
    TooShort(usize),
    #[error("message is too long: {0} characters after trimming, maximum is 120")]
    TooLong(usize),
}

/// Validate and normalize a thought message: trim surrounding whitespace and
/// enforce the 5..=120 character bound on what remains. Returns the trimmed
/// message, which is what gets persisted.
pub fn validate_message(raw: &str) -> Result<String, MessageError> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    if len < MESSAGE_MIN_CHARS {
        return Err(MessageError::TooShort(len));
    }
    if len > MESSAGE_MAX_CHARS {
        return Err(MessageError::TooLong(len));
    }
    Ok(trimmed.to_owned())
}
