pub mod api;
pub mod models;
pub mod validation;

pub use api::{ApiEnvelope, CreateThoughtRequest};
pub use models::Thought;
pub use validation::{MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS, MessageError, validate_message};
