use std::borrow::Cow;

use crate::ChainError;

/// An error that is nothing but its message.
///
/// Comparable by text, so a `Message` works as a sentinel:
///
/// ```rust
/// use causeway::{has_cause, new_cause, Message};
///
/// const DB_FAILURE: Message = Message::from_static("db failure");
///
/// let err = new_cause(DB_FAILURE, std::io::Error::other("connection refused"));
/// assert_eq!(err.to_string(), "db failure: connection refused");
/// assert!(has_cause(&err, &DB_FAILURE));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{0}")]
pub struct Message(Cow<'static, str>);

impl Message {
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self(text.into())
    }

    pub const fn from_static(text: &'static str) -> Self {
        Self(Cow::Borrowed(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ChainError for Message {}

/// Shorthand for [`Message::new`].
pub fn msg(text: impl Into<Cow<'static, str>>) -> Message {
    Message::new(text)
}
