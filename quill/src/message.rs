//! Conversation message: System / User / Assistant.
//!
//! `DraftState::messages` records the exchange with the model as the pipeline
//! runs; each stage appends the assistant reply it received.

use serde::{Deserialize, Serialize};

/// One message in the conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// System instruction.
    System(String),
    /// User input (a rendered stage prompt).
    User(String),
    /// Assistant reply from the model.
    Assistant(String),
}

impl Message {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Message::System(content.into())
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Message::User(content.into())
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Message::Assistant(content.into())
    }

    /// Role string as used by chat-completion APIs.
    pub fn role(&self) -> &'static str {
        match self {
            Message::System(_) => "system",
            Message::User(_) => "user",
            Message::Assistant(_) => "assistant",
        }
    }

    /// The message text.
    pub fn content(&self) -> &str {
        match self {
            Message::System(s) | Message::User(s) | Message::Assistant(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_matches_variant() {
        assert_eq!(Message::system("a").role(), "system");
        assert_eq!(Message::user("b").role(), "user");
        assert_eq!(Message::assistant("c").role(), "assistant");
    }

    #[test]
    fn content_returns_inner_text() {
        assert_eq!(Message::user("hello").content(), "hello");
    }
}
