//! Ordered conversation thread seeded with the assistant's welcome message.

use crate::core::constants::WELCOME_MESSAGE;
use crate::core::message::ChatMessage;

/// The message history shown in the transcript and sent with every exchange.
///
/// The first entry is always the welcome message, so the thread is never empty.
/// Messages are only ever appended; [`Conversation::reset`] is the single way
/// to shrink it, and it keeps exactly the welcome message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

#[allow(clippy::len_without_is_empty)]
impl Conversation {
    pub fn new() -> Self {
        Self::with_welcome(ChatMessage::assistant(WELCOME_MESSAGE))
    }

    pub fn with_welcome(welcome: ChatMessage) -> Self {
        Self {
            messages: vec![welcome],
        }
    }

    pub fn welcome(&self) -> &ChatMessage {
        &self.messages[0]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn last(&self) -> &ChatMessage {
        &self.messages[self.messages.len() - 1]
    }

    pub(crate) fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn reset(&mut self) {
        self.messages.truncate(1);
    }

    /// Owned copy of the thread, used as the request payload for an exchange.
    pub fn snapshot(&self) -> Vec<ChatMessage> {
        self.messages.clone()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
