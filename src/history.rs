//! Bounded conversation history with system-message pinning.

use crate::message::{Message, Role};

/// Ordered store of prior conversation turns.
///
/// The buffer keeps messages in insertion order and optionally caps its
/// length. When capped, appending at capacity evicts the oldest non-system
/// message first. A system message is special: there is at most one, it
/// always sits at index 0, and it is never evicted by an append. If the
/// buffer holds only a system message, an append has no eviction candidate
/// and the buffer grows one past the cap instead.
#[derive(Clone, Debug, Default)]
pub struct ChatHistory {
    messages: Vec<Message>,
    max_length: Option<usize>,
}

impl ChatHistory {
    /// Create an empty, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history holding at most `max_length` messages.
    ///
    /// Zero or a negative value disables the cap.
    pub fn with_max_length(max_length: i64) -> Self {
        Self {
            messages: Vec::new(),
            max_length: usize::try_from(max_length).ok().filter(|n| *n > 0),
        }
    }

    /// Create an unbounded history pre-seeded with `messages`.
    pub fn with_messages(messages: Vec<Message>) -> Self {
        Self {
            messages,
            max_length: None,
        }
    }

    /// The configured cap, if any.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Number of messages currently held.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check whether the history holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Borrow the current messages in order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Return an owned copy of the current messages in order.
    ///
    /// Mutating the returned vector cannot affect the buffer.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    /// Append a user message, evicting the oldest non-system message if at
    /// capacity.
    pub fn add_user_message(&mut self, content: impl Into<String>) {
        self.push_evicting(Message::user(content));
    }

    /// Append an assistant message, evicting the oldest non-system message
    /// if at capacity.
    pub fn add_assistant_message(&mut self, content: impl Into<String>) {
        self.push_evicting(Message::assistant(content));
    }

    /// Add or replace the system message at the front of the history.
    ///
    /// Any existing system message is removed first. System insertion
    /// bypasses the eviction path entirely.
    pub fn add_system_message(&mut self, content: impl Into<String>) {
        self.messages.retain(|m| m.role != Role::System);
        self.messages.insert(0, Message::system(content));
    }

    /// Remove all messages, including the system message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    fn push_evicting(&mut self, message: Message) {
        if let Some(max) = self.max_length {
            if self.messages.len() >= max {
                // Oldest surviving non-system message goes first. No
                // candidate means the buffer may exceed the cap by one.
                if let Some(pos) = self.messages.iter().position(|m| m.role != Role::System) {
                    self.messages.remove(pos);
                }
            }
        }
        self.messages.push(message);
    }
}
