//! Chat Platform Port
//!
//! Abstract interface for the messaging platform the bot talks through
//! (Discord, Telegram, etc.).
//!
//! Implementations of this trait should live in separate crates
//! (e.g., bargain-integration-discord).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{ChatId, MessageRef, NavAction};

/// Outbound message: text plus 0-2 navigation buttons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    #[serde(default)]
    pub buttons: Vec<NavAction>,
}

impl Reply {
    /// Plain text without buttons
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            buttons: Vec::new(),
        }
    }

    pub fn with_buttons(mut self, buttons: Vec<NavAction>) -> Self {
        self.buttons = buttons;
        self
    }
}

/// Outbound side of the chat platform
///
/// # Example
///
/// ```rust,ignore
/// use bargain::ports::ChatTransport;
///
/// struct DiscordTransport { /* ... */ }
///
/// #[async_trait]
/// impl ChatTransport for DiscordTransport {
///     async fn send(&self, chat_id: ChatId, reply: &Reply) -> Result<MessageRef, DomainError> {
///         // Post to the Discord channel
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send a new message, returning a reference for later edits
    async fn send(&self, chat_id: ChatId, reply: &Reply) -> Result<MessageRef, DomainError>;

    /// Replace text and buttons of a message sent earlier
    async fn edit(
        &self,
        chat_id: ChatId,
        message_ref: MessageRef,
        reply: &Reply,
    ) -> Result<(), DomainError>;

    /// Remove a message sent earlier
    async fn delete(&self, chat_id: ChatId, message_ref: MessageRef) -> Result<(), DomainError>;

    /// Get the platform name (e.g., "discord")
    fn name(&self) -> &str;
}

/// Events received from the chat platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    /// Free text typed by a user
    Text { chat_id: ChatId, text: String },

    /// A navigation button was pressed on a message
    Callback {
        chat_id: ChatId,
        action: NavAction,
        message_ref: MessageRef,
    },
}

impl ChatEvent {
    pub fn chat_id(&self) -> ChatId {
        match self {
            Self::Text { chat_id, .. } => *chat_id,
            Self::Callback { chat_id, .. } => *chat_id,
        }
    }
}

/// Inbound side: whatever consumes chat events
#[async_trait]
pub trait ChatEventHandler: Send + Sync {
    async fn handle(&self, event: ChatEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization_is_tagged() {
        let event = ChatEvent::Callback {
            chat_id: ChatId(1),
            action: NavAction::Next,
            message_ref: MessageRef(2),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "callback");
        assert_eq!(json["action"], "next");
        assert_eq!(event.chat_id(), ChatId(1));
    }
}
