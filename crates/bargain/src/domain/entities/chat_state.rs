//! ChatState Entity
//!
//! Everything the bot remembers about one chat between events.

use super::session::SearchSession;
use crate::domain::value_objects::MessageRef;

/// Per-chat state
///
/// `session` is `None` while the chat is idle. `view` is the message that
/// currently shows the browsing UI for this chat, if any.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub session: Option<SearchSession>,
    pub view: Option<MessageRef>,
}

impl ChatState {
    pub fn is_browsing(&self) -> bool {
        self.session.is_some()
    }

    /// Forget the current session, returning the view that showed it
    pub fn reset(&mut self) -> Option<MessageRef> {
        self.session = None;
        self.view.take()
    }

    /// Whether a callback from `message_ref` targets the live view
    pub fn owns_view(&self, message_ref: MessageRef) -> bool {
        self.view == Some(message_ref)
    }
}
