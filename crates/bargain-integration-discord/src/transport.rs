//! ChatTransport implementation for Discord

use async_trait::async_trait;
use tracing::{debug, warn};

use bargain::{ChatId, ChatTransport, DomainError, MessageRef, Reply};

use crate::client::DiscordClient;
use crate::config::DiscordConfig;

/// Discord transport implementing the ChatTransport port
///
/// Chats are Discord channels; message references are Discord message ids.
pub struct DiscordTransport {
    client: DiscordClient,
}

impl DiscordTransport {
    /// Create a new Discord transport
    pub fn new(config: DiscordConfig) -> Self {
        let client = DiscordClient::new(&config);
        Self { client }
    }

    /// Check if the bot token is accepted by Discord
    pub async fn health_check(&self) -> bool {
        match self.client.http().get_current_user().await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Discord health check failed");
                false
            }
        }
    }
}

#[async_trait]
impl ChatTransport for DiscordTransport {
    async fn send(&self, chat_id: ChatId, reply: &Reply) -> Result<MessageRef, DomainError> {
        let message = self
            .client
            .send_message(chat_id.0, &reply.text, &reply.buttons)
            .await
            .map_err(|e| DomainError::Transport(format!("Discord API error: {}", e)))?;

        Ok(MessageRef(message.id.get()))
    }

    async fn edit(
        &self,
        chat_id: ChatId,
        message_ref: MessageRef,
        reply: &Reply,
    ) -> Result<(), DomainError> {
        self.client
            .edit_message(chat_id.0, message_ref.0, &reply.text, &reply.buttons)
            .await
            .map_err(|e| DomainError::Transport(format!("Discord API error: {}", e)))?;

        Ok(())
    }

    async fn delete(&self, chat_id: ChatId, message_ref: MessageRef) -> Result<(), DomainError> {
        debug!(chat_id = %chat_id, message_ref = %message_ref, "Retracting Discord message");

        self.client
            .delete_message(chat_id.0, message_ref.0)
            .await
            .map_err(|e| DomainError::Transport(format!("Discord API error: {}", e)))
    }

    fn name(&self) -> &str {
        "discord"
    }
}
