//! Discord API client wrapper

use serenity::all::{
    ButtonStyle, ChannelId, CreateActionRow, CreateButton, CreateMessage, EditMessage, Http,
    Message as SerenityMessage, MessageId,
};
use std::sync::Arc;
use tracing::{debug, error};

use bargain::NavAction;

use crate::config::DiscordConfig;

/// Discord API client
pub struct DiscordClient {
    http: Arc<Http>,
}

impl DiscordClient {
    /// Create a new Discord client
    pub fn new(config: &DiscordConfig) -> Self {
        let http = Arc::new(Http::new(&config.token));
        Self { http }
    }

    /// Send a message with navigation buttons to a channel
    pub async fn send_message(
        &self,
        channel_id: u64,
        content: &str,
        buttons: &[NavAction],
    ) -> Result<SerenityMessage, serenity::Error> {
        let channel = ChannelId::new(channel_id);
        debug!(channel_id = %channel_id, content_len = %content.len(), "Sending message to Discord");

        let message = channel
            .send_message(
                &self.http,
                CreateMessage::new()
                    .content(content)
                    .components(action_rows(buttons)),
            )
            .await
            .inspect_err(|e| error!(error = %e, "Failed to send Discord message"))?;

        Ok(message)
    }

    /// Replace content and buttons of an existing message
    pub async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        content: &str,
        buttons: &[NavAction],
    ) -> Result<SerenityMessage, serenity::Error> {
        let channel = ChannelId::new(channel_id);
        debug!(
            channel_id = %channel_id,
            message_id = %message_id,
            "Editing Discord message"
        );

        channel
            .edit_message(
                &self.http,
                MessageId::new(message_id),
                EditMessage::new()
                    .content(content)
                    .components(action_rows(buttons)),
            )
            .await
    }

    /// Delete a message
    pub async fn delete_message(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<(), serenity::Error> {
        let channel = ChannelId::new(channel_id);
        debug!(
            channel_id = %channel_id,
            message_id = %message_id,
            "Deleting Discord message"
        );

        channel
            .delete_message(&self.http, MessageId::new(message_id))
            .await
    }

    /// Get the underlying HTTP client for advanced operations
    pub fn http(&self) -> &Arc<Http> {
        &self.http
    }
}

/// One row holding a button per action; no rows when there are no actions
fn action_rows(buttons: &[NavAction]) -> Vec<CreateActionRow> {
    if buttons.is_empty() {
        return Vec::new();
    }

    let buttons = buttons
        .iter()
        .map(|action| {
            CreateButton::new(action.callback_data())
                .label(action.label())
                .style(ButtonStyle::Secondary)
        })
        .collect();

    vec![CreateActionRow::Buttons(buttons)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button_count(rows: &[CreateActionRow]) -> usize {
        rows.iter()
            .map(|row| match row {
                CreateActionRow::Buttons(buttons) => buttons.len(),
                _ => 0,
            })
            .sum()
    }

    #[test]
    fn test_no_buttons_no_rows() {
        assert!(action_rows(&[]).is_empty());
    }

    #[test]
    fn test_buttons_share_one_row() {
        let rows = action_rows(&[NavAction::Previous, NavAction::Next]);
        assert_eq!(rows.len(), 1);
        assert_eq!(button_count(&rows), 2);
    }
}
