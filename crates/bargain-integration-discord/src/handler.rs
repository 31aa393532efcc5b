//! Discord gateway event handling

use async_trait::async_trait;
use serenity::all::{
    ComponentInteraction, Context, CreateInteractionResponse, EventHandler, Interaction, Message,
    Ready,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

use bargain::{ChatEvent, ChatEventHandler, ChatId, MessageRef, NavAction};

use crate::config::DiscordConfig;

/// Serenity event handler forwarding messages and button presses
pub struct DiscordEventHandler {
    config: DiscordConfig,
    handler: Arc<dyn ChatEventHandler>,
}

impl DiscordEventHandler {
    pub fn new(config: DiscordConfig, handler: Arc<dyn ChatEventHandler>) -> Self {
        Self { config, handler }
    }

    async fn on_component(&self, ctx: &Context, component: &ComponentInteraction) {
        // Discord expects an answer within 3 seconds; the edit follows later
        if let Err(e) = component
            .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
            .await
        {
            warn!(error = %e, "Failed to acknowledge Discord interaction");
        }

        let event = component_event(
            component.channel_id.get(),
            component.message.id.get(),
            &component.data.custom_id,
        );

        match event {
            Some(event) => self.handler.handle(event).await,
            None => debug!(custom_id = %component.data.custom_id, "Ignoring unknown component"),
        }
    }
}

#[async_trait]
impl EventHandler for DiscordEventHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, guilds = ready.guilds.len(), "🤖 Connected to Discord");
    }

    async fn message(&self, _ctx: Context, msg: Message) {
        let channel_id = msg.channel_id.get();
        if !self.config.accepts(channel_id, msg.guild_id.is_none()) {
            return;
        }

        if let Some(event) = text_event(channel_id, msg.author.bot, &msg.content) {
            self.handler.handle(event).await;
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Component(component) => self.on_component(&ctx, &component).await,
            other => debug!(kind = ?other.kind(), "Ignoring Discord interaction"),
        }
    }
}

/// Convert a posted message into a text event. Bot messages and empty
/// content (attachments only, embeds) are dropped.
pub(crate) fn text_event(channel_id: u64, author_is_bot: bool, content: &str) -> Option<ChatEvent> {
    if author_is_bot || content.trim().is_empty() {
        return None;
    }

    Some(ChatEvent::Text {
        chat_id: ChatId(channel_id),
        text: content.to_string(),
    })
}

/// Convert a button press into a callback event
pub(crate) fn component_event(
    channel_id: u64,
    message_id: u64,
    custom_id: &str,
) -> Option<ChatEvent> {
    let action = NavAction::from_callback_data(custom_id)?;

    Some(ChatEvent::Callback {
        chat_id: ChatId(channel_id),
        action,
        message_ref: MessageRef(message_id),
    })
}
