//! Discord Integration for Bargain
//!
//! This crate provides the Discord chat platform for the Bargain bot:
//! a `ChatTransport` that posts, edits and deletes messages with
//! navigation buttons, and a gateway handler that turns Discord messages
//! and button presses into `ChatEvent`s.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bargain_integration_discord::{DiscordConfig, DiscordTransport};
//!
//! let config = DiscordConfig::new("your-bot-token");
//! let transport = Arc::new(DiscordTransport::new(config.clone()));
//! // build a ChatEventHandler around the transport, then:
//! bargain_integration_discord::run(config, handler).await?;
//! ```

mod client;
mod config;
mod handler;
mod transport;

use std::sync::Arc;

use bargain::ChatEventHandler;
use serenity::all::{Client, GatewayIntents};

pub use client::DiscordClient;
pub use config::DiscordConfig;
pub use handler::DiscordEventHandler;
pub use transport::DiscordTransport;

/// Connect to the gateway and forward events until the client stops
pub async fn run(
    config: DiscordConfig,
    handler: Arc<dyn ChatEventHandler>,
) -> Result<(), serenity::Error> {
    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.token, intents)
        .event_handler(DiscordEventHandler::new(config.clone(), handler))
        .await?;

    client.start().await
}
