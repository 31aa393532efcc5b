//! Discord configuration

use serde::{Deserialize, Serialize};

/// Configuration for Discord integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Discord bot token
    pub token: String,
    /// Guild channels the bot answers in; empty means every channel
    #[serde(default)]
    pub channel_ids: Vec<u64>,
    /// Whether to respond to DMs
    pub respond_to_dms: bool,
}

impl DiscordConfig {
    /// Create a new Discord configuration with just a token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }

    /// Restrict the bot to the given channels
    pub fn with_channel_ids(mut self, channel_ids: Vec<u64>) -> Self {
        self.channel_ids = channel_ids;
        self
    }

    /// Enable or disable direct messages
    pub fn with_dms(mut self, enable: bool) -> Self {
        self.respond_to_dms = enable;
        self
    }

    /// Whether a message in `channel_id` should reach the bot
    pub fn accepts(&self, channel_id: u64, is_dm: bool) -> bool {
        if is_dm {
            return self.respond_to_dms;
        }
        self.channel_ids.is_empty() || self.channel_ids.contains(&channel_id)
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            channel_ids: Vec::new(),
            respond_to_dms: true,
        }
    }
}
