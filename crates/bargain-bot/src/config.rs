//! Configuration management for the Bargain bot
//!
//! Read from the process environment (and `.env` via dotenvy).

use anyhow::{bail, Context, Result};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use bargain_integration_discord::DiscordConfig;

use crate::adapters::olx::DEFAULT_BASE_URL;
use crate::application::FetchConfig;

const DEFAULT_PAGE_TIMEOUT_SECS: u64 = 15;

/// Bot configuration
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub discord: DiscordConfig,
    pub marketplace_base_url: String,
    pub page_timeout: Duration,
    pub fetch: FetchConfig,
    /// Address for the `/health` endpoint; disabled when unset
    pub health_addr: Option<SocketAddr>,
}

impl BotConfig {
    /// Load config from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("DISCORD_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .context("DISCORD_TOKEN is not set")?;

        let channel_ids = match lookup("DISCORD_CHANNEL_IDS") {
            Some(raw) => parse_id_list(&raw).context("Invalid DISCORD_CHANNEL_IDS")?,
            None => Vec::new(),
        };

        let defaults = FetchConfig::default();
        let fetch = FetchConfig {
            page_size: parse_or(&lookup, "MARKETPLACE_PAGE_SIZE", defaults.page_size)?,
            max_pages: parse_or(&lookup, "MARKETPLACE_MAX_PAGES", defaults.max_pages)?,
        };
        if fetch.page_size == 0 {
            bail!("MARKETPLACE_PAGE_SIZE must be at least 1");
        }
        if fetch.max_pages == 0 {
            bail!("MARKETPLACE_MAX_PAGES must be at least 1");
        }

        let timeout_secs: u64 = parse_or(
            &lookup,
            "MARKETPLACE_PAGE_TIMEOUT_SECS",
            DEFAULT_PAGE_TIMEOUT_SECS,
        )?;

        let health_addr = lookup("HEALTH_ADDR")
            .map(|raw| raw.parse::<SocketAddr>())
            .transpose()
            .context("Invalid HEALTH_ADDR")?;

        Ok(Self {
            discord: DiscordConfig::new(token).with_channel_ids(channel_ids),
            marketplace_base_url: lookup("MARKETPLACE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            page_timeout: Duration::from_secs(timeout_secs),
            fetch,
            health_addr,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}

fn parse_id_list(raw: &str) -> Result<Vec<u64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u64>().with_context(|| format!("Not a channel id: {s:?}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<BotConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BotConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("DISCORD_TOKEN", "secret")]).unwrap();
        assert_eq!(config.discord.token, "secret");
        assert!(config.discord.channel_ids.is_empty());
        assert_eq!(config.marketplace_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.fetch.page_size, 10);
        assert_eq!(config.fetch.max_pages, 50);
        assert_eq!(config.page_timeout, Duration::from_secs(15));
        assert!(config.health_addr.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("DISCORD_TOKEN", "secret"),
            ("DISCORD_CHANNEL_IDS", "111, 222,"),
            ("MARKETPLACE_BASE_URL", "http://localhost:9000"),
            ("MARKETPLACE_PAGE_SIZE", "25"),
            ("MARKETPLACE_MAX_PAGES", "4"),
            ("MARKETPLACE_PAGE_TIMEOUT_SECS", "3"),
            ("HEALTH_ADDR", "0.0.0.0:8080"),
        ])
        .unwrap();
        assert_eq!(config.discord.channel_ids, vec![111, 222]);
        assert_eq!(config.marketplace_base_url, "http://localhost:9000");
        assert_eq!(config.fetch.page_size, 25);
        assert_eq!(config.fetch.max_pages, 4);
        assert_eq!(config.page_timeout, Duration::from_secs(3));
        assert_eq!(config.health_addr, Some("0.0.0.0:8080".parse().unwrap()));
    }

    #[test]
    fn test_missing_token() {
        assert!(load(&[]).is_err());
        assert!(load(&[("DISCORD_TOKEN", "  ")]).is_err());
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(load(&[("DISCORD_TOKEN", "t"), ("MARKETPLACE_PAGE_SIZE", "ten")]).is_err());
        assert!(load(&[("DISCORD_TOKEN", "t"), ("MARKETPLACE_MAX_PAGES", "0")]).is_err());
        assert!(load(&[("DISCORD_TOKEN", "t"), ("DISCORD_CHANNEL_IDS", "abc")]).is_err());
    }
}
