use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod application;
mod config;

use adapters::OlxMarketplace;
use application::{ConversationController, OfferFetcher};
use bargain_integration_discord::DiscordTransport;
use config::BotConfig;

/// Controller with the concrete marketplace and chat platform
pub type AppController = ConversationController<OlxMarketplace, DiscordTransport>;

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Bargain bot is running - hunting below-average offers".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn serve_health(addr: SocketAddr) -> anyhow::Result<()> {
    let router = Router::new()
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind health endpoint on {addr}"))?;

    tracing::info!("💓 Health endpoint listening on {}", addr);
    axum::serve(listener, router)
        .await
        .context("Health endpoint stopped")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,bargain=debug,bargain_bot=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🛒 Bargain bot initializing...");

    let config = BotConfig::from_env().context("Failed to load configuration")?;

    let marketplace = Arc::new(
        OlxMarketplace::new(&config.marketplace_base_url, config.page_timeout)
            .context("Failed to create marketplace client")?,
    );
    tracing::info!(
        base_url = %config.marketplace_base_url,
        page_size = config.fetch.page_size,
        max_pages = config.fetch.max_pages,
        "🏷️  Marketplace client initialized"
    );

    let fetcher = OfferFetcher::new(marketplace, config.fetch.clone());
    let transport = Arc::new(DiscordTransport::new(config.discord.clone()));
    if transport.health_check().await {
        tracing::info!("🔐 Discord token accepted");
    } else {
        tracing::warn!("⚠️  Discord rejected the token or is unreachable");
    }
    let controller: Arc<AppController> = Arc::new(ConversationController::new(fetcher, transport));

    if let Some(addr) = config.health_addr {
        tokio::spawn(async move {
            if let Err(e) = serve_health(addr).await {
                tracing::error!("❌ {:#}", e);
            }
        });
    } else {
        tracing::info!("No HEALTH_ADDR set - health endpoint disabled");
    }

    tracing::info!("✅ Bargain bot ready - connecting to Discord");

    bargain_integration_discord::run(config.discord, controller)
        .await
        .context("Discord client stopped")?;

    Ok(())
}
