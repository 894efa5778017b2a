mod config;
mod news;
mod platform;
mod relay;
mod router;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Credentials;
use crate::news::NewsClient;
use crate::relay::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,newsbot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing or empty credential files abort startup before anything
    // touches the network.
    let credentials = Credentials::load()?;
    info!("Credentials loaded");

    let state = Arc::new(AppState::new(NewsClient::new(credentials.news_api_key)));

    info!("Bot is starting...");
    platform::telegram::run(state, &credentials.bot_token).await?;

    Ok(())
}
