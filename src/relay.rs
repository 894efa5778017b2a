use std::collections::{HashMap, HashSet};

use anyhow::Result;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::news::{FetchOutcome, NewsClient};
use crate::platform::Sender;
use crate::router::{self, Route};

/// Maximum number of article messages per fetch.
const MAX_ARTICLES: usize = 5;

/// Shared application state.
pub struct AppState {
    news: NewsClient,
    /// URLs already relayed, scoped per conversation. Grows for the process
    /// lifetime; never persisted.
    seen: Mutex<HashMap<String, HashSet<String>>>,
}

impl AppState {
    pub fn new(news: NewsClient) -> Self {
        Self {
            news,
            seen: Mutex::new(HashMap::new()),
        }
    }
}

/// Handles one inbound text message for the given conversation, sending zero
/// or more replies through `out`.
pub async fn handle_text(
    state: &AppState,
    out: &dyn Sender,
    chat: &str,
    text: &str,
) -> Result<()> {
    match router::route(text) {
        Route::Nudge => out.send(router::PRESS_START).await,
        Route::Menu => out.send(router::MENU).await,
        Route::Fetch { category, country } => {
            fetch_and_relay(state, out, chat, category, country).await
        }
        Route::Invalid => {
            out.send(router::INVALID_INPUT).await?;
            out.send(router::MENU).await
        }
    }
}

/// Fetches headlines and relays the unseen ones. Every exit path, success,
/// API error or transport error, ends with the menu so the conversation is
/// always left at a selectable state.
async fn fetch_and_relay(
    state: &AppState,
    out: &dyn Sender,
    chat: &str,
    category: &str,
    country: &str,
) -> Result<()> {
    if let Err(e) = relay_articles(state, out, chat, category, country).await {
        warn!("Fetch for category '{}' failed: {:#}", category, e);
        if let Err(send_err) = out.send(&format!("Error fetching news: {:#}", e)).await {
            warn!("Failed to deliver error notice: {:#}", send_err);
        }
    }
    out.send(router::MENU).await
}

async fn relay_articles(
    state: &AppState,
    out: &dyn Sender,
    chat: &str,
    category: &str,
    country: &str,
) -> Result<()> {
    match state.news.top_headlines(category, country).await? {
        FetchOutcome::ApiError { status, body } => {
            warn!("News API returned status {} for '{}'", status, category);
            out.send(&format!(
                "Request failed with status code: {}\n{}",
                status, body
            ))
            .await
        }
        FetchOutcome::Articles(articles) => {
            let mut seen = state.seen.lock().await;
            let seen = seen.entry(chat.to_string()).or_default();

            let fresh: Vec<_> = articles
                .into_iter()
                .filter(|a| !seen.contains(&a.url))
                .take(MAX_ARTICLES)
                .collect();

            if fresh.is_empty() {
                return out.send(router::NO_NEW_ARTICLES).await;
            }

            info!(
                "Relaying {} article(s) for '{}' to chat {}",
                fresh.len(),
                category,
                chat
            );

            for article in fresh {
                out.send(&article.format_message()).await?;
                // Marked seen per article, so a failed send mid-loop does not
                // suppress the articles that were never delivered.
                seen.insert(article.url);
            }
            Ok(())
        }
    }
}
