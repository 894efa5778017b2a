use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

const NEWS_API_BASE_URL: &str = "https://newsapi.org/v2";

/// One headline from the news API. `url` doubles as the deduplication key.
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
}

impl Article {
    /// Chat message body: title, description and link on separate lines.
    /// Articles without a description keep the empty middle line.
    pub fn format_message(&self) -> String {
        format!(
            "{}\n{}\n{}",
            self.title,
            self.description.as_deref().unwrap_or(""),
            self.url
        )
    }
}

#[derive(Debug, Deserialize)]
struct HeadlinesResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

/// Outcome of one headlines request. A non-200 reply is a normal outcome
/// relayed to the user, not an `Err`; `Err` is reserved for transport and
/// parse failures.
#[derive(Debug)]
pub enum FetchOutcome {
    Articles(Vec<Article>),
    ApiError { status: u16, body: String },
}

pub struct NewsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NewsClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, NEWS_API_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// One GET to /top-headlines with country, category and the API key.
    pub async fn top_headlines(&self, category: &str, country: &str) -> Result<FetchOutcome> {
        let url = format!("{}/top-headlines", self.base_url);

        debug!(
            "Fetching headlines: category={}, country={}",
            category, country
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("country", country),
                ("category", category),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .context("Failed to send request to news API")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Ok(FetchOutcome::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: HeadlinesResponse = response
            .json()
            .await
            .context("Failed to parse news API response")?;

        Ok(FetchOutcome::Articles(parsed.articles))
    }
}
