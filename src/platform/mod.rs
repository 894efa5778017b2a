pub mod telegram;

use anyhow::Result;
use async_trait::async_trait;

/// Outbound "send text to this conversation" seam. The relay logic talks to
/// the chat platform only through this trait, so it can be exercised without
/// a live connection.
#[async_trait]
pub trait Sender: Send + Sync {
    async fn send(&self, text: &str) -> Result<()>;
}
