use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use teloxide::prelude::*;
use tracing::{error, info, warn};

use crate::platform::Sender;
use crate::relay::{self, AppState};

/// Sends into one Telegram chat. Delivery confirmations are not inspected.
struct TelegramSender {
    bot: Bot,
    chat_id: ChatId,
}

#[async_trait]
impl Sender for TelegramSender {
    async fn send(&self, text: &str) -> Result<()> {
        self.bot.send_message(self.chat_id, text).await?;
        Ok(())
    }
}

/// Run the Telegram long-polling loop.
pub async fn run(state: Arc<AppState>, token: &str) -> Result<()> {
    let bot = Bot::new(token);

    info!("Starting Telegram bot...");

    let handler = Update::filter_message().endpoint(handle_message);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("bot"))
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn handle_message(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let text = match msg.text() {
        Some(t) => t.to_string(),
        None => return Ok(()),
    };

    info!("Message from chat {}: {}", msg.chat.id, text);

    let chat_key = msg.chat.id.0.to_string();
    let sender = TelegramSender {
        bot,
        chat_id: msg.chat.id,
    };

    if let Err(e) = relay::handle_text(&state, &sender, &chat_key, &text).await {
        error!("Error handling message: {:#}", e);
    }

    Ok(())
}
