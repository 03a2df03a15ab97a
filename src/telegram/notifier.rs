use async_trait::async_trait;
use teloxide::prelude::*;

use crate::{config::TelegramConfig, poller::MessageSink};

/// Sends plain-text messages to the configured chat. Delivery failure is
/// logged and collapsed into `false`; it never reaches the poll loop as an
/// error.
pub struct StatusNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl StatusNotifier {
    pub fn new(bot: Bot, config: &TelegramConfig) -> Self {
        Self {
            bot,
            chat_id: ChatId(config.chat_id),
        }
    }
}

#[async_trait]
impl MessageSink for StatusNotifier {
    async fn send(&self, text: &str) -> bool {
        match self.bot.send_message(self.chat_id, text).await {
            Ok(_) => {
                tracing::debug!(target: "telegram", message = %text, "Отправлено сообщение");
                true
            }
            Err(err) => {
                tracing::error!(
                    target: "telegram",
                    error = %err,
                    message = %text,
                    "Ошибка отправки сообщения"
                );
                false
            }
        }
    }
}
