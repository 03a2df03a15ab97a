use anyhow::Result;
use chrono::Utc;
use reqwest::Client;
use teloxide::Bot;

use crate::{
    config::AppConfig, infrastructure::stop::StopToken, poller::StatusPoller,
    practicum::PracticumClient, telegram::StatusNotifier,
};

pub struct HomeworkBotApp {
    poller: StatusPoller<PracticumClient, StatusNotifier>,
}

impl HomeworkBotApp {
    pub fn initialize(config: AppConfig) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(format!(
                "practicum-homework-bot/{}",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(config.poll.http_timeout)
            .build()?;

        let source = PracticumClient::new(http_client, config.practicum.clone());
        let bot = Bot::new(&config.telegram.bot_token);
        let sink = StatusNotifier::new(bot, &config.telegram);

        // Only changes after process start are relevant.
        let poller = StatusPoller::new(
            source,
            sink,
            config.poll.retry_period,
            Utc::now().timestamp(),
        );
        Ok(Self { poller })
    }

    pub async fn run(self, stop: StopToken) -> Result<()> {
        tracing::info!("Бот проверки домашних работ запущен");
        self.poller.run(stop).await;
        tracing::info!("Бот остановлен");
        Ok(())
    }
}
