use std::time::Duration;

use thiserror::Error;
use url::Url;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub practicum: PracticumConfig,
    pub telegram: TelegramConfig,
    pub poll: PollConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct PracticumConfig {
    pub token: String,
    pub endpoint: Url,
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: i64,
}

#[derive(Debug, Clone)]
pub struct PollConfig {
    pub retry_period: Duration,
    pub http_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub logs_dir: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Отсутствуют обязательные переменные окружения: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("Недопустимое значение переменной окружения {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
