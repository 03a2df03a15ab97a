use std::{env, time::Duration};

use url::Url;

use super::env::{
    AppConfig, ConfigError, LoggingConfig, PollConfig, PracticumConfig, TelegramConfig,
};

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_env()
}

impl AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        // Required variables are checked together so an operator sees the
        // whole list in one startup failure, not one name per restart.
        let (token, bot_token, chat_id_raw) = match (
            require("PRACTICUM_TOKEN"),
            require("TELEGRAM_TOKEN"),
            require("TELEGRAM_CHAT_ID"),
        ) {
            (Some(token), Some(bot_token), Some(chat_id_raw)) => (token, bot_token, chat_id_raw),
            (token, bot_token, chat_id_raw) => {
                let mut missing = Vec::new();
                if token.is_none() {
                    missing.push("PRACTICUM_TOKEN");
                }
                if bot_token.is_none() {
                    missing.push("TELEGRAM_TOKEN");
                }
                if chat_id_raw.is_none() {
                    missing.push("TELEGRAM_CHAT_ID");
                }
                return Err(ConfigError::Missing(missing));
            }
        };

        let chat_id = chat_id_raw
            .parse::<i64>()
            .map_err(|_| ConfigError::Invalid {
                name: "TELEGRAM_CHAT_ID",
                value: chat_id_raw,
            })?;

        let endpoint_raw =
            env::var("PRACTICUM_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let endpoint = Url::parse(&endpoint_raw).map_err(|_| ConfigError::Invalid {
            name: "PRACTICUM_ENDPOINT",
            value: endpoint_raw,
        })?;

        let poll = PollConfig {
            retry_period: parse_secs("RETRY_PERIOD", 600)?,
            http_timeout: parse_secs("HTTP_TIMEOUT", 30)?,
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            logs_dir: env::var("LOGS_DIR").unwrap_or_else(|_| "logs".to_string()),
        };

        Ok(Self {
            practicum: PracticumConfig { token, endpoint },
            telegram: TelegramConfig { bot_token, chat_id },
            poll,
            logging,
        })
    }
}

fn require(name: &'static str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_secs(name: &'static str, default: u64) -> Result<Duration, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(Duration::from_secs(default)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for name in [
            "PRACTICUM_TOKEN",
            "TELEGRAM_TOKEN",
            "TELEGRAM_CHAT_ID",
            "PRACTICUM_ENDPOINT",
            "RETRY_PERIOD",
            "HTTP_TIMEOUT",
            "LOG_LEVEL",
            "LOGS_DIR",
        ] {
            env::remove_var(name);
        }
    }

    fn set_required() {
        env::set_var("PRACTICUM_TOKEN", "practicum-token");
        env::set_var("TELEGRAM_TOKEN", "telegram-token");
        env::set_var("TELEGRAM_CHAT_ID", "123456789");
    }

    #[test]
    #[serial]
    fn missing_variables_are_reported_together() {
        clear_env();
        env::set_var("TELEGRAM_TOKEN", "telegram-token");

        let err = load_config().expect_err("config must not load");
        match err {
            ConfigError::Missing(names) => {
                assert_eq!(names, vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    #[serial]
    fn blank_value_counts_as_missing() {
        clear_env();
        set_required();
        env::set_var("PRACTICUM_TOKEN", "   ");

        let err = load_config().expect_err("config must not load");
        match err {
            ConfigError::Missing(names) => assert_eq!(names, vec!["PRACTICUM_TOKEN"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    #[serial]
    fn defaults_are_applied() {
        clear_env();
        set_required();

        let config = load_config().expect("config loads");
        assert_eq!(config.practicum.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.poll.retry_period, Duration::from_secs(600));
        assert_eq!(config.poll.http_timeout, Duration::from_secs(30));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.logs_dir, "logs");
        assert_eq!(config.telegram.chat_id, 123456789);
    }

    #[test]
    #[serial]
    fn garbage_chat_id_is_invalid() {
        clear_env();
        set_required();
        env::set_var("TELEGRAM_CHAT_ID", "not-a-number");

        let err = load_config().expect_err("config must not load");
        match err {
            ConfigError::Invalid { name, value } => {
                assert_eq!(name, "TELEGRAM_CHAT_ID");
                assert_eq!(value, "not-a-number");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    #[serial]
    fn garbage_interval_is_invalid() {
        clear_env();
        set_required();
        env::set_var("RETRY_PERIOD", "soon");

        let err = load_config().expect_err("config must not load");
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "RETRY_PERIOD",
                ..
            }
        ));
    }

    #[test]
    #[serial]
    fn malformed_endpoint_is_invalid() {
        clear_env();
        set_required();
        env::set_var("PRACTICUM_ENDPOINT", "not a url");

        let err = load_config().expect_err("config must not load");
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "PRACTICUM_ENDPOINT",
                ..
            }
        ));
    }
}
