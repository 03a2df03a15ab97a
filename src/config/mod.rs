pub mod env;
mod loader;

pub use env::{AppConfig, ConfigError, PracticumConfig, TelegramConfig};
pub use loader::load_config;
