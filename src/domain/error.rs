use reqwest::StatusCode;
use thiserror::Error;

/// Per-cycle recoverable failures. The `Display` text of each variant is what
/// gets relayed to the chat (prefixed by the poller), so the wording follows
/// the messages users of this bot already know.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("Ошибка при запросе к API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Эндпоинт недоступен. Код ответа: {0}")]
    HttpStatus(StatusCode),
    #[error("Ответ API не является корректным JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("API вернуло ошибку: {0}")]
    ApiReported(String),
    #[error("{0}")]
    Shape(String),
    #[error("В ответе API отсутствует ключ \"{0}\"")]
    MissingField(&'static str),
    #[error("Неизвестный статус работы: {0}")]
    UnknownStatus(String),
}
