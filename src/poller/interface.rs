use async_trait::async_trait;
use serde_json::Value;

use crate::domain::PollError;

/// Where status payloads come from. One fetch per poll cycle.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError>;
}

/// Where rendered messages go. Delivery failure is a `false`, never an error:
/// a failed send must not abort the poll loop.
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn send(&self, text: &str) -> bool;
}
