use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde_json::Value;
use url::Url;

use crate::{config::PracticumConfig, domain::PollError, poller::StatusSource};

use super::response;

/// Thin client over a shared `reqwest::Client`. One GET per call, no retries;
/// retry policy lives entirely in the poll loop.
#[derive(Clone)]
pub struct PracticumClient {
    http: Client,
    token: String,
    endpoint: Url,
}

impl PracticumClient {
    pub fn new(http: Client, config: PracticumConfig) -> Self {
        Self {
            http,
            token: config.token,
            endpoint: config.endpoint,
        }
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .header(header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PollError::HttpStatus(status));
        }

        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body)?;
        if let Some(info) = response::reported_error(&payload) {
            return Err(PollError::ApiReported(info));
        }
        Ok(payload)
    }
}
