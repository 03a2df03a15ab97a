use std::{collections::HashSet, time::Duration};

use crate::{
    domain::{PollError, StatusChange},
    infrastructure::stop::StopToken,
    practicum::response,
};

use super::interface::{MessageSink, StatusSource};

/// The poll loop. Owns the timestamp cursor, the set of already-relayed
/// status changes, and the text of the last relayed failure.
///
/// Cursor policy: the cursor moves to the server's `current_date` only when a
/// cycle completes with every pending notification delivered (or with nothing
/// to deliver). Partial delivery leaves the cursor in place so the window is
/// re-fetched next cycle; the dedup set keeps the delivered changes from
/// repeating.
pub struct StatusPoller<S, N> {
    source: S,
    sink: N,
    retry_period: Duration,
    cursor: i64,
    notified: HashSet<StatusChange>,
    last_error_message: Option<String>,
}

impl<S: StatusSource, N: MessageSink> StatusPoller<S, N> {
    pub fn new(source: S, sink: N, retry_period: Duration, start_from: i64) -> Self {
        Self {
            source,
            sink,
            retry_period,
            cursor: start_from,
            notified: HashSet::new(),
            last_error_message: None,
        }
    }

    pub async fn run(mut self, mut stop: StopToken) {
        tracing::info!(
            target: "poller",
            from_date = self.cursor,
            retry_period_secs = self.retry_period.as_secs(),
            "Запуск цикла опроса"
        );
        loop {
            self.run_cycle().await;
            tokio::select! {
                _ = tokio::time::sleep(self.retry_period) => {}
                _ = stop.stopped() => {}
            }
            if stop.is_stopped() {
                break;
            }
        }
        tracing::info!(target: "poller", "Цикл опроса остановлен");
    }

    async fn run_cycle(&mut self) {
        if let Err(err) = self.poll_once().await {
            self.report_failure(err).await;
        }
    }

    async fn poll_once(&mut self) -> Result<(), PollError> {
        let payload = self.source.fetch(self.cursor).await?;
        let homeworks = response::extract_homeworks(&payload)?;
        let current_date = response::extract_current_date(&payload);

        // Convert everything before sending anything: one malformed record
        // fails the whole cycle and the window is retried intact.
        let mut changes = Vec::with_capacity(homeworks.len());
        for record in &homeworks {
            changes.push(StatusChange::from_record(record)?);
        }

        let pending: Vec<StatusChange> = changes
            .into_iter()
            .filter(|change| !self.notified.contains(change))
            .collect();

        if pending.is_empty() {
            tracing::debug!(target: "poller", "Нет новых статусов домашних работ");
            self.complete_cycle(current_date);
            return Ok(());
        }

        let mut all_delivered = true;
        for change in pending {
            if self.sink.send(&change.message()).await {
                self.notified.insert(change);
            } else {
                tracing::warn!(
                    target: "poller",
                    homework = %change.homework_name,
                    "Уведомление не доставлено, повтор в следующем цикле"
                );
                all_delivered = false;
            }
        }

        if all_delivered {
            self.complete_cycle(current_date);
        }
        Ok(())
    }

    fn complete_cycle(&mut self, current_date: Option<i64>) {
        if let Some(server_now) = current_date {
            // Never move backwards within a run.
            self.cursor = self.cursor.max(server_now);
        }
        self.last_error_message = None;
    }

    async fn report_failure(&mut self, err: PollError) {
        let message = format!("Сбой в работе программы: {err}");
        tracing::error!(target: "poller", "{message}");
        if self.last_error_message.as_deref() == Some(message.as_str()) {
            return;
        }
        if self.sink.send(&message).await {
            self.last_error_message = Some(message);
        }
    }
}
