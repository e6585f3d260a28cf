use std::time::Duration;

use async_trait::async_trait;
use contracts::usecases::u501_asset_submission::lookup::{fixture_records, BkiRecord};

#[derive(Debug, thiserror::Error)]
pub enum BkiError {
    #[error("IMO number is empty")]
    EmptyKey,
    #[error("registry unavailable: {0}")]
    Unavailable(String),
}

/// Клиент реестра классификационного общества (BKI)
#[async_trait]
pub trait BkiClient: Send + Sync {
    /// Поиск судна по номеру IMO; `Ok(None)`, если запись не найдена
    async fn lookup(&self, imo_number: &str) -> Result<Option<BkiRecord>, BkiError>;

    fn provider_name(&self) -> &str;
}

/// Имитация реестра: фиксированная задержка и набор тестовых записей
pub struct MockBkiClient {
    delay: Duration,
    records: Vec<BkiRecord>,
}

impl MockBkiClient {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            records: fixture_records(),
        }
    }
}

#[async_trait]
impl BkiClient for MockBkiClient {
    async fn lookup(&self, imo_number: &str) -> Result<Option<BkiRecord>, BkiError> {
        let key = imo_number.trim();
        if key.is_empty() {
            return Err(BkiError::EmptyKey);
        }
        tracing::debug!("BKI lookup for IMO {} ({} ms)", key, self.delay.as_millis());
        tokio::time::sleep(self.delay).await;
        Ok(self.records.iter().find(|r| r.imo_number == key).cloned())
    }

    fn provider_name(&self) -> &str {
        "mock-bki"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn finds_fixture_after_delay() {
        let client = MockBkiClient::new(Duration::from_millis(5));
        let started = std::time::Instant::now();
        let record = client.lookup("9737668").await.unwrap().unwrap();
        assert!(started.elapsed() >= Duration::from_millis(5));
        assert_eq!(record.name, "TRITON 501");
    }

    #[tokio::test]
    async fn unknown_key_is_none() {
        let client = MockBkiClient::new(Duration::ZERO);
        assert!(client.lookup("0000000").await.unwrap().is_none());
        assert!(matches!(client.lookup("  ").await, Err(BkiError::EmptyKey)));
    }
}
