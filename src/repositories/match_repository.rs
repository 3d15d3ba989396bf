use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::match_record::MatchRecord;
use crate::repositories::errors::match_repository_errors::MatchRepositoryError;

#[cfg(test)]
use mockall::automock;

/// Persistence seam for finished matches. Called exactly once per finished
/// room; the caller logs and swallows failures, so implementations never
/// need to retry.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MatchRepository: Send + Sync {
    async fn add_match(&self, record: &MatchRecord) -> Result<(), MatchRepositoryError>;
}

/// Process-local match log for standalone operation and tests.
#[derive(Default)]
pub struct InMemoryMatchRepository {
    records: Mutex<Vec<MatchRecord>>,
}

impl InMemoryMatchRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<MatchRecord> {
        self.records.lock().expect("match log lock poisoned").clone()
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    async fn add_match(&self, record: &MatchRecord) -> Result<(), MatchRepositoryError> {
        let mut records = self.records.lock().expect("match log lock poisoned");
        records.push(record.clone());
        Ok(())
    }
}
