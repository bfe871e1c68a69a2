// tests/support/mocks.rs
use std::sync::Mutex;

use async_trait::async_trait;
use sluggable::domain::errors::{DomainError, DomainResult};
use sluggable::domain::slug::{SlugQuery, SlugRepository};

/* -------------------------------- SlugRepository -------------------------------- */

/// Fails every probe, as a lost database connection would.
pub struct FailingSlugRepository;

#[async_trait]
impl SlugRepository for FailingSlugRepository {
    async fn exists_other_with_field_value(&self, _query: &SlugQuery<'_>) -> DomainResult<bool> {
        Err(DomainError::Persistence("database unavailable".into()))
    }
}

/// Never reports a collision and remembers the probed values.
#[derive(Default)]
pub struct RecordingSlugRepository {
    probed: Mutex<Vec<String>>,
}

impl RecordingSlugRepository {
    pub fn probed(&self) -> Vec<String> {
        self.probed.lock().unwrap().clone()
    }
}

#[async_trait]
impl SlugRepository for RecordingSlugRepository {
    async fn exists_other_with_field_value(&self, query: &SlugQuery<'_>) -> DomainResult<bool> {
        self.probed.lock().unwrap().push(query.value.to_string());
        Ok(false)
    }
}
