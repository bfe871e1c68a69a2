use crate::domain::errors::DomainResult;
use crate::domain::slug::{SlugQuery, SlugRepository};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone)]
struct StoredSlug {
    record_type: String,
    key: i64,
    field: String,
    value: String,
    trashed: bool,
}

/// Slug index kept in process memory. Useful for tests and for embedding
/// the generator where records are not backed by SQL.
#[derive(Default)]
pub struct InMemorySlugRepository {
    rows: Mutex<Vec<StoredSlug>>,
    probes: AtomicUsize,
}

impl InMemorySlugRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` for the record, replacing any previous value of the same field.
    pub fn insert(&self, record_type: &str, key: i64, field: &str, value: &str) {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|row| !(row.record_type == record_type && row.key == key && row.field == field));
        rows.push(StoredSlug {
            record_type: record_type.to_string(),
            key,
            field: field.to_string(),
            value: value.to_string(),
            trashed: false,
        });
    }

    /// Soft-deletes every stored value of the record.
    pub fn trash(&self, record_type: &str, key: i64) {
        let mut rows = self.rows.lock().unwrap();
        for row in rows
            .iter_mut()
            .filter(|row| row.record_type == record_type && row.key == key)
        {
            row.trashed = true;
        }
    }

    /// Number of existence queries answered so far.
    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl SlugRepository for InMemorySlugRepository {
    async fn exists_other_with_field_value(&self, query: &SlugQuery<'_>) -> DomainResult<bool> {
        self.probes.fetch_add(1, Ordering::Relaxed);
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().any(|row| {
            row.record_type == query.record_type
                && row.field == query.field
                && row.value == query.value
                && row.key != query.exclude_key
                && (query.include_trashed || !row.trashed)
        }))
    }
}
