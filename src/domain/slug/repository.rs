// src/domain/slug/repository.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Existence probe issued once per uniqueness attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugQuery<'a> {
    pub record_type: &'a str,
    pub key_name: &'a str,
    pub field: &'a str,
    pub value: &'a str,
    /// Key of the record being slugged; `0` when it has not been saved yet.
    pub exclude_key: i64,
    pub include_trashed: bool,
}

#[async_trait]
pub trait SlugRepository: Send + Sync {
    async fn exists_other_with_field_value(&self, query: &SlugQuery<'_>) -> DomainResult<bool>;
}
