// src/application/ports/lifecycle.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Notifications a persistence layer fires before committing a record.
///
/// An error returned from either hook aborts the save.
#[async_trait]
pub trait RecordObserver<R: Send>: Send + Sync {
    async fn before_create(&self, record: &mut R) -> DomainResult<()>;
    async fn before_update(&self, record: &mut R) -> DomainResult<()>;
}
