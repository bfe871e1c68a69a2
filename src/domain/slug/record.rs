// src/domain/slug/record.rs
use crate::domain::errors::DomainResult;
use crate::domain::slug::options::SlugOptions;

/// Capability a persisted record type implements to receive generated slugs.
///
/// Field values are plain strings; an unset field is `None`. `original_field`
/// reports the last persisted value and is `None` before the first save.
pub trait Sluggable: Send + Sync + Sized {
    /// Storage name shared by all records of this type (the table).
    fn record_type() -> &'static str;

    fn key_name() -> &'static str {
        "id"
    }

    /// Whether records of this type are trashed instead of removed.
    fn supports_soft_delete() -> bool {
        false
    }

    fn slug_options(&self) -> SlugOptions<Self>;

    fn field(&self, name: &str) -> Option<String>;

    fn set_field(&mut self, name: &str, value: String) -> DomainResult<()>;

    fn original_field(&self, name: &str) -> Option<String>;

    fn primary_key(&self) -> Option<i64>;
}
