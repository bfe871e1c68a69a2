// src/domain/slug/services.rs
use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::slug::options::SlugOptions;
use crate::domain::slug::record::Sluggable;
use crate::domain::slug::repository::{SlugQuery, SlugRepository};

/// Domain service resolving slug collisions against storage.
///
/// The existence probe and the eventual commit of the record are not atomic:
/// two concurrent saves deriving the same base can both see a free slug.
/// Storage should carry a uniqueness constraint on the slug column so the
/// second commit fails with a conflict instead of persisting a duplicate.
pub struct SlugUniquenessService {
    repo: Arc<dyn SlugRepository>,
}

impl SlugUniquenessService {
    pub fn new(repo: Arc<dyn SlugRepository>) -> Self {
        Self { repo }
    }

    /// Appends `-1`, `-2`, ... to `base` until neither storage nor emptiness
    /// rules it out. Numbering restarts at 1 on every call.
    pub async fn make_slug_unique<R: Sluggable>(
        &self,
        record: &R,
        options: &SlugOptions<R>,
        base: &str,
    ) -> DomainResult<String> {
        let mut candidate = base.to_string();
        let mut counter = 1u64;

        while candidate.is_empty()
            || self
                .other_record_exists_with_slug(record, options, &candidate)
                .await?
        {
            tracing::debug!(
                record_type = R::record_type(),
                slug = %candidate,
                "slug candidate taken"
            );
            candidate = format!("{base}-{counter}");
            counter += 1;
        }

        if counter > 1 {
            tracing::debug!(
                record_type = R::record_type(),
                base,
                slug = %candidate,
                attempts = counter,
                "resolved slug collision"
            );
        }

        Ok(candidate)
    }

    /// Whether a sibling of `record` already holds `slug`. Trashed siblings
    /// count when the record type soft-deletes.
    pub async fn other_record_exists_with_slug<R: Sluggable>(
        &self,
        record: &R,
        options: &SlugOptions<R>,
        slug: &str,
    ) -> DomainResult<bool> {
        let query = SlugQuery {
            record_type: R::record_type(),
            key_name: R::key_name(),
            field: &options.slug_field,
            value: slug,
            exclude_key: record.primary_key().unwrap_or(0),
            include_trashed: R::supports_soft_delete(),
        };
        self.repo.exists_other_with_field_value(&query).await
    }
}
