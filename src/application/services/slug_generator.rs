// src/application/services/slug_generator.rs
use std::sync::Arc;

use crate::application::ports::{SlugifierPort, util::Slugifier};
use crate::domain::errors::{DomainResult, InvalidOption};
use crate::domain::slug::source::{has_custom_slug_been_used, slug_source_string};
use crate::domain::slug::{SlugOptions, SlugSource, SlugUniquenessService, Sluggable};

/// Fails when the options cannot produce a slug. Runs before anything else
/// so a misconfigured record type leaves no partial state behind.
pub fn guard_against_invalid_slug_options<R>(options: &SlugOptions<R>) -> Result<(), InvalidOption> {
    if let SlugSource::Fields(fields) = &options.source {
        if fields.is_empty() {
            return Err(InvalidOption::MissingFromField);
        }
    }

    if options.slug_field.is_empty() {
        return Err(InvalidOption::MissingSlugField);
    }

    if options.maximum_length <= 0 {
        return Err(InvalidOption::InvalidMaximumLength);
    }

    Ok(())
}

/// Derives, uniquifies and stores slugs on records.
pub struct SlugGenerator {
    uniqueness: Arc<SlugUniquenessService>,
    slugifier: Arc<SlugifierPort>,
}

impl SlugGenerator {
    pub fn new(uniqueness: Arc<SlugUniquenessService>, slugifier: Arc<SlugifierPort>) -> Self {
        Self {
            uniqueness,
            slugifier,
        }
    }

    /// Explicit generation. Ignores the on-create / on-update switches.
    pub async fn generate_slug<R: Sluggable>(&self, record: &mut R) -> DomainResult<()> {
        let options = record.slug_options();
        self.add_slug(record, &options).await
    }

    /// Writes a slug into `options.slug_field`.
    ///
    /// A value the caller put in the slug field since the last save is kept
    /// verbatim (no normalization); otherwise the slug is derived from the
    /// configured source. Uniqueness suffixing applies to both paths.
    pub async fn add_slug<R: Sluggable>(
        &self,
        record: &mut R,
        options: &SlugOptions<R>,
    ) -> DomainResult<()> {
        guard_against_invalid_slug_options(options)?;

        let mut slug = self.generate_non_unique_slug(record, options);

        if options.generate_unique_slugs {
            slug = self
                .uniqueness
                .make_slug_unique(&*record, options, &slug)
                .await?;
        }

        tracing::debug!(
            record_type = R::record_type(),
            key = ?record.primary_key(),
            field = %options.slug_field,
            slug = %slug,
            "slug generated"
        );

        record.set_field(&options.slug_field, slug)
    }

    fn generate_non_unique_slug<R: Sluggable>(&self, record: &R, options: &SlugOptions<R>) -> String {
        if has_custom_slug_been_used(record, options) {
            return record.field(&options.slug_field).unwrap_or_default();
        }

        self.slugifier.slugify(&slug_source_string(record, options))
    }
}
