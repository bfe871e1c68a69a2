// src/application/services/lifecycle.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::lifecycle::RecordObserver;
use crate::application::services::slug_generator::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::slug::Sluggable;

/// Runs slug generation from the create/update notifications of a
/// persistence layer, honouring the per-record on-create/on-update switches.
#[derive(Clone)]
pub struct SlugLifecycle {
    generator: Arc<SlugGenerator>,
}

impl SlugLifecycle {
    pub fn new(generator: Arc<SlugGenerator>) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl<R> RecordObserver<R> for SlugLifecycle
where
    R: Sluggable + 'static,
{
    async fn before_create(&self, record: &mut R) -> DomainResult<()> {
        let options = record.slug_options();
        if !options.generate_slugs_on_create {
            tracing::debug!(record_type = R::record_type(), "slug generation on create disabled");
            return Ok(());
        }
        self.generator.add_slug(record, &options).await
    }

    async fn before_update(&self, record: &mut R) -> DomainResult<()> {
        let options = record.slug_options();
        if !options.generate_slugs_on_update {
            tracing::debug!(record_type = R::record_type(), "slug generation on update disabled");
            return Ok(());
        }
        self.generator.add_slug(record, &options).await
    }
}
