// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::ports::util::Slugifier,
    domain::slug::{SlugRepository, SlugUniquenessService},
};

pub mod lifecycle;
pub mod slug_generator;

pub use lifecycle::SlugLifecycle;
pub use slug_generator::{SlugGenerator, guard_against_invalid_slug_options};

/// Wires the slug services from their storage and normalizer ports.
pub struct SlugServices {
    pub generator: Arc<SlugGenerator>,
    pub lifecycle: Arc<SlugLifecycle>,
}

impl SlugServices {
    pub fn new(slug_repo: Arc<dyn SlugRepository>, slugifier: Arc<dyn Slugifier>) -> Self {
        let uniqueness = Arc::new(SlugUniquenessService::new(Arc::clone(&slug_repo)));
        let generator = Arc::new(SlugGenerator::new(uniqueness, Arc::clone(&slugifier)));
        let lifecycle = Arc::new(SlugLifecycle::new(Arc::clone(&generator)));

        Self {
            generator,
            lifecycle,
        }
    }
}
