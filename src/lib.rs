//! Deterministic, collision-free slugs for persisted records.
//!
//! Record types implement [`domain::slug::Sluggable`] and describe their
//! configuration with [`domain::slug::SlugOptions`]. Slugs are produced by
//! [`application::services::SlugGenerator`], either explicitly or through the
//! [`application::services::SlugLifecycle`] hooks a persistence layer fires
//! before creating or updating a record.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
