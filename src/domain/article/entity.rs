// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{SlugDefaults, SlugOptions, Sluggable};
use chrono::{DateTime, Utc};

pub const FIELD_TITLE: &str = "title";
pub const FIELD_SUMMARY: &str = "summary";
pub const FIELD_SLUG: &str = "slug";

/// Mutable columns of an article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleContent {
    pub title: String,
    pub summary: Option<String>,
    pub slug: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Article {
    pub id: Option<ArticleId>,
    pub content: ArticleContent,
    original: Option<ArticleContent>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    slug_defaults: SlugDefaults,
}

impl Article {
    /// A not-yet-persisted article.
    pub fn draft(title: ArticleTitle, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            content: ArticleContent {
                title: title.into(),
                summary: None,
                slug: None,
            },
            original: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            slug_defaults: SlugDefaults::default(),
        }
    }

    /// Rebuilds an article from storage; the loaded content is its original state.
    pub fn hydrate(
        id: ArticleId,
        content: ArticleContent,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: Some(id),
            original: Some(content.clone()),
            content,
            created_at,
            updated_at,
            deleted_at,
            slug_defaults: SlugDefaults::default(),
        }
    }

    #[must_use]
    pub fn with_slug_defaults(mut self, defaults: SlugDefaults) -> Self {
        self.slug_defaults = defaults;
        self
    }

    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.content.summary = Some(summary.into());
        self
    }

    pub fn set_title(&mut self, title: ArticleTitle, now: DateTime<Utc>) {
        self.content.title = title.into();
        self.updated_at = now;
    }

    pub fn set_slug(&mut self, slug: impl Into<String>, now: DateTime<Utc>) {
        self.content.slug = Some(slug.into());
        self.updated_at = now;
    }

    pub fn slug(&self) -> Option<&str> {
        self.content.slug.as_deref()
    }

    pub fn is_trashed(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn trash(&mut self, now: DateTime<Utc>) {
        self.deleted_at = Some(now);
        self.updated_at = now;
    }

    /// Records a successful save: assigns the key and snapshots the content.
    pub fn mark_persisted(&mut self, id: ArticleId) {
        self.id = Some(id);
        self.original = Some(self.content.clone());
    }
}

impl Sluggable for Article {
    fn record_type() -> &'static str {
        "articles"
    }

    fn supports_soft_delete() -> bool {
        true
    }

    fn slug_options(&self) -> SlugOptions<Self> {
        SlugOptions::create()
            .generate_slugs_from([FIELD_TITLE])
            .save_slugs_to(FIELD_SLUG)
            .with_defaults(self.slug_defaults)
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            FIELD_TITLE => Some(self.content.title.clone()),
            FIELD_SUMMARY => self.content.summary.clone(),
            FIELD_SLUG => self.content.slug.clone(),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> DomainResult<()> {
        match name {
            FIELD_TITLE => self.content.title = value,
            FIELD_SUMMARY => self.content.summary = Some(value),
            FIELD_SLUG => self.content.slug = Some(value),
            other => {
                return Err(DomainError::Validation(format!(
                    "article has no field named {other}"
                )));
            }
        }
        Ok(())
    }

    fn original_field(&self, name: &str) -> Option<String> {
        let original = self.original.as_ref()?;
        match name {
            FIELD_TITLE => Some(original.title.clone()),
            FIELD_SUMMARY => original.summary.clone(),
            FIELD_SLUG => original.slug.clone(),
            _ => None,
        }
    }

    fn primary_key(&self) -> Option<i64> {
        self.id.map(i64::from)
    }
}
