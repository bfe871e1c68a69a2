use super::map_sqlx;
use crate::application::ports::lifecycle::RecordObserver;
use crate::application::ports::{ClockPort, time::Clock};
use crate::domain::article::{Article, ArticleContent, ArticleId, ArticleRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::SlugDefaults;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const ARTICLE_COLUMNS: &str = "id, title, summary, slug, created_at, updated_at, deleted_at";

/// Article persistence that notifies observers before every insert/update.
#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: Arc<SqlitePool>,
    clock: Arc<ClockPort>,
    observers: Vec<Arc<dyn RecordObserver<Article>>>,
    slug_defaults: SlugDefaults,
}

impl SqliteArticleRepository {
    pub fn new(pool: Arc<SqlitePool>, clock: Arc<ClockPort>) -> Self {
        Self {
            pool,
            clock,
            observers: Vec::new(),
            slug_defaults: SlugDefaults::default(),
        }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn RecordObserver<Article>>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Defaults handed to every article loaded from storage.
    #[must_use]
    pub fn with_slug_defaults(mut self, defaults: SlugDefaults) -> Self {
        self.slug_defaults = defaults;
        self
    }

    async fn insert(&self, article: &mut Article) -> DomainResult<()> {
        for observer in &self.observers {
            observer.before_create(article).await?;
        }

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO articles (title, summary, slug, created_at, updated_at, deleted_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(&article.content.title)
        .bind(article.content.summary.as_deref())
        .bind(article.content.slug.as_deref())
        .bind(article.created_at)
        .bind(article.updated_at)
        .bind(article.deleted_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        let id = ArticleId::new(id)?;
        article.mark_persisted(id);
        tracing::info!(article_id = %id, slug = ?article.slug(), "article created");
        Ok(())
    }

    async fn update(&self, id: ArticleId, article: &mut Article) -> DomainResult<()> {
        for observer in &self.observers {
            observer.before_update(article).await?;
        }

        article.updated_at = self.clock.now();
        let result = sqlx::query(
            "UPDATE articles SET title = ?, summary = ?, slug = ?, updated_at = ?, deleted_at = ? WHERE id = ?",
        )
        .bind(&article.content.title)
        .bind(article.content.summary.as_deref())
        .bind(article.content.slug.as_deref())
        .bind(article.updated_at)
        .bind(article.deleted_at)
        .bind(i64::from(id))
        .execute(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("article {id} not found")));
        }

        article.mark_persisted(id);
        tracing::info!(article_id = %id, slug = ?article.slug(), "article updated");
        Ok(())
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    summary: Option<String>,
    slug: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl ArticleRow {
    fn into_article(self, defaults: SlugDefaults) -> DomainResult<Article> {
        let content = ArticleContent {
            title: self.title,
            summary: self.summary,
            slug: self.slug,
        };
        Ok(Article::hydrate(
            ArticleId::new(self.id)?,
            content,
            self.created_at,
            self.updated_at,
            self.deleted_at,
        )
        .with_slug_defaults(defaults))
    }
}

#[async_trait]
impl ArticleRepository for SqliteArticleRepository {
    async fn save(&self, article: &mut Article) -> DomainResult<()> {
        match article.id {
            None => self.insert(article).await,
            Some(id) => self.update(id, article).await,
        }
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(|row| row.into_article(self.slug_defaults)).transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = ? AND deleted_at IS NULL"
        ))
        .bind(slug)
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(|row| row.into_article(self.slug_defaults)).transpose()
    }

    async fn trash(&self, id: ArticleId) -> DomainResult<()> {
        let now = self.clock.now();
        let result = sqlx::query(
            "UPDATE articles SET deleted_at = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(now)
        .bind(now)
        .bind(i64::from(id))
        .execute(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("article {id} not found")));
        }

        tracing::info!(article_id = %id, "article trashed");
        Ok(())
    }
}
