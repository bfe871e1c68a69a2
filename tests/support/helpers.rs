// tests/support/helpers.rs
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use sluggable::application::ports::lifecycle::RecordObserver;
use sluggable::application::services::SlugServices;
use sluggable::domain::article::Article;
use sluggable::domain::slug::SlugRepository;
use sluggable::infrastructure::{
    database,
    repositories::{InMemorySlugRepository, SqliteArticleRepository, SqliteSlugRepository},
    time::FixedClock,
    util::DefaultSlugifier,
};
use sqlx::SqlitePool;

pub fn services_with(repo: Arc<dyn SlugRepository>) -> SlugServices {
    SlugServices::new(repo, Arc::new(DefaultSlugifier))
}

pub fn in_memory_services() -> (Arc<InMemorySlugRepository>, SlugServices) {
    let repo = Arc::new(InMemorySlugRepository::new());
    let services = services_with(repo.clone());
    (repo, services)
}

pub fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap())
}

/// Single-connection in-memory database with migrations applied.
pub async fn memory_pool() -> Arc<SqlitePool> {
    let pool = database::init_pool("sqlite::memory:", 1).await.unwrap();
    database::run_migrations(&pool).await.unwrap();
    Arc::new(pool)
}

/// Article repository wired with slug lifecycle hooks over `pool`.
pub fn article_repo(pool: &Arc<SqlitePool>) -> SqliteArticleRepository {
    let services = services_with(Arc::new(SqliteSlugRepository::new(Arc::clone(pool))));
    let observer: Arc<dyn RecordObserver<Article>> = services.lifecycle;
    SqliteArticleRepository::new(Arc::clone(pool), Arc::new(fixed_clock())).with_observer(observer)
}
