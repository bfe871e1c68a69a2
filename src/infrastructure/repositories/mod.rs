// src/infrastructure/repositories/mod.rs
mod error;
mod memory_slug;
mod sqlite_article;
mod sqlite_slug;

pub use error::map_sqlx;
pub use memory_slug::InMemorySlugRepository;
pub use sqlite_article::SqliteArticleRepository;
pub use sqlite_slug::SqliteSlugRepository;
