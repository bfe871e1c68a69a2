use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{SlugQuery, SlugRepository};
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

/// Answers slug existence probes against SQLite tables.
///
/// No soft-delete scope is applied, so trashed rows always match. That is
/// what soft-deleting record types ask for; types without soft deletion have
/// no trashed rows to exclude.
#[derive(Clone)]
pub struct SqliteSlugRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteSlugRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

/// Table and column names are interpolated into SQL, so only plain
/// identifiers are accepted.
fn ensure_identifier(name: &str) -> DomainResult<&str> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(name)
    } else {
        Err(DomainError::Validation(format!(
            "invalid SQL identifier: {name:?}"
        )))
    }
}

#[async_trait]
impl SlugRepository for SqliteSlugRepository {
    async fn exists_other_with_field_value(&self, query: &SlugQuery<'_>) -> DomainResult<bool> {
        let table = ensure_identifier(query.record_type)?;
        let field = ensure_identifier(query.field)?;
        let key = ensure_identifier(query.key_name)?;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT EXISTS(SELECT 1 FROM ");
        builder
            .push(table)
            .push(" WHERE ")
            .push(field)
            .push(" = ")
            .push_bind(query.value)
            .push(" AND ")
            .push(key)
            .push(" != ")
            .push_bind(query.exclude_key)
            .push(")");

        let exists = builder
            .build_query_scalar::<i64>()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(exists != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_validated() {
        assert!(ensure_identifier("articles").is_ok());
        assert!(ensure_identifier("_slug_2").is_ok());
        assert!(ensure_identifier("").is_err());
        assert!(ensure_identifier("2slug").is_err());
        assert!(ensure_identifier("slug; DROP TABLE articles").is_err());
        assert!(ensure_identifier("articles.slug").is_err());
    }
}
