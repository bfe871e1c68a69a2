use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Inserts a draft or updates a persisted article, firing the matching
    /// lifecycle notification first. On success the article is marked persisted.
    async fn save(&self, article: &mut Article) -> DomainResult<()>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Trashed articles are not returned.
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Article>>;
    async fn trash(&self, id: ArticleId) -> DomainResult<()>;
}
