use crate::domain::article::entity::{Article, ArticleSummary, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Keyed update; returns None when no row carries the id.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Option<Article>>;
    /// Unconditional delete; absent ids are a no-op.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// All articles as (id, title) pairs in insertion order.
    async fn list(&self) -> DomainResult<Vec<ArticleSummary>>;
}
