// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};

/// A stored article. `content` is opaque Markdown/HTML mixed source and is
/// never normalized; `image` holds an optional cover-image reference.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub author: Option<String>,
    pub image: Option<String>,
    pub content: String,
}

/// Fields supplied by the caller at creation; the id comes from the store.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub author: Option<String>,
    pub image: Option<String>,
    pub content: String,
}

/// Full-field replacement keyed by id. The id itself is immutable.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub author: Option<String>,
    pub image: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub title: ArticleTitle,
}
