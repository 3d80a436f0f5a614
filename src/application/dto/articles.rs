use crate::domain::article::{Article, ArticleSummary};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub image: Option<String>,
    pub content: String,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            author: article.author,
            image: article.image,
            content: article.content,
        }
    }
}

/// An article plus its content rendered to HTML for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleViewDto {
    #[serde(flatten)]
    pub article: ArticleDto,
    pub html: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub title: String,
}

impl From<ArticleSummary> for ArticleSummaryDto {
    fn from(summary: ArticleSummary) -> Self {
        Self {
            id: summary.id.into(),
            title: summary.title.into(),
        }
    }
}

/// A fully assembled export archive held in memory.
#[derive(Debug, Clone)]
pub struct ArticleBundleDto {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
