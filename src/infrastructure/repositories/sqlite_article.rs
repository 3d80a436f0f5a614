use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleSummary, ArticleTitle, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

fn map_error(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    image: Option<String>,
    author: Option<String>,
    content: String,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            author: row.author,
            image: row.image,
            content: row.content,
        })
    }
}

#[derive(Debug, FromRow)]
struct SummaryRow {
    id: i64,
    title: String,
}

impl TryFrom<SummaryRow> for ArticleSummary {
    type Error = DomainError;

    fn try_from(row: SummaryRow) -> Result<Self, Self::Error> {
        Ok(ArticleSummary {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            author,
            image,
            content,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, image, author, content) VALUES (?, ?, ?, ?) RETURNING id, title, image, author, content",
        )
        .bind(title.as_str())
        .bind(image)
        .bind(author)
        .bind(content)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_error)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Option<Article>> {
        let ArticleUpdate {
            id,
            title,
            author,
            image,
            content,
        } = update;

        let row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE articles SET title = ?, image = ?, author = ?, content = ? WHERE id = ? RETURNING id, title, image, author, content",
        )
        .bind(title.as_str())
        .bind(image)
        .bind(author)
        .bind(content)
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Article::try_from).transpose()
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, image, author, content FROM articles WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<ArticleSummary>> {
        let rows = sqlx::query_as::<_, SummaryRow>(
            "SELECT id, title FROM articles ORDER BY id",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        rows.into_iter()
            .map(ArticleSummary::try_from)
            .collect::<Result<Vec<_>, _>>()
    }
}
