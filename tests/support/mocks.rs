// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use kiji::application::error::ApplicationResult;
use kiji::application::ports::{files::FileStore, time::Clock};
use kiji::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleSummary, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use kiji::domain::errors::DomainResult;

/// Vec-backed article store for service-level tests.
pub struct InMemoryArticles {
    articles: Mutex<Vec<Article>>,
    next_id: AtomicI64,
}

impl InMemoryArticles {
    pub fn seeded(articles: Vec<Article>) -> Self {
        let next_id = articles
            .iter()
            .map(|article| i64::from(article.id))
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            articles: Mutex::new(articles),
            next_id: AtomicI64::new(next_id),
        }
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let articles = self.articles.lock().unwrap();
        Ok(articles.iter().find(|article| article.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<ArticleSummary>> {
        let articles = self.articles.lock().unwrap();
        Ok(articles
            .iter()
            .map(|article| ArticleSummary {
                id: article.id,
                title: article.title.clone(),
            })
            .collect())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticles {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let id = ArticleId::new(self.next_id.fetch_add(1, Ordering::SeqCst))?;
        let article = Article {
            id,
            title: article.title,
            author: article.author,
            image: article.image,
            content: article.content,
        };
        self.articles.lock().unwrap().push(article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Option<Article>> {
        let mut articles = self.articles.lock().unwrap();
        let Some(slot) = articles.iter_mut().find(|article| article.id == update.id) else {
            return Ok(None);
        };
        slot.title = update.title;
        slot.author = update.author;
        slot.image = update.image;
        slot.content = update.content;
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.articles
            .lock()
            .unwrap()
            .retain(|article| article.id != id);
        Ok(())
    }
}

/// Map-backed file store; `read` resolves only references inserted up front.
#[derive(Default)]
pub struct MapFileStore {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

impl MapFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, reference: &str, bytes: &[u8]) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(reference.to_string(), bytes.to_vec());
        self
    }
}

#[async_trait]
impl FileStore for MapFileStore {
    async fn save(&self, file_name: &str, bytes: &[u8]) -> ApplicationResult<String> {
        let url = format!("/static/uploads/{file_name}");
        self.files
            .lock()
            .unwrap()
            .insert(url.clone(), bytes.to_vec());
        Ok(url)
    }

    async fn read(&self, reference: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(reference).cloned()
    }
}

/// Clock pinned to a known instant so export dates are deterministic.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
