// tests/support/helpers.rs
use std::path::Path;
use std::sync::Arc;

use axum::body::{self, Body};
use serde_json::Value;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use kiji::application::{
    ports::{files::FileStore, render::MarkdownRenderer, time::Clock},
    services::ApplicationServices,
};
use kiji::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use kiji::infrastructure::{
    database,
    files::LocalFileStore,
    markdown::CmarkRenderer,
    repositories::{SqliteArticleReadRepository, SqliteArticleWriteRepository},
    time::SystemClock,
};
use kiji::presentation::http::{routes::build_router, state::HttpState};

/// Fresh in-memory database with the schema applied. A single connection
/// keeps every statement on the same SQLite instance.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");
    database::run_migrations(&pool)
        .await
        .expect("apply migrations");
    pool
}

/// Router wired exactly as in production, over an in-memory database and a
/// caller-owned static root.
pub async fn make_test_router(static_root: &Path) -> axum::Router {
    let pool = Arc::new(memory_pool().await);

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool)));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool)));
    let file_store: Arc<dyn FileStore> = Arc::new(LocalFileStore::new(static_root));
    let renderer: Arc<dyn MarkdownRenderer> = Arc::new(CmarkRenderer);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        file_store,
        renderer,
        clock,
    ));

    build_router(HttpState { services }, static_root.to_path_buf())
}

pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("valid json body")
}

pub async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    body::to_bytes(response.into_body(), 64 * 1024 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub fn json_request(method: &str, uri: &str, payload: &Value) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(payload).expect("serialize")))
        .expect("build request")
}
