// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ArticleSummaryDto, ArticleViewDto},
    error::ApplicationError,
    queries::articles::{ExportArticleQuery, GetArticleByIdQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    /// Omitted or null keeps the stored image reference.
    #[serde(default)]
    pub image: Option<String>,
    pub content: String,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleViewDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = CreateArticleCommand {
        title: payload.title,
        author: payload.author,
        image: payload.image,
        content: payload.content,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        author: payload.author,
        image: payload.image,
        content: payload.content,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

pub async fn export_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let bundle = state
        .services
        .article_queries
        .export_article(ExportArticleQuery { id })
        .await
        .into_http()?;

    let disposition = format!("attachment; filename=\"{}\"", bundle.file_name);
    let disposition = HeaderValue::from_str(&disposition).map_err(|err| {
        HttpError::from_error(ApplicationError::infrastructure(err.to_string()))
    })?;

    let headers = [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/zip"),
        ),
        (header::CONTENT_DISPOSITION, disposition),
    ];
    Ok((headers, bundle.bytes).into_response())
}
