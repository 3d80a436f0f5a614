// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, images};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::Method,
    routing::{get, post},
};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub fn build_router(state: HttpState, static_root: PathBuf) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/v1/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route("/api/v1/articles/{id}/export", get(articles::export_article))
        .route("/api/v1/images", post(images::upload_image))
        .nest_service("/static", ServeDir::new(static_root))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
