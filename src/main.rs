use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kiji::application::{
    ports::{files::FileStore, render::MarkdownRenderer, time::Clock},
    services::ApplicationServices,
};
use kiji::config::AppConfig;
use kiji::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use kiji::infrastructure::{
    database,
    files::LocalFileStore,
    markdown::CmarkRenderer,
    repositories::{SqliteArticleReadRepository, SqliteArticleWriteRepository},
    time::SystemClock,
};
use kiji::presentation::http::{routes::build_router, state::HttpState};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool)));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool)));

    let file_store: Arc<dyn FileStore> = Arc::new(LocalFileStore::new(config.static_root()));
    let renderer: Arc<dyn MarkdownRenderer> = Arc::new(CmarkRenderer);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        file_store,
        renderer,
        clock,
    ));

    let state = HttpState { services };
    let app = build_router(state, config.static_root().clone());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
