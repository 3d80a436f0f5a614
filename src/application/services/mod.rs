// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, images::ImageCommandService},
        ports::{files::FileStore, render::MarkdownRenderer, time::Clock},
        queries::articles::ArticleQueryService,
    },
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub image_commands: Arc<ImageCommandService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        file_store: Arc<dyn FileStore>,
        renderer: Arc<dyn MarkdownRenderer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&renderer),
            Arc::clone(&file_store),
            Arc::clone(&clock),
        ));

        let image_commands = Arc::new(ImageCommandService::new(Arc::clone(&file_store)));

        Self {
            article_commands,
            article_queries,
            image_commands,
        }
    }
}
