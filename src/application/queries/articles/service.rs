use std::sync::Arc;

use crate::application::ports::{files::FileStore, render::MarkdownRenderer, time::Clock};
use crate::domain::article::ArticleReadRepository;

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) renderer: Arc<dyn MarkdownRenderer>,
    pub(super) file_store: Arc<dyn FileStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        renderer: Arc<dyn MarkdownRenderer>,
        file_store: Arc<dyn FileStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            renderer,
            file_store,
            clock,
        }
    }
}
