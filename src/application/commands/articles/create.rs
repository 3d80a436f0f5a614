// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleTitle, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub author: Option<String>,
    pub image: Option<String>,
    pub content: String,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;

        let new_article = NewArticle {
            title,
            author: command.author,
            image: command.image,
            content: command.content,
        };

        let created = self.write_repo.insert(new_article).await?;
        Ok(created.into())
    }
}
