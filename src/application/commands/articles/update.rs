use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleTitle, ArticleUpdate},
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    /// None retains the stored image reference.
    pub image: Option<String>,
    pub content: String,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let title = ArticleTitle::new(command.title)?;
        let image = command.image.or(existing.image);

        let update = ArticleUpdate {
            id,
            title,
            author: command.author,
            image,
            content: command.content,
        };

        let updated = self
            .write_repo
            .update(update)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(updated.into())
    }
}
