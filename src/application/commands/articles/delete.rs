// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Deletes unconditionally; a nonexistent id is a quiet no-op.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        self.write_repo.delete(id).await?;
        Ok(())
    }
}
