use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleViewDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleViewDto> {
        let id = ArticleId::new(query.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let html = self.renderer.render(&article.content);
        Ok(ArticleViewDto {
            article: article.into(),
            html,
        })
    }
}
