use super::ArticleQueryService;
use crate::application::{dto::ArticleSummaryDto, error::ApplicationResult};

impl ArticleQueryService {
    /// All articles as (id, title) summaries in insertion order.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let summaries = self.read_repo.list().await?;
        Ok(summaries.into_iter().map(Into::into).collect())
    }
}
