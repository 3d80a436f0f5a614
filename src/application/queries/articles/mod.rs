mod export;
mod get_by_id;
mod list;
mod service;

pub use export::ExportArticleQuery;
pub use get_by_id::GetArticleByIdQuery;
pub use service::ArticleQueryService;
