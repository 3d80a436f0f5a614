pub mod articles;
pub mod images;

pub use articles::{ArticleBundleDto, ArticleDto, ArticleSummaryDto, ArticleViewDto};
pub use images::ImageUploadDto;
