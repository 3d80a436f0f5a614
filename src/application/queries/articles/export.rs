// src/application/queries/articles/export.rs
use std::collections::HashSet;
use std::fmt;
use std::io::{Cursor, Write};

use chrono::NaiveDate;
use zip::write::{SimpleFileOptions, ZipWriter};

use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleBundleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        Article, ArticleId,
        services::{archive_name, collect_image_refs, safe_title},
    },
};

pub struct ExportArticleQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Assemble a self-contained ZIP for one article: a Markdown entry with
    /// front matter plus every referenced image that resolves to a readable
    /// local file. The archive is built entirely in memory.
    pub async fn export_article(
        &self,
        query: ExportArticleQuery,
    ) -> ApplicationResult<ArticleBundleDto> {
        let id = ArticleId::new(query.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let document = front_matter_document(&article, self.clock.now().date_naive());
        let title = safe_title(article.title.as_str());
        let image_folder = format!("{title}_images");

        let mut references: Vec<String> =
            collect_image_refs(&article.content, article.image.as_deref())
                .into_iter()
                .collect();
        // The reference set is unordered; sort for a stable archive layout.
        references.sort();

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        writer
            .start_file(format!("{title}.md"), options)
            .map_err(bundle_error)?;
        writer.write_all(document.as_bytes()).map_err(bundle_error)?;

        let mut entry_names = HashSet::new();
        for reference in references {
            let Some(bytes) = self.file_store.read(&reference).await else {
                tracing::debug!(%reference, "skipping unresolvable image reference");
                continue;
            };
            let Some(base) = base_name(&reference) else {
                continue;
            };
            // Two references sharing a basename collapse to one entry.
            if !entry_names.insert(base.to_string()) {
                continue;
            }
            writer
                .start_file(format!("{image_folder}/{base}"), options)
                .map_err(bundle_error)?;
            writer.write_all(&bytes).map_err(bundle_error)?;
        }

        let cursor = writer.finish().map_err(bundle_error)?;
        Ok(ArticleBundleDto {
            file_name: archive_name(article.author.as_deref()),
            bytes: cursor.into_inner(),
        })
    }
}

/// Front-matter header followed by a blank line and the raw content
/// verbatim; stripping the header reproduces the content byte-for-byte.
fn front_matter_document(article: &Article, date: NaiveDate) -> String {
    format!(
        "---\ntitle: \"{}\"\nimage: \"{}\"\nauthor: \"{}\"\ndate: \"{}\"\n---\n\n{}",
        article.title,
        article.image.as_deref().unwrap_or(""),
        article.author.as_deref().unwrap_or(""),
        date.format("%Y-%m-%d"),
        article.content,
    )
}

/// Final path segment of a reference, handling both separator styles.
fn base_name(reference: &str) -> Option<&str> {
    reference
        .rsplit(['/', '\\'])
        .next()
        .filter(|segment| !segment.is_empty())
}

fn bundle_error(err: impl fmt::Display) -> ApplicationError {
    ApplicationError::infrastructure(format!("failed to assemble export archive: {err}"))
}
