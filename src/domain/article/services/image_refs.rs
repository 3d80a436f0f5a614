use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

static MARKDOWN_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[.*?\]\((.*?)\)").expect("markdown image pattern"));

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("img selector"));

/// Collect the distinct image references an article depends on.
///
/// Scans `content` for Markdown image syntax `![alt](path)` and for inline
/// `<img>` elements, then appends the article's own `image` field when it is
/// non-blank. The result is deduplicated by exact string equality and carries
/// no ordering guarantee. Malformed markup never fails; `<img>` elements
/// without a non-empty `src` are skipped.
pub fn collect_image_refs(content: &str, image: Option<&str>) -> HashSet<String> {
    let mut refs = HashSet::new();

    for capture in MARKDOWN_IMAGE.captures_iter(content) {
        refs.insert(capture[1].to_string());
    }

    let fragment = Html::parse_fragment(content);
    for element in fragment.select(&IMG_SELECTOR) {
        if let Some(src) = element.value().attr("src") {
            if !src.is_empty() {
                refs.insert(src.to_string());
            }
        }
    }

    if let Some(image) = image {
        if !image.trim().is_empty() {
            refs.insert(image.to_string());
        }
    }

    refs
}
