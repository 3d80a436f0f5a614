/// Characters that cannot appear in filenames on common filesystems.
const UNSAFE: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Title with every filesystem-unsafe character replaced by an underscore.
/// Names the exported Markdown entry and its image subfolder.
pub fn safe_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if UNSAFE.contains(&c) { '_' } else { c })
        .collect()
}

/// Download name for an article's export archive: the author field verbatim
/// when present and non-blank, else a fixed fallback. Unlike the title, the
/// author is not passed through `safe_title`.
pub fn archive_name(author: Option<&str>) -> String {
    match author {
        Some(author) if !author.trim().is_empty() => format!("{author}.zip"),
        _ => "export.zip".to_string(),
    }
}
