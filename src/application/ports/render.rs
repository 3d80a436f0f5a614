// src/application/ports/render.rs

/// Converts raw Markdown to HTML for display. Inline HTML in the source
/// passes through unchanged; there is no failure mode.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> String;
}
