use pulldown_cmark::{Parser, html};

use crate::application::ports::render::MarkdownRenderer;

/// CommonMark renderer. Inline HTML in the source is emitted unchanged; no
/// sanitization is applied.
#[derive(Default, Clone)]
pub struct CmarkRenderer;

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new(markdown);
        let mut out = String::new();
        html::push_html(&mut out, parser);
        out
    }
}
