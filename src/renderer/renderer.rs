use crate::parser::*;
use crate::renderer::{dates, fields, inline};
use crate::PASTE_MARKER;
use regex::Regex;
use std::sync::LazyLock;

static HEADING_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#+\s+").unwrap());

pub struct OutlineRenderer;

impl OutlineRenderer {
    /// Walk the lines in input order and emit the outline: the fixed marker
    /// line, then one bullet per non-blank line at two spaces of indentation
    /// per depth. Fenced code blocks come out as a single bullet holding the
    /// de-fenced inner lines.
    pub fn render(&self, outline: &Outline) -> String {
        let mut output = String::from(PASTE_MARKER);
        output.push('\n');

        for line in &outline.lines {
            let content = match &line.kind {
                LineKind::Blank | LineKind::Code => continue,
                LineKind::FenceOpen => line.code.join("\n"),
                LineKind::Heading { .. } => rewrite_content(&strip_heading_prefix(&line.content)),
                LineKind::Text => rewrite_content(&line.content),
            };
            output.push_str(&"  ".repeat(line.depth));
            output.push_str("- ");
            output.push_str(&content);
            output.push('\n');
        }

        output
    }
}

/// Remove the leading hashes of a heading. Hashes not followed by
/// whitespace stay put, so a bare `#tag` line keeps its tag text.
fn strip_heading_prefix(content: &str) -> String {
    HEADING_PREFIX.replace(content, "").into_owned()
}

/// The fixed rewrite pipeline for one line of content: list markers first,
/// then fields, then dates, then inline delimiters. Unmatched text falls
/// through each step unchanged.
fn rewrite_content(content: &str) -> String {
    let text = inline::strip_list_marker(content);
    let text = fields::rewrite_fields(text);
    let text = dates::rewrite_dates(&text);
    inline::rewrite_inline(&text)
}
