use crate::parser::types::*;
use crate::PASTE_MARKER;
use tracing::debug;

// Parser for turning raw text into the typed line model. Three passes:
// classify each physical line, link parents, resolve output depths.
pub struct OutlineParser;

impl OutlineParser {
    pub fn parse(&self, input: &str) -> Outline {
        let mut lines = self.classify_lines(input);
        self.link_parents(&mut lines);
        self.resolve_depths(&mut lines);
        debug!(line_count = lines.len(), "parsed input");
        Outline { lines }
    }

    /// First pass: one `Line` record per physical line. Fence state is the
    /// only carry-over between lines; inside a fence no other classification
    /// runs and the inner text accumulates on the opening fence.
    fn classify_lines(&self, input: &str) -> Vec<Line> {
        let mut lines: Vec<Line> = Vec::new();
        let mut open_fence: Option<usize> = None;

        for raw in input.lines() {
            let index = lines.len();
            let trimmed = raw.trim();
            let leading_spaces = raw.chars().take_while(|c| *c == ' ').count();
            let indent = leading_spaces / 2;

            let kind = if let Some(fence_index) = open_fence {
                if trimmed.starts_with("```") {
                    open_fence = None;
                } else {
                    lines[fence_index].code.push(trimmed.to_string());
                }
                LineKind::Code
            } else if trimmed.is_empty() || trimmed == PASTE_MARKER {
                // Marker echoes are dropped so converting our own output
                // never duplicates the prefix line.
                LineKind::Blank
            } else if trimmed.starts_with("```") {
                open_fence = Some(index);
                LineKind::FenceOpen
            } else if trimmed.starts_with('#') {
                let level = trimmed.chars().take_while(|c| *c == '#').count();
                LineKind::Heading { level }
            } else {
                LineKind::Text
            };

            lines.push(Line {
                raw: raw.to_string(),
                indent,
                content: trimmed.to_string(),
                kind,
                parent: None,
                depth: 0,
                code: Vec::new(),
            });
        }

        lines
    }

    /// Second pass: assign a parent index to every non-blank line.
    ///
    /// `headers_at_level[l - 1]` holds the most recent heading of level `l`;
    /// `last_at_indent[d + 1]` holds the most recent content line at indent
    /// `d`, with slot 0 reserved for the root sentinel. Both tables are
    /// locals of this pass.
    fn link_parents(&self, lines: &mut [Line]) {
        let mut headers_at_level: Vec<Option<usize>> = Vec::new();
        let mut last_at_indent: Vec<Option<usize>> = vec![None];
        let mut fence_parent: Option<usize> = None;

        for index in 0..lines.len() {
            match lines[index].kind {
                LineKind::Blank => {}
                LineKind::Code => {
                    // Inside a fence every line keeps the parent that was
                    // active when the fence opened.
                    lines[index].parent = fence_parent;
                }
                LineKind::Heading { level } => {
                    let parent = if level > 1 {
                        headers_at_level.get(level - 2).copied().flatten()
                    } else {
                        None
                    };
                    lines[index].parent = parent;

                    if headers_at_level.len() < level {
                        headers_at_level.resize(level, None);
                    }
                    headers_at_level[level - 1] = Some(index);
                    headers_at_level.truncate(level);

                    // Content after a heading attaches to it, regardless of
                    // how deep the previous content ran.
                    last_at_indent.clear();
                    last_at_indent.push(Some(index));
                }
                LineKind::Text | LineKind::FenceOpen => {
                    let indent = lines[index].indent;
                    last_at_indent.truncate(indent + 1);
                    // An indent that jumps past every known depth leaves the
                    // slot empty, and the line falls back to the root.
                    let parent = last_at_indent.get(indent).copied().flatten();
                    lines[index].parent = parent;

                    while last_at_indent.len() < indent + 1 {
                        last_at_indent.push(None);
                    }
                    last_at_indent.push(Some(index));

                    if lines[index].kind == LineKind::FenceOpen {
                        fence_parent = parent;
                    }
                }
            }
        }
    }

    /// Third pass: map the parent chain to output depths. Headings use
    /// `level - 1` directly (a skipped level keeps its jump); content sits
    /// one below its parent, with the root sentinel at depth 0.
    fn resolve_depths(&self, lines: &mut [Line]) {
        for index in 0..lines.len() {
            let depth = match lines[index].kind {
                LineKind::Heading { level } => level.saturating_sub(1),
                LineKind::Blank => 0,
                _ => {
                    let parent_depth = match lines[index].parent {
                        Some(p) => lines[p].depth,
                        None => 0,
                    };
                    parent_depth + 1
                }
            };
            lines[index].depth = depth;
        }
    }
}
