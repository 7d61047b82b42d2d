use serde::Serialize;

/// Classification of a single physical input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// A heading line; `level` is the count of leading `#` characters.
    Heading { level: usize },
    /// Ordinary content.
    Text,
    /// A triple-backtick fence that opens a code block. The collected inner
    /// lines live in `Line::code`.
    FenceOpen,
    /// A line inside a fenced block, or the closing fence. Not emitted on
    /// its own; its content is absorbed into the opening fence's node.
    Code,
    /// Empty or whitespace-only. Skipped everywhere downstream.
    Blank,
}

/// One physical input line plus everything the parsing passes derive about it.
#[derive(Debug, Clone, Serialize)]
pub struct Line {
    /// The line exactly as it appeared in the input.
    pub raw: String,
    /// Leading-whitespace indent, two spaces per level.
    pub indent: usize,
    /// Trimmed content.
    pub content: String,
    pub kind: LineKind,
    /// Index of the parent line, or `None` for the root sentinel.
    pub parent: Option<usize>,
    /// Resolved output nesting depth.
    pub depth: usize,
    /// For `FenceOpen` lines: the de-fenced inner lines of the block.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub code: Vec<String>,
}

/// The fully parsed line model, in input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Outline {
    pub lines: Vec<Line>,
}
