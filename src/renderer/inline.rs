use regex::Regex;
use std::sync::LazyLock;

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*+]|\d+[.)])\s+").unwrap());

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

// Only the full bracket-paren shape is a link; bare bracketed text like
// `[00:00]` stays verbatim.
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

static BOLD_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__([^_]+)__").unwrap());

// The regex crate has no lookaround, so emphasis boundaries are captured
// and re-emitted.
static ITALIC_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^*])\*([^*\n]+)\*([^*]|$)").unwrap());

static ITALIC_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^_])_([^_\n]+)_([^_]|$)").unwrap());

static HIGHLIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"==([^=\n]+)==").unwrap());

/// Strip a leading bullet (`-`, `*`, `+`) or numbered-list marker. The
/// emitter supplies the single output bullet, so a checkbox after the
/// marker survives into the content (`- [ ] task` emits as `- [ ] task`).
pub fn strip_list_marker(text: &str) -> &str {
    match LIST_MARKER.find(text) {
        Some(marker) => &text[marker.end()..],
        None => text,
    }
}

/// Remap markdown inline syntax to the outline paste conventions: images
/// and links become `name::target` fields, `__bold__` becomes `**bold**`,
/// single-delimiter italics become `__italic__`, and `==highlight==`
/// becomes `^^highlight^^`.
pub fn rewrite_inline(text: &str) -> String {
    let text = IMAGE.replace_all(text, |caps: &regex::Captures| {
        let alt = caps[1].trim();
        let alt = if alt.is_empty() { "image" } else { alt };
        format!("{}::{}", alt, &caps[2])
    });
    let text = LINK.replace_all(&text, "${1}::${2}");
    let text = BOLD_UNDERSCORE.replace_all(&text, "**$1**");
    // Boundary captures consume the separator between adjacent spans, so
    // run the italic passes twice to catch `*a* *b*`.
    let text = ITALIC_STAR.replace_all(&text, "$1__$2__$3");
    let text = ITALIC_STAR.replace_all(&text, "$1__$2__$3");
    let text = ITALIC_UNDERSCORE.replace_all(&text, "$1__$2__$3");
    let text = ITALIC_UNDERSCORE.replace_all(&text, "$1__$2__$3");
    HIGHLIGHT.replace_all(&text, "^^$1^^").into_owned()
}
