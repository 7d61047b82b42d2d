//! # outliner
//!
//! Convert markdown-style text into a strictly nested outline paste format.
//!
//! The converter is a pure function: it classifies each input line, infers
//! parent/child relationships from heading levels and indentation, rewrites
//! inline dates and `key: value` metadata into structured annotations, and
//! emits one bullet per line under a fixed `%%tana%%` marker.
//!
//! ```rust
//! let output = outliner::convert(Some("# Inbox\n- call the bank"));
//! assert_eq!(output, "%%tana%%\n- Inbox\n  - call the bank\n");
//! ```

pub mod parser;
pub mod renderer;


pub use parser::{Line, LineKind, Outline, OutlineParser};
pub use renderer::OutlineRenderer;

/// Marker line that prefixes every converted outline.
pub const PASTE_MARKER: &str = "%%tana%%";

/// Returned verbatim when there is no input to convert.
pub const EMPTY_INPUT_MESSAGE: &str = "No text selected.";

/// Convert markdown text to the outline paste format.
///
/// `None` short-circuits to [`EMPTY_INPUT_MESSAGE`]; any actual string
/// converts without error, malformed input included.
pub fn convert(input: Option<&str>) -> String {
    let Some(text) = input else {
        return EMPTY_INPUT_MESSAGE.to_string();
    };

    let outline = OutlineParser.parse(text);
    OutlineRenderer.render(&outline)
}
