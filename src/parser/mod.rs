pub mod parser;
pub mod types;

pub use parser::OutlineParser;
pub use types::{Line, LineKind, Outline};
