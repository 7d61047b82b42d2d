pub mod dates;
pub mod fields;
pub mod inline;
pub mod renderer;

pub use renderer::OutlineRenderer;
