//! Content rendering - converts stored post bodies into HTML fragments

mod excerpt;
mod transform;

pub use excerpt::sanitize_excerpt;
pub use transform::ContentRenderer;
