//! Excerpt sanitizer
//!
//! Preview-card excerpts may carry arbitrary HTML from the stored
//! record. Only a small set of inline formatting tags is allowed
//! through; images are commented out rather than deleted so the
//! original tag stays inspectable in the markup without rendering.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref IMAGE_TAG: Regex = Regex::new(r"<img[^>]*>").unwrap();
    static ref COMMENT_OR_TAG: Regex =
        Regex::new(r"(?s)<!--.*?-->|</?([a-zA-Z][a-zA-Z0-9]*)[^>]*>").unwrap();
}

/// Tags allowed to survive sanitization, matched by exact name in
/// opening and closing form.
const ALLOWED_TAGS: &[&str] = &["em", "strong", "b", "i"];

/// Sanitize a post excerpt for preview-card display.
///
/// Image tags are wrapped in HTML comments; every other tag outside the
/// allow-list is removed with its attributes, keeping the inner text.
/// Comments are left intact, so a commented-out image is preserved as
/// inert text. Empty input yields an empty string.
pub fn sanitize_excerpt(excerpt: &str) -> String {
    if excerpt.is_empty() {
        return String::new();
    }

    let out = IMAGE_TAG.replace_all(excerpt, "<!-- $0 -->");

    let out = COMMENT_OR_TAG.replace_all(&out, |caps: &Captures| match caps.get(1) {
        Some(name) if ALLOWED_TAGS.contains(&name.as_str()) => caps[0].to_string(),
        Some(_) => String::new(),
        // HTML comment
        None => caps[0].to_string(),
    });

    out.trim().to_string()
}
