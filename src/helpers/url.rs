//! URL helper functions - article links and social share intents

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::html::strip_html;
use crate::config::BlogConfig;
use crate::content::Post;

/// Characters `encodeURIComponent` leaves unescaped
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string for use inside a query parameter
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Canonical shareable URL for a post
///
/// # Examples
/// ```ignore
/// article_url(&config, &post) // -> "https://example.com/blog.html?article=my-post"
/// ```
pub fn article_url(config: &BlogConfig, post: &Post) -> String {
    format!(
        "{}/{}?article={}",
        config.url.trim_end_matches('/'),
        config.blog_page,
        post.slug
    )
}

/// Share intent URLs for a post
#[derive(Debug, Clone)]
pub struct ShareLinks {
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
    pub whatsapp: String,
    pub telegram: String,
}

/// Build the social share links for a post. Share text is the title
/// plus the excerpt with its tags stripped.
pub fn share_links(config: &BlogConfig, post: &Post) -> ShareLinks {
    let url = article_url(config, post);
    let encoded_url = encode_component(&url);

    let text = format!("{} - {}", post.title, strip_html(&post.excerpt));
    let encoded_text = encode_component(&text);

    ShareLinks {
        twitter: format!(
            "https://twitter.com/intent/tweet?url={}&text={}",
            encoded_url, encoded_text
        ),
        facebook: format!(
            "https://www.facebook.com/sharer/sharer.php?u={}",
            encoded_url
        ),
        linkedin: format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={}",
            encoded_url
        ),
        whatsapp: format!("https://wa.me/?text={}%20{}", encoded_text, encoded_url),
        telegram: format!(
            "https://t.me/share/url?url={}&text={}",
            encoded_url, encoded_text
        ),
    }
}
