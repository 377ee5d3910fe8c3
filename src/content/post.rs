//! Post and business update models

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A blog post record as stored in the posts data file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    /// Stable post identifier
    pub id: String,

    /// URL-friendly name; derived from the title when absent
    pub slug: String,

    /// Post title
    pub title: String,

    /// Short preview text, may contain HTML
    pub excerpt: String,

    /// Raw body content
    pub content: String,

    /// Header image path
    pub image: String,

    /// Single category name
    pub category: String,

    /// Publication date as stored (parsed leniently)
    pub date: String,

    /// Whether the post is featured
    pub featured: bool,

    /// Display reading time ("5 min read")
    #[serde(rename = "readTime")]
    pub read_time: Option<String>,

    /// Optional author block
    pub author: Option<Author>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Post {
    /// Parse the stored date string, if possible
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

/// Post author details
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    pub avatar: String,
    pub bio: String,
    pub title: Option<String>,
    pub social: AuthorSocial,
}

/// Social handles for an author
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorSocial {
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

/// A short business update record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessUpdate {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub date: String,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl BusinessUpdate {
    /// Parse the stored date string, if possible
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

/// Posts data file document
#[derive(Debug, Deserialize)]
pub struct BlogData {
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Updates data file document
#[derive(Debug, Deserialize)]
pub struct UpdatesData {
    #[serde(default)]
    pub updates: Vec<BusinessUpdate>,
}

/// Parse a stored date string. Accepts plain dates, date-times and
/// RFC 3339 timestamps; anything else is None.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post_record() {
        let json = r###"{
            "id": "rust-2024",
            "slug": "rust-in-2024",
            "title": "Rust in 2024",
            "excerpt": "A look back",
            "content": "## Heading\ntext",
            "image": "img/rust.png",
            "category": "Technology",
            "date": "2024-01-15",
            "featured": true,
            "readTime": "5 min read"
        }"###;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.slug, "rust-in-2024");
        assert!(post.featured);
        assert_eq!(post.read_time.as_deref(), Some("5 min read"));
        assert_eq!(
            post.parsed_date(),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let post: Post = serde_json::from_str(r#"{"title": "Untitled"}"#).unwrap();
        assert_eq!(post.title, "Untitled");
        assert!(post.slug.is_empty());
        assert!(!post.featured);
        assert!(post.author.is_none());
    }

    #[test]
    fn test_parse_date_formats() {
        assert!(parse_date("2024-01-15").is_some());
        assert!(parse_date("2024-01-15 10:30:00").is_some());
        assert!(parse_date("2024-01-15T10:30:00+00:00").is_some());
        assert!(parse_date("January 15").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn test_author_social_defaults() {
        let author: Author =
            serde_json::from_str(r#"{"name": "Ada", "social": {"twitter": "@ada"}}"#).unwrap();
        assert_eq!(author.social.twitter.as_deref(), Some("@ada"));
        assert!(author.social.github.is_none());
    }
}
