//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    /// Page that hosts the post listing; query parameters select the
    /// category, page and article (`blog.html?category=...&page=N`).
    pub blog_page: String,

    // Data files
    pub data_dir: String,
    pub posts_file: String,
    pub updates_file: String,

    // Listing
    pub per_page: usize,
    pub recent_posts: usize,
    pub index_updates: usize,

    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub comments: CommentsConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "Valet".to_string(),
            description: String::new(),
            author: String::new(),
            language: "en".to_string(),

            url: "https://example.com".to_string(),
            blog_page: "blog.html".to_string(),

            data_dir: "data".to_string(),
            posts_file: "blog-posts.json".to_string(),
            updates_file: "business-updates.json".to_string(),

            per_page: 4,
            recent_posts: 5,
            index_updates: 2,

            render: RenderConfig::default(),
            search: SearchConfig::default(),
            comments: CommentsConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Content rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Prefix applied to relative `src`/`href` attribute values so that
    /// fragments resolve from pages nested two directories deep.
    pub asset_prefix: String,
    /// Class token appended to every article content image.
    pub image_class: String,
    /// Inline style applied to every article content image.
    pub image_style: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            asset_prefix: "../../".to_string(),
            image_class: "article-content-image".to_string(),
            image_style: "width: 50%; height: auto;".to_string(),
        }
    }
}

/// Search history configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub history_file: String,
    pub max_history: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            history_file: "search-history.json".to_string(),
            max_history: 10,
        }
    }
}

/// Comment store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    pub store_file: String,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            store_file: "comments.json".to_string(),
        }
    }
}
