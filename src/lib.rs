//! valet-blog: a small static blog renderer
//!
//! This crate loads post and business-update records from JSON data
//! files and renders them into sanitized HTML fragments: article
//! bodies, preview cards, sidebars, pagination and share links.

pub mod commands;
pub mod comments;
pub mod config;
pub mod content;
pub mod helpers;
pub mod render;
pub mod search;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: PathBuf,
}

impl Blog {
    /// Create a new blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// Directory holding the JSON data files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join(&self.config.data_dir)
    }

    /// Content renderer configured for this site
    pub fn renderer(&self) -> render::ContentRenderer {
        render::ContentRenderer::with_config(&self.config.render)
    }

    /// Persisted search history for this site
    pub fn search_history(&self) -> search::SearchHistory {
        search::SearchHistory::load(
            self.data_dir().join(&self.config.search.history_file),
            self.config.search.max_history,
        )
    }

    /// Comment store for this site
    pub fn comment_store(&self) -> comments::CommentStore {
        comments::CommentStore::new(self.data_dir().join(&self.config.comments.store_file))
    }
}
