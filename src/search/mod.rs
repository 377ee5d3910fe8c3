//! Post search and persisted search history

use anyhow::Result;
use regex::RegexBuilder;
use std::fs;
use std::path::PathBuf;

use crate::content::Post;

/// Find posts whose title, excerpt or content contains the term
/// (case-insensitive). Blank terms match nothing.
pub fn search_posts<'a>(posts: &'a [Post], term: &str) -> Vec<&'a Post> {
    let term = term.trim();
    if term.is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();

    posts
        .iter()
        .filter(|post| {
            let haystack = format!("{} {} {}", post.title, post.excerpt, post.content);
            haystack.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Result-count label ("3 results found")
pub fn results_label(count: usize) -> String {
    format!(
        "{} result{} found",
        count,
        if count == 1 { "" } else { "s" }
    )
}

/// Wrap every occurrence of the term in a highlight span, keeping the
/// casing of the matched text. The term is treated as a literal.
pub fn highlight(text: &str, term: &str) -> String {
    let term = term.trim();
    if term.is_empty() {
        return text.to_string();
    }

    let pattern = match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(_) => return text.to_string(),
    };

    pattern
        .replace_all(text, r#"<span class="search-highlight">$0</span>"#)
        .to_string()
}

/// File-backed search history: most recent first, deduplicated, capped.
#[derive(Debug)]
pub struct SearchHistory {
    path: PathBuf,
    max_entries: usize,
    entries: Vec<String>,
}

impl SearchHistory {
    /// Load history from disk; a missing or corrupt file starts empty
    pub fn load(path: PathBuf, max_entries: usize) -> Self {
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("Corrupt search history {:?}: {}", path, e);
                Vec::new()
            }),
            Err(_) => Vec::new(),
        };

        Self {
            path,
            max_entries,
            entries,
        }
    }

    /// Recorded terms, most recent first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Record a search term: moved to the front, deduplicated, with the
    /// list capped to the configured size. Blank terms are ignored.
    pub fn record(&mut self, term: &str) -> Result<()> {
        if term.trim().is_empty() {
            return Ok(());
        }

        self.entries.retain(|t| t != term);
        self.entries.insert(0, term.to_string());
        self.entries.truncate(self.max_entries);
        self.save()
    }

    /// Remove a single term
    pub fn remove(&mut self, term: &str) -> Result<()> {
        self.entries.retain(|t| t != term);
        self.save()
    }

    /// Clear all history
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }
}
