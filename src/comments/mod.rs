//! Comment records and the file-backed comment store

use anyhow::Result;
use chrono::{DateTime, Local};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Rejected comment submissions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommentError {
    #[error("please fill in all required fields")]
    MissingFields,
    #[error("please enter a valid email address")]
    InvalidEmail,
}

/// A single stored comment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(rename = "postId")]
    pub post_id: String,
    pub name: String,
    pub email: String,
    pub content: String,
    /// Submission time, RFC 3339
    pub date: String,
    /// Submission time, epoch milliseconds
    pub timestamp: i64,
}

impl Comment {
    /// Create a validated comment stamped with the current time
    pub fn new(post_id: &str, name: &str, email: &str, content: &str) -> Result<Self, CommentError> {
        validate(name, email, content)?;

        let now = Local::now();
        Ok(Self {
            id: now.timestamp_millis().to_string(),
            post_id: post_id.to_string(),
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            content: content.trim().to_string(),
            date: now.to_rfc3339(),
            timestamp: now.timestamp_millis(),
        })
    }

    /// Parse the stored submission time
    pub fn parsed_date(&self) -> Option<DateTime<Local>> {
        DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|d| d.with_timezone(&Local))
    }
}

/// Validate a comment submission: all fields non-blank, email
/// well-formed.
pub fn validate(name: &str, email: &str, content: &str) -> Result<(), CommentError> {
    if name.trim().is_empty() || email.trim().is_empty() || content.trim().is_empty() {
        return Err(CommentError::MissingFields);
    }
    if !EMAIL.is_match(email.trim()) {
        return Err(CommentError::InvalidEmail);
    }
    Ok(())
}

/// File-backed comment store
#[derive(Debug)]
pub struct CommentStore {
    path: PathBuf,
}

impl CommentStore {
    /// Create a store at the given path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// All stored comments; a missing or corrupt file is empty
    pub fn all(&self) -> Vec<Comment> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("Corrupt comment store {:?}: {}", self.path, e);
                Vec::new()
            }),
            Err(_) => Vec::new(),
        }
    }

    /// Append a comment
    pub fn add(&self, comment: Comment) -> Result<()> {
        let mut comments = self.all();
        comments.push(comment);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&comments)?)?;
        Ok(())
    }

    /// Comments for one post, newest first
    pub fn for_post(&self, post_id: &str) -> Vec<Comment> {
        let mut comments: Vec<Comment> = self
            .all()
            .into_iter()
            .filter(|c| c.post_id == post_id)
            .collect();
        comments.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        comments
    }
}
