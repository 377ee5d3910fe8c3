//! Content loader - loads posts and updates from the data directory

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use super::{BlogData, BusinessUpdate, Post, UpdatesData};
use crate::Blog;

/// Loads content records from the site's data directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Load all blog posts, newest first.
    ///
    /// A missing or malformed data file yields an empty list; records
    /// without a slug get one derived from the title.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let path = self.data_file(&self.blog.config.posts_file);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&path)?;
        let data: BlogData = match serde_json::from_str(&raw) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Malformed posts file {:?}: {}", path, e);
                return Ok(Vec::new());
            }
        };

        let mut posts = data.posts;
        for post in &mut posts {
            if post.slug.is_empty() {
                post.slug = slug::slugify(&post.title);
            }
        }

        // Newest first; records with unparseable dates sort last
        posts.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date()));

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), path);
        Ok(posts)
    }

    /// Load all business updates, newest first
    pub fn load_updates(&self) -> Result<Vec<BusinessUpdate>> {
        let path = self.data_file(&self.blog.config.updates_file);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&path)?;
        let data: UpdatesData = match serde_json::from_str(&raw) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Malformed updates file {:?}: {}", path, e);
                return Ok(Vec::new());
            }
        };

        let mut updates = data.updates;
        updates.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date()));

        tracing::debug!("Loaded {} updates from {:?}", updates.len(), path);
        Ok(updates)
    }

    fn data_file(&self, name: &str) -> PathBuf {
        self.blog.data_dir().join(name)
    }
}

/// Latest post overall
pub fn latest(posts: &[Post]) -> Option<&Post> {
    posts.first()
}

/// Latest post in a category (exact name match)
pub fn latest_by_category<'a>(posts: &'a [Post], category: &str) -> Option<&'a Post> {
    posts.iter().find(|p| p.category == category)
}

/// Posts in a category, matched case-insensitively the way the listing
/// page's category query parameter is.
pub fn filter_by_category(posts: &[Post], category: &str) -> Vec<Post> {
    posts
        .iter()
        .filter(|p| p.category.eq_ignore_ascii_case(category))
        .cloned()
        .collect()
}

/// First `amount` updates
pub fn latest_updates(updates: &[BusinessUpdate], amount: usize) -> &[BusinessUpdate] {
    &updates[..updates.len().min(amount)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlogConfig;
    use std::fs;

    fn test_blog(dir: &std::path::Path) -> Blog {
        let mut config = BlogConfig::default();
        config.data_dir = ".".to_string();
        Blog {
            config,
            base_dir: dir.to_path_buf(),
        }
    }

    #[test]
    fn test_load_posts_sorted_and_slugged() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("blog-posts.json"),
            r#"{"posts": [
                {"id": "1", "title": "Old Post", "category": "Business", "date": "2023-05-01"},
                {"id": "2", "title": "New Post", "category": "Technology", "date": "2024-02-01"}
            ]}"#,
        )
        .unwrap();

        let blog = test_blog(dir.path());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "2");
        assert_eq!(posts[0].slug, "new-post");
        assert_eq!(posts[1].slug, "old-post");
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let blog = test_blog(dir.path());
        assert!(ContentLoader::new(&blog).load_posts().unwrap().is_empty());
        assert!(ContentLoader::new(&blog).load_updates().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("blog-posts.json"), "{not json").unwrap();
        let blog = test_blog(dir.path());
        assert!(ContentLoader::new(&blog).load_posts().unwrap().is_empty());
    }

    #[test]
    fn test_unparseable_dates_sort_last() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("blog-posts.json"),
            r#"{"posts": [
                {"id": "bad", "title": "No Date", "category": "Business", "date": "someday"},
                {"id": "good", "title": "Dated", "category": "Business", "date": "2024-01-01"}
            ]}"#,
        )
        .unwrap();

        let blog = test_blog(dir.path());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts[0].id, "good");
        assert_eq!(posts[1].id, "bad");
    }

    #[test]
    fn test_accessors() {
        let posts = vec![
            Post {
                id: "1".into(),
                category: "Technology".into(),
                ..Post::default()
            },
            Post {
                id: "2".into(),
                category: "Business".into(),
                ..Post::default()
            },
            Post {
                id: "3".into(),
                category: "technology".into(),
                ..Post::default()
            },
        ];

        assert_eq!(latest(&posts).unwrap().id, "1");
        assert_eq!(latest_by_category(&posts, "Business").unwrap().id, "2");
        assert!(latest_by_category(&posts, "business").is_none());
        assert_eq!(filter_by_category(&posts, "TECHNOLOGY").len(), 2);
    }
}
