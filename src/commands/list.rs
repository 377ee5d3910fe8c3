//! List site content

use anyhow::Result;

use crate::content::{loader, ContentLoader};
use crate::Blog;

/// List posts (optionally filtered by category) and updates
pub fn run(blog: &Blog, category: Option<&str>) -> Result<()> {
    let content = ContentLoader::new(blog);

    let posts = content.load_posts()?;
    let posts = match category {
        Some(cat) => loader::filter_by_category(&posts, cat),
        None => posts,
    };

    println!("Posts ({}):", posts.len());
    for post in &posts {
        println!(
            "  {} - {} [{}] ({})",
            post.date, post.title, post.category, post.slug
        );
    }

    let updates = content.load_updates()?;
    if !updates.is_empty() {
        println!("Updates ({}):", updates.len());
        for update in &updates {
            println!("  {} - {}", update.date, update.title);
        }
    }

    Ok(())
}
