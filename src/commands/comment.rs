//! Manage stored comments

use anyhow::Result;

use crate::comments::Comment;
use crate::helpers;
use crate::Blog;

/// Validate and store a new comment
pub fn add(blog: &Blog, post: &str, name: &str, email: &str, text: &str) -> Result<()> {
    let comment = Comment::new(post, name, email, text)?;
    blog.comment_store().add(comment)?;
    println!("Comment posted successfully!");
    Ok(())
}

/// Print the rendered comments for a post, newest first
pub fn list(blog: &Blog, post: &str) -> Result<()> {
    let comments = blog.comment_store().for_post(post);

    if comments.is_empty() {
        println!("No comments yet. Be the first to comment!");
        return Ok(());
    }

    for comment in &comments {
        println!("{}", helpers::comment_html(comment));
    }

    Ok(())
}
