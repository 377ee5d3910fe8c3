//! Search posts and manage the search history

use anyhow::Result;

use crate::content::ContentLoader;
use crate::render::sanitize_excerpt;
use crate::search;
use crate::Blog;

/// Search posts for a term and record it in the history. Plain-text
/// results by default; `html` emits a results fragment with the term
/// highlighted in titles and excerpts.
pub fn run(blog: &Blog, term: &str, html: bool) -> Result<()> {
    let posts = ContentLoader::new(blog).load_posts()?;
    let results = search::search_posts(&posts, term);

    if html {
        let mut out = String::new();
        out.push_str(&format!(
            r#"<div class="search-results-info">{}</div>"#,
            search::results_label(results.len())
        ));
        for post in &results {
            out.push_str(&format!(
                r#"<article class="blog-post search-result"><h2 class="blog-post-title">{}</h2><p class="blog-post-excerpt">{}</p></article>"#,
                search::highlight(&post.title, term),
                search::highlight(&sanitize_excerpt(&post.excerpt), term)
            ));
        }
        println!("{}", out);
    } else {
        println!("{}", search::results_label(results.len()));
        for post in &results {
            println!("  {} [{}]", post.title, post.slug);
        }
    }

    let mut history = blog.search_history();
    history.record(term)?;

    Ok(())
}

/// Print recent search terms
pub fn history(blog: &Blog) -> Result<()> {
    let history = blog.search_history();

    if history.entries().is_empty() {
        println!("No recent searches");
    } else {
        for term in history.entries() {
            println!("  {}", term);
        }
    }

    Ok(())
}

/// Clear the search history
pub fn clear_history(blog: &Blog) -> Result<()> {
    blog.search_history().clear()?;
    println!("Search history cleared");
    Ok(())
}
