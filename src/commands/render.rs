//! Render HTML fragments for articles and pages

use anyhow::{anyhow, Result};
use std::fs;
use std::path::Path;

use crate::content::{loader, ContentLoader, Post};
use crate::helpers;
use crate::Blog;

/// Render a single article fragment by slug or id
pub fn article(blog: &Blog, slug: &str, output: Option<&Path>) -> Result<()> {
    let posts = ContentLoader::new(blog).load_posts()?;
    let post = posts
        .iter()
        .find(|p| p.slug == slug || p.id == slug)
        .ok_or_else(|| anyhow!("No post with slug or id '{}'", slug))?;

    let renderer = blog.renderer();
    let date = post
        .parsed_date()
        .map(|d| helpers::long_date(&d))
        .unwrap_or_else(|| post.date.clone());

    let mut html = String::new();
    html.push_str(&format!(
        r#"<h2 class="blog-post-title">{}</h2>"#,
        post.title
    ));
    html.push_str(&format!(
        r#"<div class="blog-post-meta"><span class="blog-post-category">{}</span><span>{}</span><span>{}</span></div>"#,
        post.category,
        date,
        post.read_time.as_deref().unwrap_or("")
    ));
    html.push_str(&format!(
        r#"<div class="blog-post-body">{}</div>"#,
        renderer.render(&post.content)
    ));

    if let Some(author) = &post.author {
        html.push_str(&format!(
            r#"<div class="author-section">{}</div>"#,
            helpers::author_box(author, &blog.config.render.asset_prefix)
        ));
    }

    let share = helpers::share_links(&blog.config, post);
    html.push_str(&format!(
        r#"<div class="share-links"><a href="{}" class="share-option twitter">Twitter</a><a href="{}" class="share-option facebook">Facebook</a><a href="{}" class="share-option linkedin">LinkedIn</a><a href="{}" class="share-option whatsapp">WhatsApp</a><a href="{}" class="share-option telegram">Telegram</a></div>"#,
        share.twitter, share.facebook, share.linkedin, share.whatsapp, share.telegram
    ));

    let comments = blog.comment_store().for_post(&post.id);
    if !comments.is_empty() {
        html.push_str(r#"<div class="comments-list">"#);
        for comment in &comments {
            html.push_str(&helpers::comment_html(comment));
        }
        html.push_str("</div>");
    }

    emit(&html, output)
}

/// Render the front-page news cards: the latest post of each featured
/// category followed by the latest business updates
pub fn index(blog: &Blog, output: Option<&Path>) -> Result<()> {
    let content = ContentLoader::new(blog);
    let posts = content.load_posts()?;
    let updates = content.load_updates()?;

    let mut html = String::new();
    for category in ["Technology", "Business", "Education"] {
        if let Some(post) = loader::latest_by_category(&posts, category) {
            html.push_str(&helpers::index_card(post, &blog.config.blog_page));
        }
    }
    for update in loader::latest_updates(&updates, blog.config.index_updates) {
        html.push_str(&helpers::update_card(update, &blog.config.blog_page));
    }

    emit(&html, output)
}

/// Render one listing page: article entries plus the recent-posts and
/// category sidebars and pagination links
pub fn page(
    blog: &Blog,
    page: usize,
    category: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let all = ContentLoader::new(blog).load_posts()?;

    let filtered = category.map(|cat| loader::filter_by_category(&all, cat));
    let shown: &[Post] = filtered.as_deref().unwrap_or(&all);

    let per_page = blog.config.per_page;

    let mut html = String::new();
    html.push_str(r#"<div class="blog-main">"#);
    for post in helpers::paginate(shown, page, per_page) {
        html.push_str(&helpers::article_card(
            post,
            &blog.config.render.asset_prefix,
        ));
    }
    html.push_str("</div>");

    html.push_str(&format!(
        r#"<nav class="blog-pagination">{}</nav>"#,
        helpers::pagination(shown.len(), per_page, page, &blog.config.blog_page, category)
    ));
    html.push_str(&format!(
        r#"<ul class="recent-posts">{}</ul>"#,
        helpers::recent_posts(&all, blog.config.recent_posts)
    ));
    html.push_str(&format!(
        r#"<ul class="categories-list">{}</ul>"#,
        helpers::categories(&all, category, &blog.config.blog_page)
    ));

    emit(&html, output)
}

fn emit(html: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, html)?;
            tracing::info!("Wrote {:?}", path);
        }
        None => println!("{}", html),
    }
    Ok(())
}
