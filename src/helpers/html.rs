//! HTML helper functions - escaping and page fragment builders

use chrono::Local;

use super::date::{comment_date, long_date};
use crate::comments::Comment;
use crate::content::{Author, BusinessUpdate, Post};
use crate::render::sanitize_excerpt;

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Display label, icon and card class for a category
fn category_presentation(category: &str) -> (&'static str, &'static str, &'static str) {
    match category {
        "Technology" => ("News", "📰", "industry-card"),
        "Business" => ("Business", "💼", "business-card"),
        "Education" => ("Education", "🎓", "education-card"),
        _ => ("Latest Blog", "📝", "blog-card"),
    }
}

/// Build a front-page news card for a post
pub fn index_card(post: &Post, blog_page: &str) -> String {
    let (label, icon, card_class) = category_presentation(&post.category);
    let blog_url = format!("{}?category={}", blog_page, post.category.to_lowercase());

    let mut html = String::new();
    if post.featured {
        html.push_str(&format!(r#"<div class="news-card {} featured">"#, card_class));
        html.push_str(r#"<div class="featured-badge">Featured</div>"#);
    } else {
        html.push_str(&format!(r#"<div class="news-card {}">"#, card_class));
    }

    html.push_str(r#"<div class="news-image">"#);
    html.push_str(
        r#"<div class="lazy-image-placeholder"><div class="lazy-loading-spinner"></div></div>"#,
    );
    html.push_str(&format!(
        r#"<img class="lazy-image" data-src="{}" alt="{}" loading="lazy">"#,
        post.image, post.title
    ));
    html.push_str("</div>");

    html.push_str(r#"<div class="news-content">"#);
    html.push_str(&format!(r#"<div class="news-icon">{}</div>"#, icon));
    html.push_str(&format!(r#"<span class="news-date">{}</span>"#, label));
    html.push_str(&format!("<h3>{}</h3>", post.title));
    html.push_str(&format!("<p>{}</p>", sanitize_excerpt(&post.excerpt)));
    html.push_str(&format!(
        r#"<a href="{}" class="read-more">Read More</a>"#,
        blog_url
    ));
    html.push_str("</div></div>");

    html
}

/// Build a front-page card for a business update
pub fn update_card(update: &BusinessUpdate, blog_page: &str) -> String {
    let blog_url = format!("{}?category=business", blog_page);

    let mut html = String::new();
    html.push_str(r#"<div class="news-card business-card">"#);
    html.push_str(&format!(
        r#"<div class="news-image"><img src="{}" alt="{}"></div>"#,
        update.image, update.title
    ));
    html.push_str(r#"<div class="news-content">"#);
    html.push_str(r#"<div class="news-icon">💼</div>"#);
    html.push_str(r#"<span class="news-date">Business News</span>"#);
    html.push_str(&format!("<h3>{}</h3>", update.title));
    html.push_str(&format!("<p>{}</p>", sanitize_excerpt(&update.excerpt)));
    html.push_str(&format!(
        r#"<a href="{}" class="read-more">Read More</a>"#,
        blog_url
    ));
    html.push_str("</div></div>");

    html
}

/// Build a listing-page article entry for a post
pub fn article_card(post: &Post, asset_prefix: &str) -> String {
    let date = post
        .parsed_date()
        .map(|d| long_date(&d))
        .unwrap_or_else(|| post.date.clone());

    let mut html = String::new();
    if post.featured {
        html.push_str(r#"<article class="blog-post featured">"#);
        html.push_str(r#"<div class="featured-badge">Featured</div>"#);
    } else {
        html.push_str(r#"<article class="blog-post">"#);
    }

    html.push_str(&format!(
        r#"<div class="category-badge {}">{}</div>"#,
        post.category.to_lowercase(),
        post.category
    ));
    html.push_str(&format!(
        r#"<div class="blog-post-image"><img class="lazy-image" data-src="{}{}" alt="{}" loading="lazy"></div>"#,
        asset_prefix, post.image, post.title
    ));

    html.push_str(r#"<div class="blog-post-content">"#);
    html.push_str(&format!(
        r#"<div class="blog-post-meta"><span class="blog-post-category">{}</span><span>{}</span><span>{}</span></div>"#,
        post.category,
        date,
        post.read_time.as_deref().unwrap_or("")
    ));
    html.push_str(&format!(
        r#"<h2 class="blog-post-title">{}</h2>"#,
        post.title
    ));
    html.push_str(&format!(
        r#"<p class="blog-post-excerpt">{}</p>"#,
        sanitize_excerpt(&post.excerpt)
    ));
    html.push_str(&format!(
        r##"<a href="#" class="blog-post-link" data-post-id="{}">Read More →</a>"##,
        post.id
    ));
    html.push_str("</div></article>");

    html
}

/// Build the author box shown under an article
pub fn author_box(author: &Author, asset_prefix: &str) -> String {
    let mut html = String::new();

    html.push_str(r#"<div class="author-header">"#);
    html.push_str(&format!(
        r#"<img src="{}{}" alt="{}" class="author-avatar">"#,
        asset_prefix,
        author.avatar,
        html_escape(&author.name)
    ));
    html.push_str(r#"<div class="author-info">"#);
    html.push_str(&format!(
        r#"<div class="author-name">{}</div>"#,
        html_escape(&author.name)
    ));
    if let Some(title) = &author.title {
        html.push_str(&format!(
            r#"<div class="author-title">{}</div>"#,
            html_escape(title)
        ));
    }
    html.push_str("</div></div>");

    html.push_str(&format!(
        r#"<div class="author-bio">{}</div>"#,
        html_escape(&author.bio)
    ));

    html.push_str(r#"<div class="author-social">"#);
    if let Some(twitter) = &author.social.twitter {
        html.push_str(&format!(
            r#"<a href="https://twitter.com/{}" target="_blank" class="social-link twitter">Twitter</a>"#,
            twitter.trim_start_matches('@')
        ));
    }
    if let Some(linkedin) = &author.social.linkedin {
        html.push_str(&format!(
            r#"<a href="https://linkedin.com/in/{}" target="_blank" class="social-link linkedin">LinkedIn</a>"#,
            linkedin
        ));
    }
    if let Some(github) = &author.social.github {
        html.push_str(&format!(
            r#"<a href="https://github.com/{}" target="_blank" class="social-link github">GitHub</a>"#,
            github
        ));
    }
    html.push_str("</div>");

    html
}

/// Build one rendered comment, with author name and body escaped
pub fn comment_html(comment: &Comment) -> String {
    let now = Local::now();
    let when = comment
        .parsed_date()
        .map(|d| comment_date(&d, &now))
        .unwrap_or_else(|| comment.date.clone());

    format!(
        r#"<div class="comment"><div class="comment-header"><span class="comment-author">{}</span><span class="comment-date">{}</span></div><div class="comment-content">{}</div></div>"#,
        html_escape(&comment.name),
        when,
        html_escape(&comment.content)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <b>World</b></p>"), "Hello World");
    }

    #[test]
    fn test_index_card_category_mapping() {
        let mut post = Post::default();
        post.title = "Post".to_string();
        post.category = "Technology".to_string();
        let html = index_card(&post, "blog.html");
        assert!(html.contains("industry-card"));
        assert!(html.contains(r#"<span class="news-date">News</span>"#));
        assert!(html.contains("blog.html?category=technology"));
        assert!(!html.contains("featured-badge"));
    }

    #[test]
    fn test_index_card_featured_and_sanitized_excerpt() {
        let mut post = Post::default();
        post.title = "Post".to_string();
        post.category = "Other".to_string();
        post.featured = true;
        post.excerpt = "<script>x()</script><strong>ok</strong>".to_string();
        let html = index_card(&post, "blog.html");
        assert!(html.contains("featured-badge"));
        assert!(html.contains("blog-card"));
        assert!(!html.contains("<script"));
        assert!(html.contains("<strong>ok</strong>"));
    }

    #[test]
    fn test_article_card() {
        let mut post = Post::default();
        post.id = "p1".to_string();
        post.title = "Post".to_string();
        post.category = "Business".to_string();
        post.date = "2024-01-15".to_string();
        post.image = "img/a.png".to_string();
        let html = article_card(&post, "../../");
        assert!(html.contains(r#"data-src="../../img/a.png""#));
        assert!(html.contains("January 15, 2024"));
        assert!(html.contains(r#"data-post-id="p1""#));
    }

    #[test]
    fn test_author_box_escapes_and_links() {
        let author = Author {
            name: "Ada <X>".to_string(),
            avatar: "img/ada.png".to_string(),
            bio: "Writes & codes".to_string(),
            title: None,
            social: crate::content::AuthorSocial {
                twitter: Some("@ada".to_string()),
                linkedin: None,
                github: Some("ada".to_string()),
            },
        };
        let html = author_box(&author, "../../");
        assert!(html.contains("Ada &lt;X&gt;"));
        assert!(html.contains("Writes &amp; codes"));
        assert!(html.contains("https://twitter.com/ada"));
        assert!(html.contains("https://github.com/ada"));
        assert!(!html.contains("linkedin.com"));
    }
}
