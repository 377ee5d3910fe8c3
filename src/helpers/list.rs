//! List helpers - sidebars and pagination

use indexmap::IndexMap;

use super::date::long_date;
use crate::content::Post;

/// Slice out one page of posts (1-based page number)
pub fn paginate(posts: &[Post], page: usize, per_page: usize) -> &[Post] {
    let per_page = per_page.max(1);
    let page = page.max(1);

    let start = (page - 1) * per_page;
    if start >= posts.len() {
        return &[];
    }
    let end = (start + per_page).min(posts.len());
    &posts[start..end]
}

/// Number of listing pages needed for `total_posts`
pub fn total_pages(total_posts: usize, per_page: usize) -> usize {
    total_posts.div_ceil(per_page.max(1))
}

/// Generate the recent-posts sidebar list
pub fn recent_posts(posts: &[Post], amount: usize) -> String {
    let mut html = String::new();

    for post in posts.iter().take(amount) {
        let date = post
            .parsed_date()
            .map(|d| long_date(&d))
            .unwrap_or_else(|| post.date.clone());

        html.push_str(&format!(
            r##"<li><a href="#{}" class="recent-post-title">{}</a><div class="recent-post-date">{}</div></li>"##,
            post.slug, post.title, date
        ));
    }

    html
}

/// Generate the categories sidebar with per-category counts, in
/// first-seen order. The selected category is marked active and links
/// back to the unfiltered listing.
pub fn categories(posts: &[Post], selected: Option<&str>, blog_page: &str) -> String {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for post in posts {
        *counts.entry(post.category.as_str()).or_insert(0) += 1;
    }

    let mut html = String::new();
    for (category, count) in &counts {
        let is_active = selected
            .map(|s| s.eq_ignore_ascii_case(category))
            .unwrap_or(false);

        let (class, href) = if is_active {
            (" active", blog_page.to_string())
        } else {
            (
                "",
                format!("{}?category={}", blog_page, category.to_lowercase()),
            )
        };

        html.push_str(&format!(
            r#"<li><a href="{}" class="category-link{}"><span>{}</span><span class="category-count">{}</span></a></li>"#,
            href, class, category, count
        ));
    }

    html
}

/// Generate pagination links for a post listing. Empty when everything
/// fits on one page; links carry the category filter through.
pub fn pagination(
    total_posts: usize,
    per_page: usize,
    current: usize,
    blog_page: &str,
    category: Option<&str>,
) -> String {
    let total = total_pages(total_posts, per_page);
    if total <= 1 {
        return String::new();
    }

    let page_url = |page: usize| match category {
        Some(cat) => format!("{}?category={}&page={}", blog_page, cat, page),
        None => format!("{}?page={}", blog_page, page),
    };

    let mut html = String::new();

    if current > 1 {
        html.push_str(&format!(
            r#"<a href="{}" class="pagination-link">← Previous</a>"#,
            page_url(current - 1)
        ));
    }

    for page in 1..=total {
        let active = if page == current { " active" } else { "" };
        html.push_str(&format!(
            r#"<a href="{}" class="pagination-link{}">{}</a>"#,
            page_url(page),
            active,
            page
        ));
    }

    if current < total {
        html.push_str(&format!(
            r#"<a href="{}" class="pagination-link">Next →</a>"#,
            page_url(current + 1)
        ));
    }

    html
}
