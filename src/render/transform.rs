//! Content transformation pipeline
//!
//! Post bodies are stored in a lightweight mixed format: raw HTML,
//! fenced and inline code, markdown-style headers/links/emphasis/lists,
//! and image tags with site-relative paths. Rendering applies a fixed
//! sequence of rewrite passes over the whole string; each pass is a pure
//! `string -> string` step and the ordering is load-bearing (headers and
//! lists must convert before paragraph wrapping, the entity fix must run
//! after the passes that can introduce a literal `&`).

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::config::RenderConfig;
use crate::helpers::html_escape;

lazy_static! {
    static ref FENCED_CODE: Regex = Regex::new(r"```(\w+)?\n([\s\S]*?)```").unwrap();
    static ref INLINE_CODE: Regex = Regex::new(r"`([^`]+)`").unwrap();
    static ref IMAGE_TAG: Regex = Regex::new(r#"<img[^>]*src="([^"]+)"[^>]*>"#).unwrap();
    static ref CLASS_ATTR: Regex = Regex::new(r#"class="([^"]+)""#).unwrap();
    static ref ALT_ATTR: Regex = Regex::new(r#"alt="([^"]+)""#).unwrap();
    static ref SRC_ATTR: Regex = Regex::new(r#"src="([^"]*)""#).unwrap();
    static ref HREF_ATTR: Regex = Regex::new(r#"href="([^"]*)""#).unwrap();
    static ref HEADER_LINE: Regex = Regex::new(r"(?m)^(#{1,6})\s+(.*)$").unwrap();
    static ref MD_LINK: Regex = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();
    static ref BOLD: Regex = Regex::new(r"\*\*([^*]+)\*\*").unwrap();
    static ref ITALIC: Regex = Regex::new(r"\*([^*]+)\*").unwrap();
    static ref LIST_ITEM: Regex = Regex::new(r"(?m)^-\s+(.*)$").unwrap();
    static ref LIST_RUN: Regex = Regex::new(r"((?:<li>.*</li>\n?)+)").unwrap();
    static ref DOUBLE_ESCAPED: Regex = Regex::new(r"&amp;([a-z]+);").unwrap();
    static ref PARA_BREAK: Regex = Regex::new(r"\n\n+").unwrap();
    static ref EMPTY_PARA: Regex = Regex::new(r"<p>\s*</p>").unwrap();
}

/// `src` values with these prefixes are already resolvable and keep
/// their path untouched.
const SRC_ABSOLUTE: &[&str] = &["http", "//", "data:"];

/// Same for `href`, which additionally keeps mail links and in-page
/// anchors.
const HREF_ABSOLUTE: &[&str] = &["http", "//", "mailto:", "#"];

/// Renders stored post content into a display-ready HTML fragment
pub struct ContentRenderer {
    asset_prefix: String,
    image_class: String,
    image_style: String,
}

impl ContentRenderer {
    /// Create a renderer with the default configuration
    pub fn new() -> Self {
        Self::with_config(&RenderConfig::default())
    }

    /// Create a renderer from a render configuration
    pub fn with_config(config: &RenderConfig) -> Self {
        Self {
            asset_prefix: config.asset_prefix.clone(),
            image_class: config.image_class.clone(),
            image_style: config.image_style.clone(),
        }
    }

    /// Render a raw content string to HTML.
    ///
    /// Never fails: constructs that do not match any pass are passed
    /// through unchanged. Empty input yields an empty string.
    ///
    /// Fenced code block content is HTML-escaped; inline code content is
    /// emitted verbatim.
    pub fn render(&self, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }

        // Fenced code blocks, with the language tag defaulting to
        // plaintext and the body escaped
        let out = FENCED_CODE.replace_all(content, |caps: &Captures| {
            let lang = caps.get(1).map(|m| m.as_str()).unwrap_or("plaintext");
            format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                lang,
                html_escape(caps[2].trim())
            )
        });

        // Inline code
        let out = INLINE_CODE.replace_all(&out, "<code>$1</code>");

        // Resize article content images, keeping original class and alt
        let out = IMAGE_TAG.replace_all(&out, |caps: &Captures| self.resize_image(caps));

        // Rewrite relative asset and link paths
        let out = SRC_ATTR.replace_all(&out, |caps: &Captures| {
            self.prefix_relative("src", &caps[1], SRC_ABSOLUTE)
        });
        let out = HREF_ATTR.replace_all(&out, |caps: &Captures| {
            self.prefix_relative("href", &caps[1], HREF_ABSOLUTE)
        });

        // Markdown-style headers
        let out = HEADER_LINE.replace_all(&out, |caps: &Captures| {
            let level = caps[1].len();
            format!("<h{}>{}</h{}>", level, caps[2].trim(), level)
        });

        // Markdown-style links
        let out = MD_LINK.replace_all(&out, r#"<a href="$2">$1</a>"#);

        // Bold before italic, so the double-asterisk pairs are consumed
        // before the single-asterisk pass runs
        let out = BOLD.replace_all(&out, "<strong>$1</strong>");
        let out = ITALIC.replace_all(&out, "<em>$1</em>");

        // Markdown-style lists: items first, then each run of
        // consecutive items wrapped in a single <ul>
        let out = LIST_ITEM.replace_all(&out, "<li>$1</li>");
        let out = LIST_RUN.replace_all(&out, "<ul>$1</ul>");

        // Collapse double-escaped entities introduced upstream
        let out = DOUBLE_ESCAPED.replace_all(&out, "&$1;");

        // Blank-line runs become paragraph breaks, remaining newlines
        // become line breaks
        let out = PARA_BREAK.replace_all(&out, "</p><p>");
        let out = out.replace('\n', "<br>");

        // Wrap in paragraphs if not already wrapped
        let out = wrap_paragraphs(&out);

        // Remove empty paragraphs
        let out = EMPTY_PARA.replace_all(&out, "");

        out.trim().to_string()
    }

    /// Rewrite one `<img>` tag to the fixed article-content format,
    /// preserving src, class and alt wherever they appeared in the tag.
    fn resize_image(&self, caps: &Captures) -> String {
        let tag = &caps[0];
        let src = &caps[1];
        let classes = CLASS_ATTR
            .captures(tag)
            .map(|c| c[1].to_string())
            .unwrap_or_default();
        let alt = ALT_ATTR
            .captures(tag)
            .map(|c| c[1].to_string())
            .unwrap_or_default();

        format!(
            r#"<img src="{}" class="{} {}" style="{}" alt="{}">"#,
            src, classes, self.image_class, self.image_style, alt
        )
    }

    /// Re-emit an attribute, prefixing relative values with the
    /// configured path prefix.
    fn prefix_relative(&self, attr: &str, value: &str, absolute: &[&str]) -> String {
        if absolute.iter().any(|prefix| value.starts_with(prefix)) {
            format!(r#"{}="{}""#, attr, value)
        } else {
            format!(
                r#"{}="{}{}""#,
                attr,
                self.asset_prefix,
                value.trim_start_matches('/')
            )
        }
    }
}

impl Default for ContentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap every line that is not already block-level markup in a
/// paragraph. Lines starting with a heading, `<p>`, `<ul>` or `<pre>`
/// are left alone; empty lines stay empty.
fn wrap_paragraphs(content: &str) -> String {
    content
        .split('\n')
        .map(|line| {
            if line.is_empty()
                || line.starts_with("<h")
                || line.starts_with("<p")
                || line.starts_with("<ul")
                || line.starts_with("<pre")
            {
                line.to_string()
            } else {
                format!("<p>{}</p>", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let renderer = ContentRenderer::new();
        assert_eq!(renderer.render(""), "");
    }

    #[test]
    fn test_fenced_code_is_escaped() {
        let renderer = ContentRenderer::new();
        let html = renderer.render("```js\n<b>x</b>\n```");
        assert_eq!(
            html,
            r#"<pre><code class="language-js">&lt;b&gt;x&lt;/b&gt;</code></pre>"#
        );
    }

    #[test]
    fn test_fenced_code_default_language() {
        let renderer = ContentRenderer::new();
        let html = renderer.render("```\nlet x = 1;\n```");
        assert!(html.contains(r#"<code class="language-plaintext">"#));
    }

    #[test]
    fn test_inline_code_is_not_escaped() {
        let renderer = ContentRenderer::new();
        let html = renderer.render("use `<b>` sparingly");
        assert!(html.contains("<code><b></code>"));
    }

    #[test]
    fn test_image_resize_keeps_class_and_alt() {
        let renderer = ContentRenderer::new();
        let html = renderer.render(r#"<img alt="chart" src="https://cdn.example.com/a.png" class="wide">"#);
        assert!(html.contains(
            r#"<img src="https://cdn.example.com/a.png" class="wide article-content-image" style="width: 50%; height: auto;" alt="chart">"#
        ));
    }

    #[test]
    fn test_image_resize_defaults() {
        let renderer = ContentRenderer::new();
        let html = renderer.render(r#"<img src="https://cdn.example.com/a.png">"#);
        assert!(html.contains(r#"class=" article-content-image""#));
        assert!(html.contains(r#"alt="""#));
    }

    #[test]
    fn test_relative_paths_are_prefixed() {
        let renderer = ContentRenderer::new();
        let html = renderer.render(r#"<a href="/foo">x</a> <img src="img/pic.png">"#);
        assert!(html.contains(r#"href="../../foo""#));
        assert!(html.contains(r#"src="../../img/pic.png""#));
    }

    #[test]
    fn test_absolute_paths_untouched() {
        let renderer = ContentRenderer::new();
        let html =
            renderer.render(r##"<a href="https://x.com">x</a> <a href="#section">y</a> <a href="mailto:a@b.c">z</a>"##);
        assert!(html.contains(r#"href="https://x.com""#));
        assert!(html.contains(r##"href="#section""##));
        assert!(html.contains(r#"href="mailto:a@b.c""#));
    }

    #[test]
    fn test_protocol_relative_and_data_uri_untouched() {
        let renderer = ContentRenderer::new();
        let html = renderer.render(r#"<img src="//cdn.example.com/a.png"> <img src="data:image/png;base64,AAAA">"#);
        assert!(html.contains(r#"src="//cdn.example.com/a.png""#));
        assert!(html.contains(r#"src="data:image/png;base64,AAAA""#));
    }

    #[test]
    fn test_headers() {
        let renderer = ContentRenderer::new();
        assert_eq!(renderer.render("### Title"), "<h3>Title</h3>");
        assert_eq!(renderer.render("# Top"), "<h1>Top</h1>");
        assert_eq!(renderer.render("###### Deep"), "<h6>Deep</h6>");
    }

    #[test]
    fn test_seven_hashes_do_not_convert() {
        let renderer = ContentRenderer::new();
        let html = renderer.render("####### nope");
        assert!(!html.contains("<h"));
        assert!(html.contains("####### nope"));
    }

    #[test]
    fn test_markdown_links() {
        let renderer = ContentRenderer::new();
        let html = renderer.render("see [docs](https://docs.rs)");
        assert!(html.contains(r#"<a href="https://docs.rs">docs</a>"#));
    }

    #[test]
    fn test_bold_then_italic() {
        let renderer = ContentRenderer::new();
        let html = renderer.render("**bold** and *italic*");
        assert!(html.contains("<strong>bold</strong> and <em>italic</em>"));
        assert!(!html.contains('*'));
    }

    #[test]
    fn test_list_wrapped_in_single_ul() {
        let renderer = ContentRenderer::new();
        let html = renderer.render("- a\n- b");
        assert_eq!(html, "<ul><li>a</li><br><li>b</li></ul>");
        assert_eq!(html.matches("<ul>").count(), 1);
    }

    #[test]
    fn test_double_escaped_entities_collapse() {
        let renderer = ContentRenderer::new();
        let html = renderer.render("fish &amp;amp; chips");
        assert!(html.contains("fish &amp; chips"));
    }

    #[test]
    fn test_paragraph_wrapping_and_breaks() {
        let renderer = ContentRenderer::new();
        let html = renderer.render("first\n\nsecond");
        assert_eq!(html, "<p>first</p><p>second</p>");
    }

    #[test]
    fn test_single_newline_becomes_br() {
        let renderer = ContentRenderer::new();
        let html = renderer.render("one\ntwo");
        assert_eq!(html, "<p>one<br>two</p>");
    }

    #[test]
    fn test_heading_not_wrapped_in_paragraph() {
        let renderer = ContentRenderer::new();
        let html = renderer.render("## Section");
        assert_eq!(html, "<h2>Section</h2>");
    }

    #[test]
    fn test_empty_paragraphs_removed() {
        let renderer = ContentRenderer::new();
        let html = renderer.render("text\n\n\n\n");
        assert!(!html.contains("<p></p>"));
        assert!(!html.contains("<p> </p>"));
    }

    #[test]
    fn test_custom_prefix() {
        let mut config = RenderConfig::default();
        config.asset_prefix = "../".to_string();
        let renderer = ContentRenderer::with_config(&config);
        let html = renderer.render(r#"<img src="img/a.png">"#);
        assert!(html.contains(r#"src="../img/a.png""#));
    }

    #[test]
    fn test_code_block_ampersand_roundtrip() {
        // Escaping inside a fenced block can itself produce `&amp;name;`,
        // which the entity fix then collapses.
        let renderer = ContentRenderer::new();
        let html = renderer.render("```\na &lt; b\n```");
        assert!(html.contains("a &lt; b"));
    }
}
