//! Post parsing module
//!
//! A post file is TOML front matter between `+++` fences followed by a
//! markdown body:
//!
//! ```text
//! +++
//! title = "First post"
//! date = "2013-05-01"
//! tags = ["rust"]
//! categories = ["dev"]
//! +++
//! Body in *markdown*.
//! ```

use chrono::NaiveDate;
use pulldown_cmark::{html, Options, Parser};
use serde::Deserialize;
use std::fmt;

/// Front matter fence
const FENCE: &str = "+++";

/// Raw front matter as written in the post file
#[derive(Debug, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    /// `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// A loaded, rendered blog post
#[derive(Debug, Clone)]
pub struct Post {
    pub title: String,
    pub slug: String,
    /// Route path, e.g. `/post/first-post`
    pub url: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    /// Rendered HTML body
    pub html: String,
}

/// Post file parsing failure
#[derive(Debug)]
pub enum PostParseError {
    /// No `+++` fences found
    MissingFrontMatter,
    FrontMatter(toml::de::Error),
    BadDate(chrono::ParseError),
}

impl fmt::Display for PostParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFrontMatter => write!(f, "missing front matter fences"),
            Self::FrontMatter(e) => write!(f, "invalid front matter: {e}"),
            Self::BadDate(e) => write!(f, "invalid date: {e}"),
        }
    }
}

impl std::error::Error for PostParseError {}

/// Parse a post file into a rendered [`Post`]
pub fn parse_post(slug: &str, source: &str) -> Result<Post, PostParseError> {
    let (front, body) = split_front_matter(source)?;
    let fm: FrontMatter = toml::from_str(front).map_err(PostParseError::FrontMatter)?;
    let date =
        NaiveDate::parse_from_str(fm.date.trim(), "%Y-%m-%d").map_err(PostParseError::BadDate)?;

    Ok(Post {
        title: fm.title,
        slug: slug.to_string(),
        url: format!("/post/{slug}"),
        date,
        tags: fm.tags,
        categories: fm.categories,
        html: render_markdown(body),
    })
}

/// Split a post source into front matter and body
fn split_front_matter(source: &str) -> Result<(&str, &str), PostParseError> {
    let rest = source
        .trim_start()
        .strip_prefix(FENCE)
        .ok_or(PostParseError::MissingFrontMatter)?;
    let end = rest
        .find(&format!("\n{FENCE}"))
        .ok_or(PostParseError::MissingFrontMatter)?;
    let front = &rest[..end];
    let body = rest[end + FENCE.len() + 1..].trim_start_matches(['\r', '\n']);
    Ok((front, body))
}

/// Render markdown to HTML
pub fn render_markdown(md_content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(md_content, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Derive a URL slug from a post file stem
///
/// Lowercases, maps whitespace and underscores to dashes, and drops
/// anything that is not alphanumeric or a dash.
pub fn slug_from_stem(stem: &str) -> String {
    let mut slug = String::with_capacity(stem.len());
    for c in stem.chars() {
        if c.is_ascii_alphanumeric() || c == '-' {
            slug.extend(c.to_lowercase());
        } else if c.is_whitespace() || c == '_' {
            slug.push('-');
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"+++
title = "First post"
date = "2013-05-01"
tags = ["rust", "web"]
categories = ["dev"]
+++
Hello *world*.
"#;

    #[test]
    fn test_parse_post() {
        let post = parse_post("first-post", SAMPLE).unwrap();
        assert_eq!(post.title, "First post");
        assert_eq!(post.url, "/post/first-post");
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2013, 5, 1).unwrap());
        assert_eq!(post.tags, vec!["rust", "web"]);
        assert_eq!(post.categories, vec!["dev"]);
        assert!(post.html.contains("<em>world</em>"));
    }

    #[test]
    fn test_parse_post_without_optional_fields() {
        let source = "+++\ntitle = \"Bare\"\ndate = \"2014-01-02\"\n+++\nBody\n";
        let post = parse_post("bare", source).unwrap();
        assert!(post.tags.is_empty());
        assert!(post.categories.is_empty());
    }

    #[test]
    fn test_missing_front_matter() {
        assert!(matches!(
            parse_post("x", "just a body"),
            Err(PostParseError::MissingFrontMatter)
        ));
    }

    #[test]
    fn test_bad_date() {
        let source = "+++\ntitle = \"X\"\ndate = \"01/05/2013\"\n+++\nBody\n";
        assert!(matches!(
            parse_post("x", source),
            Err(PostParseError::BadDate(_))
        ));
    }

    #[test]
    fn test_markdown_rendering() {
        let html = render_markdown("# Title\n\n- a\n- b\n");
        assert!(html.contains("<h1>"));
        assert!(html.contains("<li>a</li>"));
    }

    #[test]
    fn test_slug_from_stem() {
        assert_eq!(slug_from_stem("My First Post"), "my-first-post");
        assert_eq!(slug_from_stem("hello_world.2"), "hello-world2");
        assert_eq!(slug_from_stem("already-fine"), "already-fine");
    }
}
