//! Blog page rendering
//!
//! Builds the template contexts for the blog route families. Every
//! listing hands the template a `posts` array of summaries; the missing
//! cases (unknown slug, empty tag, out-of-range page) take the not-found
//! tail.

use super::render::{not_found, render_page};
use crate::blog::Post;
use crate::state::AppState;
use crate::view::PageContext;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde_json::{json, Value};

/// `/post/<slug>`
pub fn post_page(
    state: &AppState,
    slug: &str,
    url: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match state.blog.find_post(slug) {
        Some(post) => {
            let ctx = PageContext::new(post.title.clone())
                .with("content", Value::String(post.html.clone()))
                .with("date", Value::String(post.date.to_string()))
                .with("tags", json!(post.tags))
                .with("categories", json!(post.categories))
                .with("url", Value::String(post.url.clone()));
            render_page(state, "post", &ctx, is_head)
        }
        None => not_found(state, url, is_head),
    }
}

/// `/blog` archive
pub fn archive_page(state: &AppState, _url: &str, is_head: bool) -> Response<Full<Bytes>> {
    let ctx = PageContext::new("Blog")
        .with("posts", posts_summary(state.blog.posts().iter()))
        .with("tags", json!(state.blog.tag_names().collect::<Vec<_>>()))
        .with(
            "categories",
            json!(state.blog.category_names().collect::<Vec<_>>()),
        );
    render_page(state, "blog", &ctx, is_head)
}

/// `/page/<n>` paginated listing, 1-based
pub fn numbered_page(
    state: &AppState,
    remainder: &str,
    url: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let Ok(number) = remainder.parse::<usize>() else {
        return not_found(state, url, is_head);
    };
    match state.blog.page(number) {
        Some(posts) => {
            let ctx = PageContext::new(format!("Blog - page {number}"))
                .with("posts", posts_summary(posts.iter()))
                .with("page", json!(number))
                .with("page_count", json!(state.blog.page_count()));
            render_page(state, "page", &ctx, is_head)
        }
        None => not_found(state, url, is_head),
    }
}

/// `/tag/<tag>`
pub fn tag_page(state: &AppState, tag: &str, url: &str, is_head: bool) -> Response<Full<Bytes>> {
    let posts = state.blog.tagged(tag);
    if posts.is_empty() {
        return not_found(state, url, is_head);
    }
    let ctx = PageContext::new(format!("Posts tagged {tag}"))
        .with("tag", Value::String(tag.to_string()))
        .with("posts", posts_summary(posts.into_iter()));
    render_page(state, "tag", &ctx, is_head)
}

/// `/category/<category>`
pub fn category_page(
    state: &AppState,
    category: &str,
    url: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let posts = state.blog.categorized(category);
    if posts.is_empty() {
        return not_found(state, url, is_head);
    }
    let ctx = PageContext::new(format!("Posts in {category}"))
        .with("category", Value::String(category.to_string()))
        .with("posts", posts_summary(posts.into_iter()));
    render_page(state, "category", &ctx, is_head)
}

/// Post summaries handed to listing templates
fn posts_summary<'a>(posts: impl Iterator<Item = &'a Post>) -> Value {
    Value::Array(
        posts
            .map(|p| {
                json!({
                    "title": p.title,
                    "url": p.url,
                    "date": p.date.to_string(),
                    "tags": p.tags,
                })
            })
            .collect(),
    )
}
