//! Blog module
//!
//! Owns the post index (posts sorted newest first, tag and category
//! lookups) and registers its route families on the shared route table.
//! Registration is chainable and runs once at startup in a fixed order:
//! post, page, tag, category, then the init callback.

mod loader;
mod post;

pub use post::{parse_post, render_markdown, slug_from_stem, Post, PostParseError};

use crate::routing::{RouteAction, RoutePattern, Router};
use hyper::Method;
use std::collections::BTreeMap;

/// Values handed to the init callback after route registration
pub struct Locals<'a> {
    pub post_list: &'a [Post],
}

/// The loaded blog index, immutable after startup
pub struct Blog {
    posts: Vec<Post>,
    /// Tag name to post indices, in post order
    tags: BTreeMap<String, Vec<usize>>,
    /// Category name to post indices, in post order
    categories: BTreeMap<String, Vec<usize>>,
    posts_per_page: usize,
}

impl Blog {
    /// Load the blog from the posts directory
    pub fn load(posts_dir: &str, posts_per_page: usize) -> Self {
        Self::from_posts(loader::load_posts(posts_dir), posts_per_page)
    }

    /// Build the index from an already-loaded post list
    pub fn from_posts(posts: Vec<Post>, posts_per_page: usize) -> Self {
        let mut tags: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        let mut categories: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (i, p) in posts.iter().enumerate() {
            for tag in &p.tags {
                tags.entry(tag.clone()).or_default().push(i);
            }
            for category in &p.categories {
                categories.entry(category.clone()).or_default().push(i);
            }
        }
        Self {
            posts,
            tags,
            categories,
            posts_per_page: posts_per_page.max(1),
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn find_post(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Posts for a 1-based archive page
    pub fn page(&self, number: usize) -> Option<&[Post]> {
        if number == 0 {
            return None;
        }
        let start = (number - 1) * self.posts_per_page;
        if start >= self.posts.len() {
            return None;
        }
        let end = (start + self.posts_per_page).min(self.posts.len());
        Some(&self.posts[start..end])
    }

    pub fn page_count(&self) -> usize {
        self.posts.len().div_ceil(self.posts_per_page)
    }

    pub fn tagged(&self, tag: &str) -> Vec<&Post> {
        self.tags
            .get(tag)
            .map(|idx| idx.iter().map(|&i| &self.posts[i]).collect())
            .unwrap_or_default()
    }

    pub fn categorized(&self, category: &str) -> Vec<&Post> {
        self.categories
            .get(category)
            .map(|idx| idx.iter().map(|&i| &self.posts[i]).collect())
            .unwrap_or_default()
    }

    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Register `/post/<slug>` routes
    pub fn create_post_route(&self, router: &mut Router) -> &Self {
        router.register(Method::GET, RoutePattern::Prefix("/post/"), RouteAction::BlogPost);
        self
    }

    /// Register `/page/<n>` archive routes
    pub fn create_page_route(&self, router: &mut Router) -> &Self {
        router.register(Method::GET, RoutePattern::Prefix("/page/"), RouteAction::BlogPage);
        self
    }

    /// Register `/tag/<tag>` listing routes
    pub fn create_tag_route(&self, router: &mut Router) -> &Self {
        router.register(Method::GET, RoutePattern::Prefix("/tag/"), RouteAction::BlogTag);
        self
    }

    /// Register `/category/<category>` listing routes
    pub fn create_category_route(&self, router: &mut Router) -> &Self {
        router.register(
            Method::GET,
            RoutePattern::Prefix("/category/"),
            RouteAction::BlogCategory,
        );
        self
    }

    /// Run the post-registration callback with the loaded posts
    pub fn init<F: FnOnce(Locals<'_>)>(&self, callback: F) {
        callback(Locals {
            post_list: &self.posts,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_post(slug: &str, date: &str, tags: &[&str], categories: &[&str]) -> Post {
        Post {
            title: slug.to_uppercase(),
            slug: slug.to_string(),
            url: format!("/post/{slug}"),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            tags: tags.iter().map(ToString::to_string).collect(),
            categories: categories.iter().map(ToString::to_string).collect(),
            html: String::new(),
        }
    }

    fn sample_blog() -> Blog {
        Blog::from_posts(
            vec![
                make_post("newest", "2013-06-01", &["rust"], &["dev"]),
                make_post("middle", "2013-03-01", &["rust", "web"], &["dev"]),
                make_post("oldest", "2013-01-01", &["life"], &["misc"]),
            ],
            2,
        )
    }

    #[test]
    fn test_find_post() {
        let blog = sample_blog();
        assert_eq!(blog.find_post("middle").unwrap().url, "/post/middle");
        assert!(blog.find_post("missing").is_none());
    }

    #[test]
    fn test_pagination() {
        let blog = sample_blog();
        assert_eq!(blog.page_count(), 2);
        let first = blog.page(1).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].slug, "newest");
        let second = blog.page(2).unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].slug, "oldest");
        assert!(blog.page(0).is_none());
        assert!(blog.page(3).is_none());
    }

    #[test]
    fn test_tag_and_category_lookup() {
        let blog = sample_blog();
        let rust = blog.tagged("rust");
        assert_eq!(rust.len(), 2);
        assert_eq!(rust[0].slug, "newest");
        assert_eq!(blog.categorized("misc").len(), 1);
        assert!(blog.tagged("absent").is_empty());
        assert_eq!(blog.tag_names().collect::<Vec<_>>(), vec!["life", "rust", "web"]);
    }

    #[test]
    fn test_route_registration_order() {
        let blog = sample_blog();
        let mut router = Router::new();
        blog.create_post_route(&mut router)
            .create_page_route(&mut router)
            .create_tag_route(&mut router)
            .create_category_route(&mut router);

        let actions: Vec<_> = router.routes().iter().map(|r| r.action.clone()).collect();
        assert_eq!(
            actions,
            vec![
                RouteAction::BlogPost,
                RouteAction::BlogPage,
                RouteAction::BlogTag,
                RouteAction::BlogCategory,
            ]
        );
    }

    #[test]
    fn test_init_callback_sees_posts_in_order() {
        let blog = sample_blog();
        let mut seen = Vec::new();
        blog.init(|locals| {
            for post in locals.post_list {
                seen.push(post.url.clone());
            }
        });
        assert_eq!(seen, vec!["/post/newest", "/post/middle", "/post/oldest"]);
    }
}
