//! Route table module
//!
//! Routes are data: controllers and the blog delegate register entries at
//! startup, and the request pipeline dispatches on the matched action.
//! Registration order is preserved and matching scans in that order.

use hyper::Method;

/// Path matching rule for a route entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// Match the path exactly
    Exact(&'static str),
    /// Match any path under the prefix; the remainder is handed to the
    /// action (slug, tag name, page number, ...)
    Prefix(&'static str),
}

/// What to do when a route matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    /// Render a named template with a fixed title
    Render {
        template: &'static str,
        title: &'static str,
    },
    /// Contact form intake (POST)
    ContactIntake,
    /// Blog archive listing
    BlogIndex,
    /// Individual post by slug
    BlogPost,
    /// Paginated post listing by page number
    BlogPage,
    /// Posts carrying a tag
    BlogTag,
    /// Posts under a category
    BlogCategory,
}

/// A registered route
#[derive(Debug, Clone)]
pub struct Route {
    pub method: Method,
    pub pattern: RoutePattern,
    pub action: RouteAction,
}

/// Ordered route table
#[derive(Debug, Default)]
pub struct Router {
    routes: Vec<Route>,
}

/// A successful route match
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub action: &'a RouteAction,
    /// Path remainder after a prefix pattern; empty for exact matches
    pub remainder: &'a str,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Register a route; later entries never shadow earlier ones
    pub fn register(&mut self, method: Method, pattern: RoutePattern, action: RouteAction) {
        self.routes.push(Route {
            method,
            pattern,
            action,
        });
    }

    /// Find the first route matching the method and path.
    ///
    /// HEAD requests match GET routes; the pipeline strips the body.
    pub fn resolve<'a>(&'a self, method: &Method, path: &'a str) -> Option<RouteMatch<'a>> {
        let effective = if *method == Method::HEAD {
            &Method::GET
        } else {
            method
        };

        for route in &self.routes {
            if route.method != *effective {
                continue;
            }
            match route.pattern {
                RoutePattern::Exact(p) if path == p => {
                    return Some(RouteMatch {
                        action: &route.action,
                        remainder: "",
                    });
                }
                RoutePattern::Prefix(p) if path.len() > p.len() && path.starts_with(p) => {
                    return Some(RouteMatch {
                        action: &route.action,
                        remainder: &path[p.len()..],
                    });
                }
                _ => {}
            }
        }
        None
    }

    /// Registered routes in registration order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}
