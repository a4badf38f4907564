//! Static page controller
//!
//! One route per static page plus the contact form intake. Each page
//! renders the template named after it with a fixed title.

use crate::routing::{RouteAction, RoutePattern, Router};
use hyper::Method;

/// Static pages in presentation order: (path, template, title)
pub const PAGES: &[(&str, &str, &str)] = &[
    ("/", "index", "BrdyOrn"),
    ("/about", "about", "About Brady Ouren"),
    ("/contact", "contact", "Contact Brady Ouren"),
    ("/projects", "projects", "Projects"),
    ("/modesty", "modesty", "Mode-sty"),
];

/// Register the page routes and the contact form intake
pub fn setup(router: &mut Router) {
    for (path, template, title) in page_routes() {
        router.register(
            Method::GET,
            RoutePattern::Exact(path),
            RouteAction::Render { template, title },
        );
    }
    router.register(
        Method::POST,
        RoutePattern::Exact("/contact"),
        RouteAction::ContactIntake,
    );
}

fn page_routes() -> impl Iterator<Item = (&'static str, &'static str, &'static str)> {
    PAGES.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_has_a_title() {
        for &(path, template, title) in PAGES {
            assert!(!title.is_empty(), "page {path} ({template}) has no title");
        }
    }

    #[test]
    fn test_setup_registers_all_pages() {
        let mut router = Router::new();
        setup(&mut router);

        for &(path, template, title) in PAGES {
            let m = router.resolve(&Method::GET, path).unwrap_or_else(|| {
                panic!("no route registered for {path}");
            });
            assert_eq!(*m.action, RouteAction::Render { template, title });
        }
    }

    #[test]
    fn test_setup_registers_contact_intake() {
        let mut router = Router::new();
        setup(&mut router);
        let m = router.resolve(&Method::POST, "/contact").unwrap();
        assert_eq!(*m.action, RouteAction::ContactIntake);
    }
}
