//! Blog controller
//!
//! Registers the archive entry point. The per-post, page, tag, and
//! category routes are registered afterwards by the blog delegate chain.

use crate::routing::{RouteAction, RoutePattern, Router};
use hyper::Method;

pub fn setup(router: &mut Router) {
    router.register(
        Method::GET,
        RoutePattern::Exact("/blog"),
        RouteAction::BlogIndex,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_registers_archive() {
        let mut router = Router::new();
        setup(&mut router);
        let m = router.resolve(&Method::GET, "/blog").unwrap();
        assert_eq!(*m.action, RouteAction::BlogIndex);
    }
}
