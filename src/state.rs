// Application state module
// Everything the request pipeline needs, built once at startup after the
// configuration record is fully resolved

use std::sync::atomic::AtomicBool;

use surrealdb::engine::any::Any;
use surrealdb::Surreal;

use crate::blog::Blog;
use crate::config::Config;
use crate::routing::Router;
use crate::view::ViewRegistry;

/// Shared application state, read-only while serving
pub struct AppState {
    pub config: Config,
    pub views: ViewRegistry,
    pub blog: Blog,
    pub router: Router,
    pub db: Surreal<Any>,

    // Cached config value for fast access on the request path
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(
        config: Config,
        views: ViewRegistry,
        blog: Blog,
        router: Router,
        db: Surreal<Any>,
    ) -> Self {
        let cached_access_log = AtomicBool::new(config.logging.access_log);
        Self {
            config,
            views,
            blog,
            router,
            db,
            cached_access_log,
        }
    }
}
