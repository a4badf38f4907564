//! Site bootstrapper
//!
//! Startup order matters: configuration resolves first, views and posts
//! load next, the store connects, controllers register their routes, the
//! blog delegate chain runs, and only then does the listener bind.

use std::sync::Arc;

use brdyorn::blog::Blog;
use brdyorn::config::{Config, Mode};
use brdyorn::controllers;
use brdyorn::logger;
use brdyorn::routing::Router;
use brdyorn::server;
use brdyorn::state::AppState;
use brdyorn::store;
use brdyorn::view::ViewRegistry;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mode = Mode::from_env();
    let cfg = Config::resolve(mode)?;
    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.socket_addr()?;

    // Views and posts load before any route is registered
    let views = ViewRegistry::load(&config.paths.views_dir)?;
    let blog = Blog::load(&config.paths.posts_dir, config.blog.posts_per_page);

    // Document store: connection failure aborts startup
    let db = store::connect(&config.store).await?;
    store::models::setup(&db).await?;

    // Controllers register routes in declaration order
    let mut router = Router::new();
    controllers::load_controllers(&mut router);

    // Blog route chain, then the init callback over the loaded posts
    blog.create_post_route(&mut router)
        .create_page_route(&mut router)
        .create_tag_route(&mut router)
        .create_category_route(&mut router)
        .init(|locals| {
            for post in locals.post_list {
                logger::log_loading_post(&post.url);
            }
        });

    let state = Arc::new(AppState::new(config, views, blog, router, db));

    let listener = server::create_listener(addr)?;
    logger::log_server_start(&addr, &state.config);
    server::serve(listener, state).await
}
