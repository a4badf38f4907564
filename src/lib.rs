//! Personal website and blog server
//!
//! Static pages rendered from handlebars templates, a contact form that
//! validates and logs submissions, and a markdown blog with tag and
//! category listings, served over tokio + hyper. Configuration is
//! resolved once at startup from `config.toml` and the runtime mode.

pub mod blog;
pub mod config;
pub mod contact;
pub mod controllers;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;
pub mod session;
pub mod state;
pub mod store;
pub mod view;
