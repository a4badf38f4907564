//! Rendered response helpers
//!
//! Shared by the page and blog dispatch paths: template rendering with
//! the mode-dependent failure response, and the not-found tail.

use crate::http;
use crate::logger;
use crate::state::AppState;
use crate::view::PageContext;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde_json::Value;

/// Render a template into a 200 response
pub fn render_page(
    state: &AppState,
    template: &str,
    ctx: &PageContext,
    is_head: bool,
) -> Response<Full<Bytes>> {
    render_with_status(state, template, ctx, 200, is_head)
}

/// Render a template into a response with an explicit status.
///
/// A render failure becomes the generic error response; failure detail
/// reaches the client only when error pages are enabled (development).
pub fn render_with_status(
    state: &AppState,
    template: &str,
    ctx: &PageContext,
    status: u16,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match state.views.render(template, ctx) {
        Ok(html) => http::build_html_response_with_status(status, html, is_head),
        Err(e) => {
            logger::log_error(&format!("Failed to render '{template}': {e}"));
            let detail = state.config.error_pages.then(|| e.to_string());
            http::build_error_response(detail.as_deref())
        }
    }
}

/// Mode-dependent not-found tail.
///
/// Production renders the themed 404 template carrying the requested
/// URL; development falls through to the plain not-found response.
pub fn not_found(state: &AppState, url: &str, is_head: bool) -> Response<Full<Bytes>> {
    if state.config.error_pages {
        return http::build_404_response();
    }
    let ctx = PageContext::new("404 - page cannot be found")
        .with("url", Value::String(url.to_string()));
    render_with_status(state, "404", &ctx, 404, is_head)
}
