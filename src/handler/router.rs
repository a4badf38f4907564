//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Each request walks the same
//! pipeline: method override and gate, body-size limit, session cookie,
//! route dispatch, then the static tail and the mode-dependent 404.

use crate::contact;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::routing::RouteAction;
use crate::session;
use crate::state::AppState;
use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::header;
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use super::blog_views;
use super::render::{not_found, render_page};
use super::static_files;

/// Request context handed to the static file handlers
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body<Data = Bytes> + Send,
    B::Error: std::fmt::Display,
{
    let method = effective_method(&req);
    let uri = req.uri().clone();
    let path = uri.path().to_string();
    let is_head = *req.method() == Method::HEAD;

    let access_log = state.cached_access_log.load(Ordering::Relaxed);
    let mut entry = access_log.then(|| build_log_entry(&req, &method, &path, peer_addr, &state));

    // 1. Method gate
    if let Some(resp) = check_http_method(&method) {
        return Ok(finish(resp, None, entry.as_mut(), &state));
    }

    // 2. Body size limit
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(finish(resp, None, entry.as_mut(), &state));
    }

    // 3. Session cookie verification/issuance
    let set_cookie = session_step(&req, &state, peer_addr);

    // 4. Route dispatch
    let response = dispatch(req, &method, &path, is_head, &state).await;

    Ok(finish(response, set_cookie, entry.as_mut(), &state))
}

/// Route the request through the controller table, then the static tail
async fn dispatch<B>(
    req: Request<B>,
    method: &Method,
    path: &str,
    is_head: bool,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes> + Send,
    B::Error: std::fmt::Display,
{
    let if_none_match = req
        .headers()
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    if let Some(m) = state.router.resolve(method, path) {
        return match m.action {
            RouteAction::Render { template, title } => {
                render_page(state, template, &crate::view::PageContext::new(*title), is_head)
            }
            RouteAction::ContactIntake => contact_intake(req).await,
            RouteAction::BlogIndex => blog_views::archive_page(state, path, is_head),
            RouteAction::BlogPost => blog_views::post_page(state, m.remainder, path, is_head),
            RouteAction::BlogPage => blog_views::numbered_page(state, m.remainder, path, is_head),
            RouteAction::BlogTag => blog_views::tag_page(state, m.remainder, path, is_head),
            RouteAction::BlogCategory => {
                blog_views::category_page(state, m.remainder, path, is_head)
            }
        };
    }

    let ctx = RequestContext {
        path,
        is_head,
        if_none_match,
    };

    if static_files::FAVICON_PATHS.contains(&path) {
        return static_files::serve_favicon(&ctx, state).await;
    }

    if let Some(resp) = static_files::serve_static(&ctx, state).await {
        return resp;
    }

    not_found(state, path, is_head)
}

/// Contact form intake: decode, validate, log, redirect
async fn contact_intake<B>(req: Request<B>) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes> + Send,
    B::Error: std::fmt::Display,
{
    let body = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_error(&format!("Failed to read contact form body: {e}"));
            return http::build_400_response("unreadable request body");
        }
    };

    let fields = contact::parse_form(&body);
    match contact::validate(&fields) {
        Ok(submission) => {
            logger::log_contact(&contact::format_log_line(&submission));
            // TODO: hand the submission to the store once a messages model exists
            http::build_redirect_response("/contact")
        }
        Err(e) => http::build_400_response(&e.to_string()),
    }
}

/// Resolve the request method, honoring X-HTTP-Method-Override on POST
fn effective_method<B>(req: &Request<B>) -> Method {
    if *req.method() == Method::POST {
        if let Some(name) = req
            .headers()
            .get("x-http-method-override")
            .and_then(|v| v.to_str().ok())
        {
            if let Ok(overridden) = name.to_ascii_uppercase().parse::<Method>() {
                return overridden;
            }
        }
    }
    req.method().clone()
}

/// Check HTTP method and answer non-page methods directly
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD | Method::POST => None,
        Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length and return 413 if the declared size exceeds
/// the configured limit
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let size_str = req.headers().get(header::CONTENT_LENGTH)?.to_str().ok()?;
    match size_str.parse::<u64>() {
        Ok(size) if size > max_body_size => {
            logger::log_warning(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            Some(http::build_413_response())
        }
        _ => None,
    }
}

/// Verify the session cookie; a missing or invalid one gets reissued
fn session_step<B>(req: &Request<B>, state: &AppState, peer_addr: SocketAddr) -> Option<String> {
    let cfg = &state.config.session;
    let existing = req
        .headers()
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| session::cookie_from_header(h, &cfg.cookie_name));
    if let Some(value) = existing {
        if session::verify(&cfg.secret, value) {
            return None;
        }
    }

    let seed = format!(
        "{peer_addr}/{}",
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    );
    let value = session::issue(&cfg.secret, &seed);
    Some(session::set_cookie_value(&cfg.cookie_name, &value))
}

/// Attach the session cookie and complete the access log entry
fn finish(
    mut response: Response<Full<Bytes>>,
    set_cookie: Option<String>,
    entry: Option<&mut AccessLogEntry>,
    state: &AppState,
) -> Response<Full<Bytes>> {
    if let Some(cookie) = set_cookie {
        if let Ok(value) = header::HeaderValue::from_str(&cookie) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }

    if let Some(entry) = entry {
        entry.status = response.status().as_u16();
        entry.body_bytes = usize::try_from(response.body().size_hint().exact().unwrap_or(0))
            .unwrap_or(usize::MAX);
        logger::log_access(entry, &state.config.logging.access_log_format);
    }

    response
}

/// Build the access log entry from request data
fn build_log_entry<B>(
    req: &Request<B>,
    method: &Method,
    path: &str,
    peer_addr: SocketAddr,
    state: &AppState,
) -> AccessLogEntry {
    let remote_addr = resolve_remote_addr(req, peer_addr, state.config.server.trust_proxy);
    let mut entry = AccessLogEntry::new(remote_addr, method.to_string(), path.to_string());
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = http_version_str(req.version()).to_string();
    entry.referer = header_str(req, header::REFERER);
    entry.user_agent = header_str(req, header::USER_AGENT);
    entry
}

/// The client address for logging: first X-Forwarded-For hop when the
/// trust-proxy flag is set, the socket peer otherwise
fn resolve_remote_addr<B>(req: &Request<B>, peer_addr: SocketAddr, trust_proxy: bool) -> String {
    if trust_proxy {
        if let Some(forwarded) = req
            .headers()
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
        {
            if let Some(first) = forwarded.split(',').next() {
                let first = first.trim();
                if !first.is_empty() {
                    return first.to_string();
                }
            }
        }
    }
    peer_addr.ip().to_string()
}

fn header_str<B>(req: &Request<B>, name: header::HeaderName) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn http_version_str(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}
