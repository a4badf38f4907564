//! Static file serving module
//!
//! Serves the favicon and anything under the static asset root, with
//! `ETag` revalidation and a canonical-path traversal guard.

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use crate::state::AppState;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Paths answered with the site favicon
pub const FAVICON_PATHS: &[&str] = &["/favicon.ico", "/favicon.svg"];

/// Serve the favicon configured under the static root
pub async fn serve_favicon(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let favicon_path = Path::new(&state.config.paths.static_dir).join(&state.config.paths.favicon);
    match fs::read(&favicon_path).await {
        Ok(data) => build_favicon_response(&data, ctx),
        Err(e) => {
            logger::log_warning(&format!(
                "Favicon '{}' not readable: {e}",
                favicon_path.display()
            ));
            http::build_404_response()
        }
    }
}

/// Serve a file under the static root; `None` means not found and the
/// caller decides how to answer
pub async fn serve_static(
    ctx: &RequestContext<'_>,
    state: &AppState,
) -> Option<Response<Full<Bytes>>> {
    let (content, content_type) =
        load_from_directory(&state.config.paths.static_dir, ctx.path).await?;
    Some(build_static_file_response(
        &content,
        content_type,
        ctx.if_none_match.as_deref(),
        ctx.is_head,
    ))
}

/// Load a static file, refusing paths that escape the static root
async fn load_from_directory(static_dir: &str, path: &str) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and prevent directory traversal
    let clean_path = path.trim_start_matches('/').replace("..", "");
    if clean_path.is_empty() {
        return None;
    }
    let file_path = Path::new(static_dir).join(&clean_path);

    // Security: ensure file_path is within static_dir
    let static_dir_canonical = match Path::new(static_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{static_dir}': {e}"
            ));
            return None;
        }
    };

    // File not found is common (404), no need to log at warning level
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&static_dir_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_path_canonical.display()
        ));
        return None;
    }
    if !file_path_canonical.is_file() {
        return None;
    }

    let content = match fs::read(&file_path_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path_canonical.display(),
                e
            ));
            return None;
        }
    };

    let content_type =
        mime::get_content_type(file_path_canonical.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

/// Build favicon response with long-lived caching
fn build_favicon_response(data: &[u8], ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);

    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    let body = if ctx.is_head {
        Bytes::new()
    } else {
        Bytes::from(data.to_owned())
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "image/svg+xml")
        .header("Content-Length", data.len())
        .header("ETag", etag)
        .header("Cache-Control", "public, max-age=86400")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build favicon response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build static file response with `ETag` revalidation
fn build_static_file_response(
    data: &[u8],
    content_type: &str,
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);

    // Check if client has cached version
    if cache::check_etag_match(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(data.to_owned())
    };

    http::build_cached_response(body, content_type, &etag, is_head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_from_directory_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("style.css"), "body {}").unwrap();

        let (content, content_type) =
            load_from_directory(dir.path().to_str().unwrap(), "/style.css")
                .await
                .unwrap();
        assert_eq!(content, b"body {}");
        assert_eq!(content_type, "text/css");
    }

    #[tokio::test]
    async fn test_load_from_directory_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("inside.txt"), "ok").unwrap();

        assert!(
            load_from_directory(dir.path().to_str().unwrap(), "/../../etc/passwd")
                .await
                .is_none()
        );
        assert!(load_from_directory(dir.path().to_str().unwrap(), "/")
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_load_from_directory_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_directory(dir.path().to_str().unwrap(), "/nope.png")
            .await
            .is_none());
    }
}
