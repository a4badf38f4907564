//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from the
//! page and blog logic.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_400_response, build_404_response, build_405_response,
    build_413_response, build_cached_response, build_error_response,
    build_html_response_with_status, build_options_response, build_redirect_response,
};
