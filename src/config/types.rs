// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Runtime mode, chosen once at process start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    /// Resolve the mode from the `SITE_ENV` environment variable.
    ///
    /// Anything other than `production` means development.
    pub fn from_env() -> Self {
        match std::env::var("SITE_ENV") {
            Ok(v) if v.eq_ignore_ascii_case("production") => Self::Production,
            _ => Self::Development,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(skip)]
    pub mode: Mode,
    /// When true, failure detail is shown to the client and the plain 404
    /// fallthrough applies. Set from the mode, not from the file.
    #[serde(skip)]
    pub error_pages: bool,
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub paths: PathsConfig,
    pub session: SessionConfig,
    pub store: StoreConfig,
    pub blog: BlogConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Honor X-Forwarded-For when resolving the client address for logs
    pub trust_proxy: bool,
    pub workers: Option<usize>,
}

/// Site identity, rendered into templates and the startup log line
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub name: String,
    pub url: String,
}

/// Filesystem layout
#[derive(Debug, Deserialize, Clone)]
pub struct PathsConfig {
    /// Static asset root, served as-is
    pub static_dir: String,
    /// Handlebars template directory
    pub views_dir: String,
    /// Markdown post directory consumed by the blog index
    pub posts_dir: String,
    /// Favicon file, relative to `static_dir`
    pub favicon: String,
}

/// Session cookie configuration
#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Cookie signing secret
    pub secret: String,
    pub cookie_name: String,
}

/// Document store configuration
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Connection URL, e.g. "mem://" or "ws://localhost:8000"
    pub url: String,
    pub namespace: String,
    pub database: String,
}

/// Blog configuration
#[derive(Debug, Deserialize, Clone)]
pub struct BlogConfig {
    pub posts_per_page: usize,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, or json)
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub max_body_size: u64,
}
