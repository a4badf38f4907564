// Configuration module entry point
// Resolves the immutable per-process configuration record

mod types;

use std::net::SocketAddr;

// Re-export public types
pub use types::{
    BlogConfig, Config, HttpConfig, LoggingConfig, Mode, PathsConfig, PerformanceConfig,
    ServerConfig, SessionConfig, SiteConfig, StoreConfig,
};

/// Default config file path (without extension), resolves to `config.toml`
const DEFAULT_CONFIG_PATH: &str = "config";

/// Development port when no `PORT` override is present
const DEV_DEFAULT_PORT: u16 = 8080;

/// Production port, fixed regardless of environment
const PROD_PORT: u16 = 80;

impl Config {
    /// Resolve the configuration for the given mode from the default
    /// config file location.
    pub fn resolve(mode: Mode) -> Result<Self, config::ConfigError> {
        Self::resolve_from(DEFAULT_CONFIG_PATH, mode)
    }

    /// Resolve the configuration for the given mode.
    ///
    /// Layering: compiled-in defaults, then the optional config file.
    /// Afterwards the mode policy is applied in one place: development
    /// honors a `PORT` environment override (falling back to 8080) and
    /// turns on error pages and verbose request logging; production pins
    /// the port to 80 and suppresses failure detail.
    pub fn resolve_from(config_path: &str, mode: Mode) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEV_DEFAULT_PORT))?
            .set_default("server.trust_proxy", true)?
            .set_default("site.name", "BrdyOrn")?
            .set_default("site.url", "http://localhost")?
            .set_default("paths.static_dir", "public")?
            .set_default("paths.views_dir", "views")?
            .set_default("paths.posts_dir", "posts")?
            .set_default("paths.favicon", "imgs/favicon.svg")?
            .set_default("session.secret", "AbRsd4gSFffvhy$sfgb5#rs")?
            .set_default("session.cookie_name", "sid")?
            .set_default("store.url", "mem://")?
            .set_default("store.namespace", "site")?
            .set_default("store.database", "site")?
            .set_default("blog.posts_per_page", 5)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", false)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "brdyorn/0.1")?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;
        cfg.mode = mode;
        cfg.apply_mode_policy();
        Ok(cfg)
    }

    /// Apply the development/production policy on top of file values
    fn apply_mode_policy(&mut self) {
        match self.mode {
            Mode::Development => {
                self.error_pages = true;
                self.logging.access_log = true;
                self.logging.level = "debug".to_string();
                if let Some(port) = port_from_env() {
                    self.server.port = port;
                }
            }
            Mode::Production => {
                self.error_pages = false;
                self.server.port = PROD_PORT;
            }
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Read the `PORT` environment override; an unparsable value is ignored
fn port_from_env() -> Option<u16> {
    std::env::var("PORT").ok().and_then(|p| p.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn development_defaults_to_8080() {
        std::env::remove_var("PORT");
        let cfg = Config::resolve_from("nonexistent-config", Mode::Development).unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.error_pages);
        assert!(cfg.logging.access_log);
    }

    #[test]
    #[serial]
    fn development_honors_port_override() {
        std::env::set_var("PORT", "3000");
        let cfg = Config::resolve_from("nonexistent-config", Mode::Development).unwrap();
        std::env::remove_var("PORT");
        assert_eq!(cfg.server.port, 3000);
    }

    #[test]
    #[serial]
    fn development_ignores_garbage_port() {
        std::env::set_var("PORT", "not-a-port");
        let cfg = Config::resolve_from("nonexistent-config", Mode::Development).unwrap();
        std::env::remove_var("PORT");
        assert_eq!(cfg.server.port, 8080);
    }

    #[test]
    #[serial]
    fn production_pins_port_80() {
        std::env::set_var("PORT", "3000");
        let cfg = Config::resolve_from("nonexistent-config", Mode::Production).unwrap();
        std::env::remove_var("PORT");
        assert_eq!(cfg.server.port, 80);
        assert!(!cfg.error_pages);
    }

    #[test]
    #[serial]
    fn defaults_cover_everything() {
        std::env::remove_var("PORT");
        let cfg = Config::resolve_from("nonexistent-config", Mode::Development).unwrap();
        assert_eq!(cfg.site.name, "BrdyOrn");
        assert_eq!(cfg.paths.static_dir, "public");
        assert_eq!(cfg.paths.views_dir, "views");
        assert_eq!(cfg.store.url, "mem://");
        assert_eq!(cfg.blog.posts_per_page, 5);
        assert!(!cfg.session.secret.is_empty());
    }

    #[test]
    #[serial]
    fn mode_from_env_defaults_to_development() {
        std::env::remove_var("SITE_ENV");
        assert_eq!(Mode::from_env(), Mode::Development);
        std::env::set_var("SITE_ENV", "production");
        assert_eq!(Mode::from_env(), Mode::Production);
        std::env::remove_var("SITE_ENV");
    }
}
