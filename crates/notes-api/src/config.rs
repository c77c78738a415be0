//! Server configuration loaded from environment variables.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | DATABASE_URL | postgres://localhost/notes | PostgreSQL connection string |
//! | HOST | 0.0.0.0 | Bind host |
//! | PORT | 5135 | Bind port |
//! | ALLOWED_ORIGIN | http://localhost:5173 | The single origin allowed by CORS |
//! | DB_MAX_CONNECTIONS | 10 | Pool size |
//! | DB_MIN_CONNECTIONS | 1 | Connections kept open when idle |
//! | DB_ACQUIRE_TIMEOUT | 30 | Seconds to wait for a free connection |
//! | DB_IDLE_TIMEOUT | 600 | Seconds before an idle connection is closed |
//! | DB_MAX_LIFETIME | 1800 | Connection lifetime in seconds, 0 for unlimited |
//! | RUN_MIGRATIONS | true | Apply migrations at startup |
//! | SWAGGER_UI | true | Serve Swagger UI at /docs |
//! | LOG_FORMAT | text | "json" or "text" |
//! | LOG_FILE | (stdout) | Log file path, rotated daily |
//! | LOG_ANSI | (auto) | "true"/"false" override ANSI colors |
//!
//! [`LogConfig`] parses without logging so tracing can be installed first;
//! [`ApiConfig::from_lookup`] warns about bad values and must run after that.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use tracing::warn;

use notes_core::{Error, Result};
use notes_db::PoolConfig;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/notes";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5135;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Logging options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    pub file: Option<String>,
    /// `None` means auto-detect (and no ANSI when writing to a file).
    pub ansi: Option<bool>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            file: None,
            ansi: None,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Never logs: this runs before any subscriber exists.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            format: match lookup("LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Text,
            },
            file: lookup("LOG_FILE").filter(|f| !f.trim().is_empty()),
            ansi: lookup("LOG_ANSI").map(|v| parse_flag(&v)),
        }
    }
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// The only origin allowed to make cross-origin requests.
    pub allowed_origin: HeaderValue,
    pub pool: PoolConfig,
    pub run_migrations: bool,
    pub swagger_ui: bool,
    pub log: LogConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origin: HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN),
            pool: PoolConfig::default(),
            run_migrations: true,
            swagger_ui: true,
            log: LogConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Invalid values fall back to their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let pool_defaults = defaults.pool.clone();

        let pool = PoolConfig::default()
            .max_connections(parse_or(
                &lookup,
                "DB_MAX_CONNECTIONS",
                pool_defaults.max_connections,
            ))
            .min_connections(parse_or(
                &lookup,
                "DB_MIN_CONNECTIONS",
                pool_defaults.min_connections,
            ))
            .acquire_timeout(Duration::from_secs(parse_or(
                &lookup,
                "DB_ACQUIRE_TIMEOUT",
                pool_defaults.acquire_timeout.as_secs(),
            )))
            .idle_timeout(Duration::from_secs(parse_or(
                &lookup,
                "DB_IDLE_TIMEOUT",
                pool_defaults.idle_timeout.as_secs(),
            )))
            .max_lifetime(
                match parse_or(
                    &lookup,
                    "DB_MAX_LIFETIME",
                    pool_defaults.max_lifetime.map_or(0, |d| d.as_secs()),
                ) {
                    0 => None,
                    secs => Some(Duration::from_secs(secs)),
                },
            );

        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port),
            allowed_origin: parse_allowed_origin(lookup("ALLOWED_ORIGIN").as_deref()),
            pool,
            run_migrations: lookup("RUN_MIGRATIONS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.run_migrations),
            swagger_ui: lookup("SWAGGER_UI")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.swagger_ui),
            log: LogConfig::from_lookup(&lookup),
        }
    }

    /// Socket address to bind the HTTP listener to.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("invalid bind address: {}", e)))
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid {} '{}', using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

/// Parse the CORS origin, falling back to the default when unset or invalid.
///
/// Wildcards are not accepted: exactly one origin is allowed.
pub fn parse_allowed_origin(value: Option<&str>) -> HeaderValue {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN);
    }
    if trimmed == "*" || trimmed.contains(',') {
        warn!(
            "ALLOWED_ORIGIN must be a single origin, got '{}'; using {}",
            trimmed, DEFAULT_ALLOWED_ORIGIN
        );
        return HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN);
    }
    match trimmed.trim_end_matches('/').parse::<HeaderValue>() {
        Ok(v) => v,
        Err(e) => {
            warn!("Invalid CORS origin '{}': {}", trimmed, e);
            HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::capture::CapturedLogs;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ApiConfig::from_lookup(|_| None);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.allowed_origin, DEFAULT_ALLOWED_ORIGIN);
        assert!(config.run_migrations);
        assert!(config.swagger_ui);
        assert_eq!(config.log, LogConfig::default());
        assert_eq!(config.bind_addr().unwrap().port(), DEFAULT_PORT);
    }

    #[test]
    fn test_values_from_lookup() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://u:p@db/notes"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("ALLOWED_ORIGIN", "https://notes.example.com"),
            ("DB_MAX_CONNECTIONS", "3"),
            ("RUN_MIGRATIONS", "false"),
            ("SWAGGER_UI", "0"),
            ("LOG_FORMAT", "json"),
            ("LOG_FILE", "/tmp/notes.log"),
            ("LOG_ANSI", "true"),
        ]));
        assert_eq!(config.database_url, "postgres://u:p@db/notes");
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.allowed_origin, "https://notes.example.com");
        assert_eq!(config.pool.max_connections, 3);
        assert!(!config.run_migrations);
        assert!(!config.swagger_ui);
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.log.file.as_deref(), Some("/tmp/notes.log"));
        assert_eq!(config.log.ansi, Some(true));
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = ApiConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_pool_settings_from_lookup() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("DB_MAX_CONNECTIONS", "20"),
            ("DB_MIN_CONNECTIONS", "4"),
            ("DB_ACQUIRE_TIMEOUT", "5"),
            ("DB_IDLE_TIMEOUT", "60"),
            ("DB_MAX_LIFETIME", "0"),
        ]));
        assert_eq!(
            config.pool,
            PoolConfig::default()
                .max_connections(20)
                .min_connections(4)
                .acquire_timeout(Duration::from_secs(5))
                .idle_timeout(Duration::from_secs(60))
                .max_lifetime(None)
        );
        assert!(config.pool.validate().is_ok());

        let defaults = ApiConfig::from_lookup(|_| None);
        assert_eq!(defaults.pool, PoolConfig::default());
    }

    #[test]
    fn test_log_config_parses_independently() {
        let log = LogConfig::from_lookup(lookup_from(&[
            ("LOG_FORMAT", "json"),
            ("LOG_FILE", "  "),
            ("LOG_ANSI", "0"),
        ]));
        assert_eq!(log.format, LogFormat::Json);
        assert_eq!(log.file, None);
        assert_eq!(log.ansi, Some(false));
    }

    #[test]
    fn test_fallbacks_are_reported_once_tracing_is_installed() {
        let logs = CapturedLogs::default();
        let config = tracing::subscriber::with_default(logs.text_subscriber(), || {
            ApiConfig::from_lookup(lookup_from(&[
                ("PORT", "eighty"),
                ("DB_MIN_CONNECTIONS", "-1"),
                ("ALLOWED_ORIGIN", "https://a.example,https://b.example"),
            ]))
        });

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(
            config.pool.min_connections,
            PoolConfig::default().min_connections
        );
        assert_eq!(config.allowed_origin, DEFAULT_ALLOWED_ORIGIN);

        let output = logs.contents();
        assert!(output.contains("Invalid PORT 'eighty'"), "{}", output);
        assert!(output.contains("Invalid DB_MIN_CONNECTIONS '-1'"), "{}", output);
        assert!(output.contains("ALLOWED_ORIGIN must be a single origin"), "{}", output);
    }

    #[test]
    fn test_invalid_host_is_config_error() {
        let config = ApiConfig::from_lookup(lookup_from(&[("HOST", "not a host")]));
        assert!(matches!(config.bind_addr(), Err(Error::Config(_))));
    }

    #[test]
    fn test_allowed_origin_parsing() {
        assert_eq!(
            parse_allowed_origin(Some(" http://localhost:3000 ")),
            "http://localhost:3000"
        );
        assert_eq!(
            parse_allowed_origin(Some("http://localhost:3000/")),
            "http://localhost:3000"
        );
        assert_eq!(parse_allowed_origin(None), DEFAULT_ALLOWED_ORIGIN);
        assert_eq!(parse_allowed_origin(Some("")), DEFAULT_ALLOWED_ORIGIN);
    }

    #[test]
    fn test_allowed_origin_rejects_wildcard_and_lists() {
        assert_eq!(parse_allowed_origin(Some("*")), DEFAULT_ALLOWED_ORIGIN);
        assert_eq!(
            parse_allowed_origin(Some("https://a.com,https://b.com")),
            DEFAULT_ALLOWED_ORIGIN
        );
        assert_eq!(
            parse_allowed_origin(Some("bad\u{7f}origin")),
            DEFAULT_ALLOWED_ORIGIN
        );
    }
}
