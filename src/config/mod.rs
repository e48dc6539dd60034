use std::env;
use std::time::Duration;

pub mod cors;

pub use cors::create_cors_layer;

pub const DB_URI_VAR: &str = "MOONSTREAM_DB_URI";
pub const CORS_ALLOWED_ORIGINS_VAR: &str = "MOONSTREAM_CORS_ALLOWED_ORIGINS";

// Database configs
pub const DEFAULT_IDLE_CONNS_MAX: u32 = 30;
pub const DEFAULT_CONN_MAX_LIFETIME: Duration = Duration::from_secs(30 * 60);

/// Process configuration, resolved once at startup and passed by reference
/// to the pool initializer and the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub idle_conns_max: u32,
    pub conn_max_lifetime: Duration,
    /// Passed to the driver as-is. May be empty.
    pub db_uri: String,
    /// Comma-separated origins, kept unparsed. May be empty.
    pub cors_allowed_origins: String,
}

impl Config {
    pub fn from_env() -> Self {
        let config = Self::from_lookup(|key| env::var(key).ok());

        tracing::info!(
            db_uri_set = !config.db_uri.is_empty(),
            cors_allowed_origins_set = !config.cors_allowed_origins.is_empty(),
            idle_conns_max = config.idle_conns_max,
            conn_max_lifetime_secs = config.conn_max_lifetime.as_secs(),
            "Configuration loaded from environment"
        );

        config
    }

    /// Resolves the configuration against `lookup` instead of the process
    /// environment. Missing keys become empty strings.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            idle_conns_max: DEFAULT_IDLE_CONNS_MAX,
            conn_max_lifetime: DEFAULT_CONN_MAX_LIFETIME,
            db_uri: lookup(DB_URI_VAR).unwrap_or_default(),
            cors_allowed_origins: lookup(CORS_ALLOWED_ORIGINS_VAR).unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
