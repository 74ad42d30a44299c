use std::path::PathBuf;
use std::str::FromStr;

use passport_core::photo::{DEFAULT_MAX_PHOTO_BYTES, PHOTO_BUCKET};

/// A configuration value that could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{key} has an invalid value '{value}'")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory uploaded photos are written to and served from.
    pub photo_storage_dir: PathBuf,
    /// Public URL prefix of the served photo directory.
    pub photo_public_base_url: String,
    /// Maximum accepted photo size in bytes.
    pub max_photo_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                                          |
    /// |-------------------------|--------------------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                                        |
    /// | `PORT`                  | `3000`                                           |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`                          |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                             |
    /// | `PHOTO_STORAGE_DIR`     | `storage/passport-photos`                        |
    /// | `PHOTO_PUBLIC_BASE_URL` | `http://localhost:{PORT}/storage/passport-photos`|
    /// | `MAX_PHOTO_BYTES`       | `10485760`                                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = parse_env("PORT", 3000)?;

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = parse_env("REQUEST_TIMEOUT_SECS", 30)?;

        let photo_storage_dir = std::env::var("PHOTO_STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("storage").join(PHOTO_BUCKET));

        let photo_public_base_url = std::env::var("PHOTO_PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{port}/storage/{PHOTO_BUCKET}"));

        let max_photo_bytes: usize = parse_env("MAX_PHOTO_BYTES", DEFAULT_MAX_PHOTO_BYTES)?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            photo_storage_dir,
            photo_public_base_url,
            max_photo_bytes,
        })
    }
}

/// Read `key` from the environment, falling back to `default` when unset.
fn parse_env<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError { key, value }),
        Err(_) => Ok(default),
    }
}
