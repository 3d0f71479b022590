use std::path::PathBuf;

use folio_core::catalog::{IdStrategy, ReorderMode};
use folio_core::upload::DEFAULT_MAX_UPLOAD_BYTES;

use crate::mail::EmailConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
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
    /// Directory holding `projects.json` (default: `data`).
    pub data_dir: PathBuf,
    /// Id assignment rule for new projects.
    pub id_strategy: IdStrategy,
    /// Handling of reorder requests that omit stored ids.
    pub reorder_mode: ReorderMode,
    /// When set, mutating routes require `Authorization: Bearer <token>`.
    pub admin_token: Option<String>,
    pub upload: UploadConfig,
    /// SMTP settings; `None` disables the contact form.
    pub email: Option<EmailConfig>,
}

/// Where uploaded project images go and how they are addressed.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub dir: PathBuf,
    /// URL path the stored files are served under.
    pub url_prefix: String,
    pub max_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATA_DIR`             | `data`                     |
    /// | `PROJECT_ID_STRATEGY`  | `length`                   |
    /// | `REORDER_MODE`         | `lenient`                  |
    /// | `ADMIN_TOKEN`          | unset                      |
    /// | `UPLOAD_DIR`           | `public/project-images`    |
    /// | `UPLOAD_URL_PREFIX`    | `/project-images`          |
    /// | `UPLOAD_MAX_BYTES`     | `20971520`                 |
    ///
    /// SMTP variables are documented on [`EmailConfig::from_env`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    ///
    /// Panics on unparseable values so misconfiguration fails at startup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let host = var("HOST", "0.0.0.0");

        let port: u16 = var("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let data_dir = PathBuf::from(var("DATA_DIR", "data"));

        let id_strategy: IdStrategy = var("PROJECT_ID_STRATEGY", "length")
            .parse()
            .unwrap_or_else(|e| panic!("PROJECT_ID_STRATEGY: {e}"));

        let reorder_mode: ReorderMode = var("REORDER_MODE", "lenient")
            .parse()
            .unwrap_or_else(|e| panic!("REORDER_MODE: {e}"));

        let admin_token = lookup("ADMIN_TOKEN")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let upload = UploadConfig {
            dir: PathBuf::from(var("UPLOAD_DIR", "public/project-images")),
            url_prefix: var("UPLOAD_URL_PREFIX", "/project-images"),
            max_bytes: lookup("UPLOAD_MAX_BYTES")
                .map(|v| v.parse().expect("UPLOAD_MAX_BYTES must be a valid usize"))
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        };

        let email = EmailConfig::from_lookup(&lookup);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            data_dir,
            id_strategy,
            reorder_mode,
            admin_token,
            upload,
            email,
        }
    }
}
