use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "./serviceRequests.db")
    pub db_file_path: String,
    /// Directory receiving uploaded resumes (default: "uploads")
    pub upload_dir: String,
    /// Maximum request body size for multipart submissions (default: 10 MiB)
    pub max_upload_bytes: usize,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DB_FILE_PATH` - SQLite database path (default: "./serviceRequests.db")
    /// - `UPLOAD_DIR` - Upload directory (default: "uploads")
    /// - `MAX_UPLOAD_BYTES` - Multipart body limit in bytes (default: 10,485,760)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            db_file_path: env::var("DB_FILE_PATH")
                .unwrap_or_else(|_| "./serviceRequests.db".to_string()),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10 * 1024 * 1024),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}
