/// Engine configuration
///
/// # Environment variables
///
/// All settings can be overridden through environment variables:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/pearl | Work directory holding the store files |
/// | LOG_LEVEL | info | Tracing filter level |
/// | LOG_DIR | (unset) | Daily-rolling log file directory |
/// | RECOMMENDER_URL | http://localhost:3400 | Recommendation collaborator base URL |
/// | RECOMMENDER_TIMEOUT_MS | 30000 | Collaborator request timeout (ms) |
/// | ENVIRONMENT | development | development \| staging \| production |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/pearl LOG_LEVEL=debug cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory for the embedded store and other files
    pub work_dir: String,
    /// Tracing filter level
    pub log_level: String,
    /// Optional log file directory (daily rolling)
    pub log_dir: Option<String>,
    /// Recommendation collaborator base URL
    pub recommender_url: String,
    /// Recommendation request timeout (milliseconds)
    pub recommender_timeout_ms: u64,
    /// Running environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/pearl".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            recommender_url: std::env::var("RECOMMENDER_URL")
                .unwrap_or_else(|_| "http://localhost:3400".into()),
            recommender_timeout_ms: std::env::var("RECOMMENDER_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30_000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: "/var/lib/pearl".into(),
            log_level: "info".into(),
            log_dir: None,
            recommender_url: "http://localhost:3400".into(),
            recommender_timeout_ms: 30_000,
            environment: "development".into(),
        }
    }
}
