use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub app_env: String,
    pub base_url: String,

    // Upstream site
    pub upstream_url: String,
    pub user_agent: String,
    pub upstream_cookie: String,
    pub fetch_timeout_ms: u64,
    pub max_redirects: usize,
    pub accept_invalid_certs: bool,

    // Pipeline
    pub min_subtitle_bytes: usize,
    pub max_subtitle_bytes: usize,
    pub download_concurrency: usize,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            // Server
            port: env::var("PORT")
                .unwrap_or_else(|_| "7000".to_string())
                .parse()
                .unwrap_or(7000),
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            base_url: env::var("BASE_URL")
                .unwrap_or_else(|_| "http://localhost:7000".to_string()),

            // Upstream site
            upstream_url: env::var("UPSTREAM_URL")
                .unwrap_or_else(|_| "https://titlovi.com".to_string()),

            // Desktop browser UA, the site serves a stripped page to unknown agents
            user_agent: env::var("USER_AGENT").unwrap_or_else(|_| {
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string()
            }),
            upstream_cookie: env::var("UPSTREAM_COOKIE").unwrap_or_else(|_| "sid=1".to_string()),

            fetch_timeout_ms: env::var("FETCH_TIMEOUT_MS")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()
                .unwrap_or(10_000), // 10 seconds

            max_redirects: env::var("MAX_REDIRECTS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),

            accept_invalid_certs: env::var("ACCEPT_INVALID_CERTS")
                .map(|v| parse_bool(&v))
                .unwrap_or(true),

            // Pipeline
            min_subtitle_bytes: env::var("MIN_SUBTITLE_BYTES")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .unwrap_or(100),

            // Applies to the download body and to the unpacked subtitle
            max_subtitle_bytes: env::var("MAX_SUBTITLE_BYTES")
                .unwrap_or_else(|_| "5242880".to_string())
                .parse()
                .unwrap_or(5 * 1024 * 1024), // 5 MiB

            download_concurrency: env::var("DOWNLOAD_CONCURRENCY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(4),
        }
    }
}

fn parse_bool(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
