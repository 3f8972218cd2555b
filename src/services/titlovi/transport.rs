//! Outbound HTTP configuration for titlovi.com
//!
//! Built once from [`Config`] and handed to [`TitloviClient`](super::TitloviClient);
//! nothing here changes after startup.

use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::{redirect, Client};
use std::time::Duration;

use crate::config::Config;

#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Site origin, also sent as `Referer` on downloads
    pub origin: String,
    pub user_agent: String,
    pub cookie: String,
    pub timeout: Duration,
    pub max_redirects: usize,
    pub accept_invalid_certs: bool,
}

impl TransportConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            origin: config.upstream_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
            cookie: config.upstream_cookie.clone(),
            timeout: Duration::from_millis(config.fetch_timeout_ms),
            max_redirects: config.max_redirects,
            accept_invalid_certs: config.accept_invalid_certs,
        }
    }

    /// Build the shared HTTP client with the fixed headers applied
    pub fn build_client(&self) -> Result<Client, reqwest::Error> {
        let mut headers = HeaderMap::new();
        // Cookie values from env can hold anything; a bad one is skipped
        match HeaderValue::from_str(&self.cookie) {
            Ok(value) => {
                headers.insert(COOKIE, value);
            }
            Err(e) => tracing::warn!("Ignoring invalid upstream cookie: {}", e),
        }

        Client::builder()
            .user_agent(&self.user_agent)
            .default_headers(headers)
            .timeout(self.timeout)
            .redirect(redirect::Policy::limited(self.max_redirects))
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .gzip(true)
            .build()
    }

    /// `<origin>/titlovi/?prijevod=<encoded query>`
    pub fn search_url(&self, encoded_query: &str) -> String {
        format!("{}/titlovi/?prijevod={}", self.origin, encoded_query)
    }

    /// `<origin>/download/?type=1&mediaid=<id>`, with the scraped id percent-encoded
    pub fn download_url(&self, media_id: &str) -> String {
        format!(
            "{}/download/?type=1&mediaid={}",
            self.origin,
            urlencoding::encode(media_id)
        )
    }
}
