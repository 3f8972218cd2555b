//! titlovi.com client
//!
//! Fetches the search listing, then downloads every candidate with a bounded
//! number of requests in flight. Results come back in listing order.

use futures::stream::{self, StreamExt};
use reqwest::Client;
use tracing::{debug, info, warn};

use super::acquirer::{download_subtitle, PayloadLimits};
use super::error::{AcquireError, SearchError};
use super::extractor::parse_search_results;
use super::transport::TransportConfig;
use crate::models::{CandidateRecord, DataUri, SubtitleRecord};
use crate::services::language::language_from_flag;
use crate::services::metrics;
use crate::services::normalizer::clean_text;
use crate::services::query::SearchQuery;

pub struct TitloviClient {
    http: Client,
    transport: TransportConfig,
    limits: PayloadLimits,
    concurrency: usize,
}

impl TitloviClient {
    /// Create a client. `concurrency` is the number of downloads in flight per
    /// search; 1 downloads strictly one after another.
    pub fn new(
        transport: TransportConfig,
        limits: PayloadLimits,
        concurrency: usize,
    ) -> Result<Self, SearchError> {
        let http = transport.build_client().map_err(SearchError::Client)?;

        Ok(Self {
            http,
            transport,
            limits,
            concurrency: concurrency.max(1),
        })
    }

    pub fn transport(&self) -> &TransportConfig {
        &self.transport
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Fetch the raw search results page
    pub async fn fetch_listing(&self, query: &SearchQuery) -> Result<String, SearchError> {
        let url = self.transport.search_url(&query.encoded());
        debug!("Titlovi search request: {}", url);

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Http(status.as_u16()));
        }

        Ok(response.text().await?)
    }

    /// Search and enrich every result. Entries that fail to download are
    /// logged and left out; only the listing fetch itself can fail.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SubtitleRecord>, SearchError> {
        let html = self.fetch_listing(query).await?;
        let candidates = parse_search_results(&html);
        info!(query = %query, candidates = candidates.len(), "Parsed search listing");

        let outcomes: Vec<(String, Result<SubtitleRecord, AcquireError>)> =
            stream::iter(candidates)
                .map(|candidate| async move {
                    let media_id = candidate.media_id.clone();
                    (media_id, self.enrich(candidate).await)
                })
                .buffered(self.concurrency)
                .collect()
                .await;

        let mut records = Vec::with_capacity(outcomes.len());
        for (media_id, outcome) in outcomes {
            match outcome {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(media_id = %media_id, reason = e.reason(), "Dropping subtitle: {}", e);
                    metrics::CANDIDATES_DROPPED
                        .with_label_values(&[e.reason()])
                        .inc();
                }
            }
        }

        Ok(records)
    }

    /// Download one candidate's subtitle and attach its metadata
    pub async fn enrich(&self, candidate: CandidateRecord) -> Result<SubtitleRecord, AcquireError> {
        let url = self.transport.download_url(&candidate.media_id);
        debug!(media_id = %candidate.media_id, "Downloading subtitle");

        let content = download_subtitle(
            &self.http,
            &url,
            &self.transport.origin,
            self.limits,
        )
        .await?;

        Ok(build_record(candidate, content))
    }
}

/// Normalize a scraped candidate into a served record
pub fn build_record(candidate: CandidateRecord, content: DataUri) -> SubtitleRecord {
    SubtitleRecord {
        language: language_from_flag(candidate.flag_src.as_deref()),
        title: clean_text(&candidate.title),
        release_info: clean_text(&candidate.release_info),
        fps: parse_fps(&candidate.fps),
        downloads: parse_downloads(&candidate.downloads),
        uploader: clean_text(&candidate.uploader),
        id: candidate.media_id,
        content,
    }
}

fn parse_fps(text: &str) -> Option<String> {
    let fps = text.trim();
    if fps.is_empty() || fps == "N/A" {
        None
    } else {
        Some(fps.to_string())
    }
}

/// Leading integer of the download counter (`"1234 puta"` -> 1234), 0 otherwise
pub fn parse_downloads(text: &str) -> u64 {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
