//! Request-level entry point of the subtitle pipeline
//!
//! media id -> query -> search + downloads -> rank -> player entries.
//! Every failure ends here as a log line and an empty list.

use tracing::{error, info};

use crate::config::Config;
use crate::models::AddonSubtitle;
use crate::services::metrics;
use crate::services::query::SearchQuery;
use crate::services::ranker::format_results;
use crate::services::titlovi::{PayloadLimits, SearchError, TitloviClient, TransportConfig};

pub struct SubtitleService {
    client: TitloviClient,
}

impl SubtitleService {
    pub fn new(client: TitloviClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &Config) -> Result<Self, SearchError> {
        let client = TitloviClient::new(
            TransportConfig::from_config(config),
            PayloadLimits {
                min_bytes: config.min_subtitle_bytes,
                max_bytes: config.max_subtitle_bytes,
            },
            config.download_concurrency,
        )?;
        Ok(Self::new(client))
    }

    pub fn client(&self) -> &TitloviClient {
        &self.client
    }

    /// Subtitles for `<mediaId>` or `<mediaId>:<season>:<episode>`, most
    /// downloaded first. Never fails: an unreachable site yields no subtitles.
    pub async fn find_subtitles(&self, media_id: &str) -> Vec<AddonSubtitle> {
        let query = SearchQuery::from_media_id(media_id);
        metrics::SEARCHES.inc();

        let records = match self.client.search(&query).await {
            Ok(records) => records,
            Err(e) => {
                error!(query = %query, "Subtitle search failed: {}", e);
                metrics::SEARCH_FAILURES.inc();
                return Vec::new();
            }
        };

        let subtitles = format_results(records);
        metrics::SUBTITLES_SERVED.inc_by(subtitles.len() as u64);
        info!(query = %query, found = subtitles.len(), "Subtitle search completed");

        subtitles
    }
}
