//! Search query construction from player media identifiers
//!
//! Movies arrive as `tt1234567`, episodes as `tt1234567:1:2`.

/// Query text sent to the upstream search page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Build the query for a raw `<mediaId>[:<season>:<episode>]` identifier.
    ///
    /// Season and episode are appended as ` SxxEyy` only when both are present
    /// and purely decimal; anything else degrades to the bare media id.
    pub fn from_media_id(raw: &str) -> Self {
        let mut parts = raw.split(':');
        let media_id = parts.next().unwrap_or_default();
        let season = parts.next();
        let episode = parts.next();

        match (season, episode) {
            (Some(season), Some(episode)) if is_decimal(season) && is_decimal(episode) => {
                Self(format!("{} S{:0>2}E{:0>2}", media_id, season, episode))
            }
            _ => Self(media_id.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form for the `prijevod` query parameter
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
