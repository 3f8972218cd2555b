//! Failure reasons for the titlovi.com pipeline
//!
//! None of these reach the player: they are logged, counted and the affected
//! entry (or whole search) is dropped.

use thiserror::Error;

/// Why a single candidate produced no subtitle
#[derive(Debug, Error)]
pub enum AcquireError {
    /// Transport failure or timeout
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("bad status code: {0}")]
    Status(u16),

    /// Body below the threshold, usually an error or placeholder page
    #[error("subtitle content too small: {0} bytes")]
    TooSmall(usize),

    #[error("subtitle content exceeds {0} bytes")]
    TooLarge(usize),

    #[error("unsupported content type: {0}")]
    UnsupportedContent(String),

    #[error("archive has no .srt or .sub entry")]
    NoSubtitleEntry,

    #[error("invalid archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("failed to read archive entry: {0}")]
    Io(#[from] std::io::Error),
}

impl AcquireError {
    /// Stable label for logs and metrics
    pub fn reason(&self) -> &'static str {
        match self {
            AcquireError::Network(_) | AcquireError::Status(_) => "upstream_unavailable",
            AcquireError::TooSmall(_)
            | AcquireError::TooLarge(_)
            | AcquireError::UnsupportedContent(_)
            | AcquireError::NoSubtitleEntry
            | AcquireError::Archive(_)
            | AcquireError::Io(_) => "unsupported_content",
        }
    }
}

/// Why the search listing itself could not be fetched
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to create HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error: {0}")]
    Http(u16),
}
