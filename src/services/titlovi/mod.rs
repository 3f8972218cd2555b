//! titlovi.com integration
//!
//! - **Transport**: immutable outbound HTTP settings (UA, cookie, TLS, redirects)
//! - **Extractor**: parses the search results page into candidates
//! - **Acquirer**: downloads a candidate, unpacks ZIP or text payloads and
//!   converts the subtitle to UTF-8
//! - **Client**: runs a search end to end with bounded download concurrency
//!
//! ```text
//! GET /titlovi/?prijevod=<query>           -> listing HTML
//! GET /download/?type=1&mediaid=<id>       -> ZIP archive or .srt/.sub file
//! ```

pub mod acquirer;
pub mod client;
pub mod error;
pub mod extractor;
pub mod transport;

#[cfg(test)]
pub mod mock;

pub use acquirer::PayloadLimits;
pub use client::TitloviClient;
pub use error::SearchError;
pub use transport::TransportConfig;
