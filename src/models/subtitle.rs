use serde::Serialize;

/// MIME type attached to every served subtitle payload
pub const SUBRIP_MIME: &str = "application/x-subrip";

/// Subtitle language as advertised by the upstream flag icons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Hr,
    Sr,
    Bs,
    En,
    Sl,
    Mk,
}

impl Default for Language {
    fn default() -> Self {
        Self::Hr
    }
}

impl Language {
    /// Two-letter code sent to the player
    pub fn code(&self) -> &'static str {
        match self {
            Language::Hr => "hr",
            Language::Sr => "sr",
            Language::Bs => "bs",
            Language::En => "en",
            Language::Sl => "sl",
            Language::Mk => "mk",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One search-result entry as scraped from the listing page, before download.
/// Every text field is raw, untrusted page content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateRecord {
    pub media_id: String,
    pub title: String,
    pub release_info: String,
    pub flag_src: Option<String>,
    pub fps: String,
    pub downloads: String,
    pub uploader: String,
}

/// Content-type tagged base64 payload, rendered as a `data:` URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub mime: &'static str,
    pub base64: String,
}

impl DataUri {
    pub fn subrip(base64: String) -> Self {
        Self {
            mime: SUBRIP_MIME,
            base64,
        }
    }
}

impl std::fmt::Display for DataUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "data:{};base64,{}", self.mime, self.base64)
    }
}

/// Fully enriched subtitle: downloaded, decoded, normalized and tagged
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleRecord {
    pub id: String,
    pub title: String,
    pub release_info: String,
    /// Upstream fps text, `None` when the site shows `N/A` or nothing
    pub fps: Option<String>,
    pub language: Language,
    pub downloads: u64,
    pub uploader: String,
    pub content: DataUri,
}

/// Subtitle entry in the add-on protocol response
#[derive(Debug, Clone, Serialize)]
pub struct AddonSubtitle {
    pub id: String,
    pub url: String,
    pub lang: String,
    pub name: String,
}

/// Body of `GET /subtitles/...`
#[derive(Debug, Clone, Default, Serialize)]
pub struct SubtitlesResponse {
    pub subtitles: Vec<AddonSubtitle>,
}
