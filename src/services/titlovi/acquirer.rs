//! Subtitle download and payload unpacking
//!
//! The download endpoint answers with either a ZIP archive or the bare subtitle
//! file, and the headers are the only hint about which one it is.

use base64::{engine::general_purpose::STANDARD, Engine};
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::header::{HeaderMap, CONTENT_DISPOSITION, CONTENT_TYPE, REFERER};
use reqwest::{Client, StatusCode};
use std::io::{Cursor, Read};
use zip::ZipArchive;

use super::error::AcquireError;
use crate::models::DataUri;
use crate::services::encoding::decode_subtitle;

lazy_static! {
    /// `filename="x.srt"`, `filename=x.zip` or `filename*=UTF-8''x.sub`
    static ref FILENAME_REGEX: Regex =
        Regex::new(r#"(?i)filename\*?\s*=\s*(?:[\w-]+'[\w-]*')?"?([^";]+)"?"#).unwrap();
}

/// Accepted size range of a subtitle payload, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadLimits {
    /// Anything smaller is an error or placeholder page
    pub min_bytes: usize,
    /// Caps both the downloaded body and the unpacked archive entry
    pub max_bytes: usize,
}

/// How a download response body should be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Archive,
    Text,
}

/// Decide the payload kind from `Content-Type` and `Content-Disposition`.
/// Archive signals win over text signals; `None` means unsupported.
pub fn classify_payload(content_type: Option<&str>, disposition: Option<&str>) -> Option<PayloadKind> {
    let content_type = content_type.unwrap_or_default().to_lowercase();
    let filename = disposition.map(disposition_filename).unwrap_or_default();

    if content_type.contains("zip")
        || content_type.contains("octet-stream")
        || filename.ends_with(".zip")
    {
        Some(PayloadKind::Archive)
    } else if content_type.contains("text") || is_subtitle_name(&filename) {
        Some(PayloadKind::Text)
    } else {
        None
    }
}

/// Lowercased file name announced by a `Content-Disposition` header, or the
/// whole header when it carries no `filename` parameter
fn disposition_filename(header: &str) -> String {
    FILENAME_REGEX
        .captures(header)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(header)
        .trim()
        .to_lowercase()
}

fn is_subtitle_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(".srt") || lower.ends_with(".sub")
}

/// Raw bytes of the first `.srt`/`.sub` file inside a ZIP archive.
/// The declared entry size is not trusted; at most `max_bytes` are inflated.
pub fn extract_from_archive(data: &[u8], max_bytes: usize) -> Result<Vec<u8>, AcquireError> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;

    for i in 0..archive.len() {
        let entry = archive.by_index(i)?;
        if !entry.is_file() || !is_subtitle_name(entry.name()) {
            continue;
        }

        tracing::debug!(entry = entry.name(), "Found subtitle in archive");
        let mut buf = Vec::new();
        entry.take(max_bytes as u64 + 1).read_to_end(&mut buf)?;
        if buf.len() > max_bytes {
            return Err(AcquireError::TooLarge(max_bytes));
        }
        return Ok(buf);
    }

    Err(AcquireError::NoSubtitleEntry)
}

/// Pull the subtitle file bytes out of a download response body
pub fn extract_subtitle_bytes(
    content_type: Option<&str>,
    disposition: Option<&str>,
    body: &[u8],
    max_bytes: usize,
) -> Result<Vec<u8>, AcquireError> {
    let subtitle = match classify_payload(content_type, disposition) {
        Some(PayloadKind::Archive) => extract_from_archive(body, max_bytes)?,
        Some(PayloadKind::Text) => body.to_vec(),
        None => {
            return Err(AcquireError::UnsupportedContent(
                content_type.unwrap_or("none").to_string(),
            ))
        }
    };

    if subtitle.is_empty() {
        return Err(AcquireError::TooSmall(0));
    }
    Ok(subtitle)
}

/// Decode a raw subtitle file and wrap it as a UTF-8 SubRip data URI
pub fn encode_subtitle(raw: &[u8]) -> DataUri {
    let text = decode_subtitle(raw);
    DataUri::subrip(STANDARD.encode(text.as_bytes()))
}

fn header_str(headers: &HeaderMap, name: reqwest::header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}

/// Download one subtitle and return it ready to serve.
///
/// Anything but a 200 with a body inside `limits` fails, as does a body that
/// is neither a readable archive nor text.
pub async fn download_subtitle(
    client: &Client,
    url: &str,
    referer: &str,
    limits: PayloadLimits,
) -> Result<DataUri, AcquireError> {
    let mut response = client.get(url).header(REFERER, referer).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(AcquireError::Status(status.as_u16()));
    }

    if let Some(len) = response.content_length() {
        if len > limits.max_bytes as u64 {
            return Err(AcquireError::TooLarge(limits.max_bytes));
        }
    }

    let content_type = header_str(response.headers(), CONTENT_TYPE);
    let disposition = header_str(response.headers(), CONTENT_DISPOSITION);

    // Chunked responses carry no length, so the cap is enforced while reading
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if body.len() + chunk.len() > limits.max_bytes {
            return Err(AcquireError::TooLarge(limits.max_bytes));
        }
        body.extend_from_slice(&chunk);
    }

    if body.len() < limits.min_bytes {
        return Err(AcquireError::TooSmall(body.len()));
    }

    let raw = extract_subtitle_bytes(
        content_type.as_deref(),
        disposition.as_deref(),
        &body,
        limits.max_bytes,
    )?;
    Ok(encode_subtitle(&raw))
}
