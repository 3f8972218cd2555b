//! Character encoding detection for downloaded subtitle files
//!
//! Subtitles on the site are mostly authored for Croatian, Serbian, Bosnian,
//! Slovenian and Macedonian audiences. Files without a BOM that do not look like
//! UTF-8 are assumed to be Windows-1250. There is no verification step for that
//! fallback: a file in any other legacy code page will be mis-decoded.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1250};

/// Letters whose presence in a UTF-8 reading marks the file as UTF-8
const UTF8_MARKERS: [char; 3] = ['ž', 'š', 'č'];

/// Pick the encoding of a raw subtitle buffer.
///
/// Order: byte-order mark, then UTF-8 content sniffing, then Windows-1250.
pub fn detect_encoding(data: &[u8]) -> &'static Encoding {
    if data.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return UTF_8;
    }
    if data.starts_with(&[0xFE, 0xFF]) {
        return UTF_16BE;
    }
    if data.starts_with(&[0xFF, 0xFE]) {
        return UTF_16LE;
    }

    let as_utf8 = String::from_utf8_lossy(data);
    if as_utf8.contains(&UTF8_MARKERS[..]) {
        return UTF_8;
    }

    WINDOWS_1250
}

/// Decode a subtitle buffer into text. Never fails: malformed sequences
/// become U+FFFD and a leading BOM is dropped.
pub fn decode_subtitle(data: &[u8]) -> String {
    let encoding = detect_encoding(data);
    let (text, actual, had_errors) = encoding.decode(data);
    if had_errors {
        tracing::debug!(encoding = actual.name(), "Subtitle decoded with replacement characters");
    }
    text.into_owned()
}
