//! Ordering and display formatting of enriched subtitles

use crate::models::{AddonSubtitle, SubtitleRecord};
use crate::services::normalizer::clean_text;

/// Most downloaded first. The sort is stable, so equal counts keep the
/// order the site listed them in.
pub fn rank(mut records: Vec<SubtitleRecord>) -> Vec<SubtitleRecord> {
    records.sort_by(|a, b| b.downloads.cmp(&a.downloads));
    records
}

/// `title - release - [fps] - Upload: name - DL: n`, skipping empty parts
pub fn display_name(record: &SubtitleRecord) -> String {
    let fps = record
        .fps
        .as_deref()
        .map(|fps| format!("[{}]", fps))
        .unwrap_or_default();

    let parts = [
        record.title.clone(),
        record.release_info.clone(),
        fps,
        format!("Upload: {}", record.uploader),
        format!("DL: {}", record.downloads),
    ];

    let joined = parts
        .iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" - ");

    clean_text(&joined)
}

/// Convert a record into the player-facing entry
pub fn to_addon_subtitle(record: &SubtitleRecord) -> AddonSubtitle {
    AddonSubtitle {
        id: record.id.clone(),
        url: record.content.to_string(),
        lang: record.language.code().to_string(),
        name: display_name(record),
    }
}

/// Rank records and format them for the response
pub fn format_results(records: Vec<SubtitleRecord>) -> Vec<AddonSubtitle> {
    rank(records).iter().map(to_addon_subtitle).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DataUri, Language};

    fn record(id: &str, downloads: u64) -> SubtitleRecord {
        SubtitleRecord {
            id: id.to_string(),
            title: "Breaking Bad".to_string(),
            release_info: "S01E02 720p".to_string(),
            fps: Some("23.976".to_string()),
            language: Language::Sr,
            downloads,
            uploader: "Marko".to_string(),
            content: DataUri::subrip("MQ==".to_string()),
        }
    }

    #[test]
    fn test_rank_is_stable_descending() {
        let ranked = rank(vec![record("a", 5), record("b", 20), record("c", 5)]);
        let ids: Vec<_> = ranked.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn test_display_name_all_fields() {
        assert_eq!(
            display_name(&record("a", 1234)),
            "Breaking Bad - S01E02 720p - [23.976] - Upload: Marko - DL: 1234"
        );
    }

    #[test]
    fn test_display_name_skips_empty_fields() {
        let mut r = record("a", 0);
        r.release_info.clear();
        r.fps = None;
        assert_eq!(display_name(&r), "Breaking Bad - Upload: Marko - DL: 0");
    }

    #[test]
    fn test_display_name_is_normalized() {
        let mut r = record("a", 3);
        r.title = "Čuvar plaže".to_string();
        r.uploader = "Đuro".to_string();
        r.fps = None;
        r.release_info.clear();
        assert_eq!(display_name(&r), "Cuvar plaze - Upload: Djuro - DL: 3");
    }

    #[test]
    fn test_to_addon_subtitle() {
        let sub = to_addon_subtitle(&record("123456", 7));
        assert_eq!(sub.id, "123456");
        assert_eq!(sub.lang, "sr");
        assert_eq!(sub.url, "data:application/x-subrip;base64,MQ==");
    }
}
