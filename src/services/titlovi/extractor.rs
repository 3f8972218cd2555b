//! Search listing parser
//!
//! The results page lists each subtitle as
//!
//! ```text
//! <ul class="titlovi">
//!   <li class="subtitleContainer">
//!     <h3><a href="/titlovi/breaking-bad-123456/">Breaking Bad</a></h3>
//!     <h4>Breaking.Bad.S01E02.720p <i>(2008)</i></h4>
//!     <img class="lang" src="/img/flags/hr3.png">
//!     <span class="fps">fps: 23.976</span>
//!     <span class="downloads">1234</span>
//!     <span class="dodao"><a href="...">uploader</a></span>
//!   </li>
//! </ul>
//! ```

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::models::CandidateRecord;
use crate::services::metrics;

lazy_static! {
    static ref ENTRY: Selector = Selector::parse("ul.titlovi > li.subtitleContainer").unwrap();
    static ref TITLE_LINK: Selector = Selector::parse("h3 a").unwrap();
    static ref RELEASE: Selector = Selector::parse("h4").unwrap();
    static ref FLAG: Selector = Selector::parse("img.lang").unwrap();
    static ref FPS: Selector = Selector::parse(".fps").unwrap();
    static ref DOWNLOADS: Selector = Selector::parse(".downloads").unwrap();
    static ref UPLOADER: Selector = Selector::parse(".dodao a").unwrap();
}

/// Parse every result entry of a search page, in document order.
/// Entries without a usable page link are skipped.
pub fn parse_search_results(html: &str) -> Vec<CandidateRecord> {
    let document = Html::parse_document(html);

    document
        .select(&ENTRY)
        .filter_map(|entry| {
            let candidate = parse_entry(entry);
            if candidate.is_none() {
                debug!("Skipping result entry without media id");
                metrics::CANDIDATES_DROPPED
                    .with_label_values(&["malformed_result"])
                    .inc();
            }
            candidate
        })
        .collect()
}

fn parse_entry(entry: ElementRef<'_>) -> Option<CandidateRecord> {
    let link = entry.select(&TITLE_LINK).next()?;
    let media_id = media_id_from_href(link.value().attr("href")?)?;

    let release_info = entry
        .select(&RELEASE)
        .next()
        .map(own_text)
        .unwrap_or_default();

    let flag_src = entry
        .select(&FLAG)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(str::to_string);

    let fps = select_text(entry, &FPS).replacen("fps:", "", 1).trim().to_string();

    Some(CandidateRecord {
        media_id,
        title: element_text(link),
        release_info,
        flag_src,
        fps,
        downloads: select_text(entry, &DOWNLOADS),
        uploader: select_text(entry, &UPLOADER),
    })
}

/// Last `-` separated segment of the link, without the trailing slash:
/// `/titlovi/breaking-bad-123456/` -> `123456`
pub fn media_id_from_href(href: &str) -> Option<String> {
    let id = href.rsplit('-').next()?.trim_end_matches('/');
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Trimmed text of all matches, concatenated
fn select_text(entry: ElementRef<'_>, selector: &Selector) -> String {
    entry
        .select(selector)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Direct text children only, skipping nested markup such as `<i>(2008)</i>`
fn own_text(el: ElementRef<'_>) -> String {
    let mut text = String::new();
    for child in el.children() {
        if let Some(t) = child.value().as_text() {
            text.push_str(&t.text);
        }
    }
    text.trim().to_string()
}
