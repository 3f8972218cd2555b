//! Prometheus counters for the subtitle pipeline, exported at `/metrics`

use lazy_static::lazy_static;
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

lazy_static! {
    pub static ref SEARCHES: IntCounter = register_int_counter!(
        "subtitle_searches_total",
        "Subtitle searches issued against the upstream site"
    )
    .unwrap();

    pub static ref SEARCH_FAILURES: IntCounter = register_int_counter!(
        "subtitle_search_failures_total",
        "Searches that returned no listing (network or HTTP failure)"
    )
    .unwrap();

    pub static ref CANDIDATES_DROPPED: IntCounterVec = register_int_counter_vec!(
        "subtitle_candidates_dropped_total",
        "Search entries dropped before reaching the response",
        &["reason"]
    )
    .unwrap();

    pub static ref SUBTITLES_SERVED: IntCounter = register_int_counter!(
        "subtitles_served_total",
        "Subtitles returned to players"
    )
    .unwrap();

    pub static ref LANGUAGE_FALLBACKS: IntCounter = register_int_counter!(
        "subtitle_language_fallbacks_total",
        "Flag icons that matched no known language"
    )
    .unwrap();
}
