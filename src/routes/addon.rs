//! Add-on protocol routes
//!
//! Players fetch `/manifest.json` once, then request
//! `/subtitles/{type}/{id}.json` (optionally with an extra-args segment) for
//! every title they open. Subtitles requests always answer 200.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::models::{Manifest, SubtitlesResponse};
use crate::AppState;

/// GET /manifest.json
pub async fn manifest() -> impl IntoResponse {
    Json(Manifest::default())
}

/// GET /subtitles/:type/:id
pub async fn subtitles(
    State(state): State<Arc<AppState>>,
    Path((media_type, id)): Path<(String, String)>,
) -> Json<SubtitlesResponse> {
    find(&state, &media_type, &id).await
}

/// GET /subtitles/:type/:id/:extra
///
/// Extra args (`videoHash=...&videoSize=...`) are not used for matching.
pub async fn subtitles_with_extra(
    State(state): State<Arc<AppState>>,
    Path((media_type, id, _extra)): Path<(String, String, String)>,
) -> Json<SubtitlesResponse> {
    find(&state, &media_type, &id).await
}

async fn find(state: &AppState, media_type: &str, id: &str) -> Json<SubtitlesResponse> {
    let media_id = id.strip_suffix(".json").unwrap_or(id);
    tracing::info!("Subtitles requested: {} {}", media_type, media_id);

    let subtitles = state.subtitles.find_subtitles(media_id).await;
    Json(SubtitlesResponse { subtitles })
}
