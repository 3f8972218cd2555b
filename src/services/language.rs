use tracing::warn;

use crate::models::Language;
use crate::services::metrics;

/// Flag icon file names used by the listing page
const FLAG_ICONS: [(&str, Language); 6] = [
    ("/hr3.png", Language::Hr),
    ("/rs3.png", Language::Sr),
    ("/ba3.png", Language::Bs),
    ("/en3.png", Language::En),
    ("/si3.png", Language::Sl),
    ("/mk3.png", Language::Mk),
];

/// Map a flag image `src` to a subtitle language.
/// Missing or unknown icons fall back to Croatian.
pub fn language_from_flag(src: Option<&str>) -> Language {
    let Some(src) = src.filter(|s| !s.is_empty()) else {
        return Language::default();
    };

    let lower = src.to_lowercase();
    if let Some((_, language)) = FLAG_ICONS.iter().find(|(icon, _)| lower.contains(icon)) {
        return *language;
    }

    warn!(flag = %src, "Unrecognized flag image, defaulting to hr");
    metrics::LANGUAGE_FALLBACKS.inc();
    Language::default()
}
