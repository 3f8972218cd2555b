//! ASCII-safe text for titles, release names and uploader names

use unicode_normalization::UnicodeNormalization;

/// Strip diacritics and transliterate the Balkan letters that survive
/// decomposition (`đ` has no decomposed form).
pub fn clean_text(text: &str) -> String {
    let stripped: String = text
        .nfkd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect();

    let mut out = String::with_capacity(stripped.len());
    for c in stripped.chars() {
        match c {
            'đ' => out.push_str("dj"),
            'Đ' => out.push_str("Dj"),
            'ć' | 'č' => out.push('c'),
            'Ć' | 'Č' => out.push('C'),
            'š' => out.push('s'),
            'Š' => out.push('S'),
            'ž' => out.push('z'),
            'Ž' => out.push('Z'),
            other => out.push(other),
        }
    }
    out
}
