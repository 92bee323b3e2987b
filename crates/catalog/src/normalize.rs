use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Canonical comparison form: lower-cased, decomposed, combining marks
/// removed. Absent input normalizes to the empty string.
pub fn normalize(text: Option<&str>) -> String {
    text.map(normalize_str).unwrap_or_default()
}

pub fn normalize_str(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
