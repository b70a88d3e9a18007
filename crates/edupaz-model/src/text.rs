//! Whitespace rules shared by the readiness check and the sanitizer.

/// Whitespace as free-text form input treats it: Unicode `White_Space`
/// without U+0085 (NEXT LINE), plus U+FEFF (BOM).
pub fn is_whitespace(ch: char) -> bool {
    match ch {
        '\u{85}' => false,
        '\u{feff}' => true,
        _ => ch.is_whitespace(),
    }
}

/// Trim [`is_whitespace`] characters from both ends.
pub fn trim(text: &str) -> &str {
    text.trim_matches(is_whitespace)
}
