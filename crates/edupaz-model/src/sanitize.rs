//! Filesystem-safe tokens from free text.

use crate::text::is_whitespace;

/// Collapse every whitespace run into `_`, then drop any character outside
/// `[A-Za-z0-9_-]`.
///
/// Non-ASCII letters are dropped rather than transliterated, so `"Bogotá"`
/// becomes `"Bogot"`.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for ch in text.chars() {
        if is_whitespace(ch) {
            if !in_space {
                out.push('_');
                in_space = true;
            }
            continue;
        }
        in_space = false;
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            out.push(ch);
        }
    }
    out
}
