//! Filename sanitization for exports.

use regex::Regex;

/// Maximum length of a sanitized filename stem.
pub const MAX_FILENAME_CHARS: usize = 100;

/// Stem used when sanitization leaves nothing behind.
pub const FALLBACK_FILENAME: &str = "blog_post";

/// Reduce arbitrary text to a safe filename stem.
///
/// Drops everything except ASCII letters, digits, underscores, whitespace and
/// hyphens, turns whitespace runs into `_`, squeezes hyphen runs and caps the
/// length. The result only contains `[A-Za-z0-9_-]` and may be empty.
pub fn sanitize_filename(name: &str) -> String {
    let disallowed = Regex::new(r"[^A-Za-z0-9_\s-]").unwrap();
    let whitespace = Regex::new(r"\s+").unwrap();
    let hyphens = Regex::new(r"-+").unwrap();

    let cleaned = disallowed.replace_all(name, "");
    let cleaned = whitespace.replace_all(&cleaned, "_");
    let cleaned = hyphens.replace_all(&cleaned, "-");

    cleaned
        .chars()
        .take(MAX_FILENAME_CHARS)
        .collect::<String>()
        .trim()
        .to_string()
}

/// Sanitize `title` and append `extension`, falling back to
/// [`FALLBACK_FILENAME`] when the title has no usable characters.
pub fn suggested_filename(title: &str, extension: &str) -> String {
    let stem = sanitize_filename(title);
    if stem.is_empty() {
        log::debug!("Title {:?} sanitized to nothing, using fallback", title);
        format!("{}.{}", FALLBACK_FILENAME, extension)
    } else {
        format!("{}.{}", stem, extension)
    }
}
