//! Username/email normalization.

/// Fallback when nothing alphanumeric survives normalization.
const EMPTY_SLUG: &str = "user";

/// Normalize `input` into a slug.
///
/// ASCII letters and digits are kept (lower-cased); every run of other
/// characters becomes a single `separator`. The result has no leading or
/// trailing separator and is at most `max_len` characters long.
pub fn slugify(input: &str, separator: char, max_len: usize) -> String {
    let mut slug = String::with_capacity(input.len().min(max_len));
    let mut pending_separator = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(separator);
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    // All chars are ASCII here, so byte length equals char count.
    if slug.len() > max_len {
        slug.truncate(max_len);
    }
    let trimmed = slug.trim_end_matches(separator);

    if trimmed.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        trimmed.to_string()
    }
}
