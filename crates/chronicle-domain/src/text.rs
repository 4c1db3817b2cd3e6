//! Small string helpers shared by the pipeline stages

/// The first `max` characters of `text`
///
/// Counts characters, not bytes, so multi-byte text is never split.
///
/// ```
/// use chronicle_domain::truncate_chars;
///
/// assert_eq!(truncate_chars("Liftoff!", 4), "Lift");
/// assert_eq!(truncate_chars("Ünïcode", 3), "Ünï");
/// assert_eq!(truncate_chars("short", 80), "short");
/// ```
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
