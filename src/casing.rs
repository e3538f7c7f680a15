//! Case classification and re-casing for tag fields.

/// Fields longer than this that are entirely uppercase get title-cased.
/// Shorter ones are left alone since they are usually acronyms ("ACA", "DJ AM").
pub const UPPERCASE_RECASE_MIN_CHARS: usize = 12;

/// True when the text has at least one cased character and none of them are
/// uppercase.
pub fn is_all_lowercase(text: &str) -> bool {
    text.chars().any(char::is_lowercase) && !text.chars().any(char::is_uppercase)
}

/// True when the text has at least one cased character and none of them are
/// lowercase.
pub fn is_all_uppercase(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}

/// Case-insensitive substring check.
pub fn contains_ignore_case(text: &str, needle: &str) -> bool {
    text.to_lowercase().contains(&needle.to_lowercase())
}

/// Title-case a field that is all lowercase, or all uppercase and long.
/// Mixed-case fields are returned unchanged.
///
/// "daft punk" → "Daft Punk"
pub fn recase(text: &str) -> String {
    if is_all_lowercase(text) {
        titlecase::titlecase(text)
    } else if is_all_uppercase(text) && text.chars().count() > UPPERCASE_RECASE_MIN_CHARS {
        // Uppercase words are kept as-is by the title-caser
        titlecase::titlecase(&text.to_lowercase())
    } else {
        text.to_string()
    }
}

// ============================================================================
// TESTS
// ============================================================================
