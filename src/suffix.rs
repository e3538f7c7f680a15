//! Mix descriptor and suffix helpers for titles.
//!
//! These turn vendor-style dash suffixes into parenthesized groups, wrap
//! loose trailing text, and drop BPM/key annotations from the end.

use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// REGEX PATTERNS
// ============================================================================

/// A group that already holds a dash: "(Intro - Clean)", "(Re-Edit)".
static DASH_IN_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^()]+-[^()]+\)").unwrap());

static CLEAN_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s*-\s*clean$").unwrap());

static DIRTY_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s*-\s*dirty$").unwrap());

/// BPM patterns, most specific first. All are anchored at the end.
pub static BPM_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        // Plain BPM or BPM with a Camelot "a" key: "(128)", "(95.5)", "(130 11a)"
        Regex::new(r" \((\d{2,3}(\.\d)?|\d{2,3} \d{1,2}a)\)$").unwrap(),
        // Short BPM or key with a letter: "(89 11b)", "(8A)"
        Regex::new(r"\s\(\d{1,2}(?:\s\d{1,2})?\s?[a-zA-Z]\)$").unwrap(),
        // BPM with a key name: "(132 Ebm)", "(124 Am)"
        Regex::new(r"\s\(\d{2,3}\s?[a-zA-Z]{2,3}\)$").unwrap(),
    ]
});

/// Real titles that end with something shaped like a BPM/key group.
const BPM_LOOKALIKE_SUFFIXES: [&str; 1] = [" (4U)"];

// ============================================================================
// MIX DESCRIPTORS
// ============================================================================

/// Wrap the text after the first " - " in parentheses.
///
/// The closing parenthesis goes before the next group if there is one,
/// otherwise at the end. Titles that already have a group containing a
/// dash are left alone.
///
/// "Azn Danza - Myles Club Edit" → "Azn Danza (Myles Club Edit)"
/// "Title - Mix Name (Clean)" → "Title (Mix Name) (Clean)"
pub fn use_parentheses_for_mix(title: &str) -> String {
    let Some(index) = title.find(" - ") else {
        return title.to_string();
    };
    if DASH_IN_GROUP.is_match(title) {
        return title.to_string();
    }

    let (head, tail) = title.split_at(index);
    let tail = if tail.contains(" (") {
        tail.replacen(" (", ") (", 1)
    } else {
        format!("{tail})")
    };

    format!("{head}{tail}").replacen(" - ", " (", 1)
}

/// "Song - Clean" → "Song (Clean)"
pub fn replace_clean_suffix(title: &str) -> String {
    CLEAN_SUFFIX.replace(title, " (Clean)").into_owned()
}

/// "Song - dirty" → "Song (Dirty)"
pub fn replace_dirty_suffix(title: &str) -> String {
    DIRTY_SUFFIX.replace(title, " (Dirty)").into_owned()
}

/// Put loose text that follows the last group into its own group.
///
/// Only applies when the title neither starts with `(` nor ends with `)`,
/// and no `(` follows the group the text comes after.
///
/// "Hello (World) Test" → "Hello (World) (Test)"
pub fn wrap_text_after_parentheses(text: &str) -> String {
    if text.ends_with(')') || text.starts_with('(') {
        return text.to_string();
    }

    for (open, _) in text.match_indices('(') {
        let Some(close) = text[open..].find(')').map(|i| open + i) else {
            break;
        };

        let rest = &text[close + 1..];
        if rest.contains('(') {
            continue;
        }

        let mut chars = rest.chars();
        if !chars.next().is_some_and(char::is_whitespace) {
            continue;
        }

        let trailing = chars.as_str();
        if trailing.is_empty() {
            continue;
        }

        return format!("{} ({})", &text[..=close], trailing);
    }

    text.to_string()
}

// ============================================================================
// SUFFIX REMOVAL
// ============================================================================

/// Remove a trailing BPM and key group.
/// "Right Now (Facetyme Remix) (132 Ebm)" → "Right Now (Facetyme Remix)"
pub fn remove_bpm_in_parentheses_from_end(text: &str) -> String {
    if BPM_LOOKALIKE_SUFFIXES.iter().any(|suffix| text.ends_with(suffix)) {
        return text.to_string();
    }

    let [plain, with_key, with_letters] = &*BPM_PATTERNS;
    let mut result = plain.replace(text, "").into_owned();
    result = with_key.replace(&result, "").into_owned();

    // "(89 Mix)" is a mix name, not a key
    if !result.to_lowercase().ends_with(" mix)") {
        result = with_letters.replace(&result, "").into_owned();
    }

    result
}

/// Drop a single trailing period.
pub fn remove_trailing_period(title: &str) -> String {
    title.strip_suffix('.').unwrap_or(title).to_string()
}

// ============================================================================
// TESTS
// ============================================================================
