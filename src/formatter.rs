//! Tag and filename formatting for music tracks.
//!
//! `format_tags` runs the full artist/title pipeline. `format_filename` is an
//! independent character pass that makes already formatted tags safe to use
//! in a file name. Both are pure and never fail.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::brackets::{balance_parentheses, split_nested_parentheses};
use crate::casing::{contains_ignore_case, recase};
use crate::feat::{extract_feat_from_parentheses, move_feat_from_title_to_artist};
use crate::substitutes::{
    apply_rules, ARTIST_ALIASES, COMMON_SUBSTITUTES, FILENAME_SUBSTITUTES, NAME_SUBSTITUTES,
    REGEX_SUBSTITUTES, TITLE_SUBSTITUTES,
};
use crate::suffix::{
    remove_bpm_in_parentheses_from_end, remove_trailing_period, replace_clean_suffix,
    replace_dirty_suffix, use_parentheses_for_mix, wrap_text_after_parentheses,
};

// ============================================================================
// REGEX PATTERNS
// ============================================================================

/// Audio file extension left at the end of a tag, usually copied from a filename.
pub static FILE_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(mp3|flac|aiff?|m4a)$").unwrap());

pub static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

const VARIOUS_ARTISTS: &str = "Various Artists";

// ============================================================================
// INPUT CLEANUP
// ============================================================================

/// Trim, compose to NFC, drop control characters and a trailing audio extension.
/// Whitespace controls (tabs, newlines) are kept for the whitespace rules.
fn clean_input(text: &str) -> String {
    let composed: String = text
        .trim()
        .nfc()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect();
    FILE_EXTENSION.replace(&composed, "").trim().to_string()
}

/// Split "Various Artists" / "Artist - Title" into the real artist and title.
fn split_various_artists(artist: String, title: String) -> (String, String) {
    if !artist.eq_ignore_ascii_case(VARIOUS_ARTISTS) {
        return (artist, title);
    }

    match title.split_once(" - ") {
        Some((real_artist, real_title)) => {
            (real_artist.trim().to_string(), real_title.trim().to_string())
        }
        None => (artist, title),
    }
}

/// A leading dot would make the derived file name hidden: ".38 Special" → "38 Special"
fn trim_leading_dots(artist: &str) -> &str {
    artist.trim_start_matches(|c: char| c == '.' || c.is_whitespace())
}

/// Collapse whitespace runs and remove padding inside parentheses.
pub fn normalize_whitespace(text: &str) -> String {
    MULTI_SPACE
        .replace_all(text.trim(), " ")
        .replace(" )", ")")
        .replace("( ", "(")
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Format artist and title tags.
///
/// Returns the inputs trimmed when both are empty. Otherwise the result has
/// balanced, non-nested parentheses, feat credits moved to the artist, and
/// no double spaces.
///
/// ```
/// use track_formatter::format_tags;
///
/// let (artist, title) = format_tags("Aazar ft. French Montana", "The Carnival (Inst)");
/// assert_eq!(artist, "Aazar feat. French Montana");
/// assert_eq!(title, "The Carnival (Instrumental)");
/// ```
pub fn format_tags(artist: &str, title: &str) -> (String, String) {
    let (mut artist, mut title) = split_various_artists(clean_input(artist), clean_input(title));
    if artist.is_empty() && title.is_empty() {
        return (artist, title);
    }

    let duplicated_prefix = format!("{artist} - ");
    if title.starts_with(&duplicated_prefix) {
        title = title.replacen(&duplicated_prefix, "", 1);
    }

    artist = recase(&artist);
    title = recase(&title);

    if contains_ignore_case(&title, " clean") {
        title = replace_clean_suffix(&title);
    }
    if contains_ignore_case(&title, " dirty") {
        title = replace_dirty_suffix(&title);
    }

    artist = apply_rules(&COMMON_SUBSTITUTES, &artist);
    title = apply_rules(&COMMON_SUBSTITUTES, &title);
    title = apply_rules(&TITLE_SUBSTITUTES, &title);
    artist = apply_rules(&NAME_SUBSTITUTES, &artist);
    title = apply_rules(&NAME_SUBSTITUTES, &title);
    artist = apply_rules(&REGEX_SUBSTITUTES, &artist);
    title = apply_rules(&REGEX_SUBSTITUTES, &title);
    artist = apply_rules(&ARTIST_ALIASES, &artist);

    title = use_parentheses_for_mix(&title);

    let (moved_artist, moved_title) = move_feat_from_title_to_artist(&artist, &title);
    artist = extract_feat_from_parentheses(&moved_artist);

    title = split_nested_parentheses(&moved_title);
    title = balance_parentheses(&title);
    title = wrap_text_after_parentheses(&title);
    title = remove_bpm_in_parentheses_from_end(&title);
    title = remove_trailing_period(&title);

    (normalize_whitespace(trim_leading_dots(&artist)), normalize_whitespace(&title))
}

/// Make formatted tags safe for use in a file name.
///
/// ```
/// use track_formatter::format_filename;
///
/// let (artist, title) = format_filename("AC/DC", "Song: \"Live\"");
/// assert_eq!(artist, "AC-DC");
/// assert_eq!(title, "Song- ''Live''");
/// ```
pub fn format_filename(artist: &str, title: &str) -> (String, String) {
    let clean = |text: &str| apply_rules(&FILENAME_SUBSTITUTES, text.trim()).trim().to_string();
    (clean(artist), clean(title))
}

// ============================================================================
// TESTS
// ============================================================================
