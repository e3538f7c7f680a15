//! Featured-artist relocation.
//!
//! A "feat. X" clause in the title is cut out and appended to the artist,
//! dropping X from the artist list first if it was already credited there.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const FEAT_MARKER: &str = "feat. ";

/// Delimiters that may join a featured name to the rest of the artist list.
const ARTIST_DELIMITERS: [&str; 4] = [", ", " & ", " and ", " + "];

/// A group with a spaced dash inside: "(Discover Love - Mediterranean Club Mix)"
static DASH_IN_PARENTHESES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([^)]*( - - | - )[^)]*\)").unwrap());

/// Leftovers around parentheses once a clause or dash has been cut out.
const PARENTHESES_CLEANUP: [(&str, &str); 7] = [
    ("((", "("),
    ("))", ")"),
    ("(- ", "("),
    ("( - ", "("),
    (" -)", ")"),
    (" - )", ")"),
    ("()", ""),
];

/// Find the first feat clause in `title`.
///
/// The clause starts at "feat. " and runs up to, but not including, the
/// first " -", "(" or ")" after the marker, or to the end of the title.
fn find_feat_clause(title: &str) -> Option<&str> {
    let start = title.find(FEAT_MARKER)?;
    let body_start = start + FEAT_MARKER.len();

    let end = title[body_start..]
        .char_indices()
        .map(|(i, _)| body_start + i)
        .find(|&i| {
            let rest = &title[i..];
            rest.starts_with(" -") || rest.starts_with('(') || rest.starts_with(')')
        })
        .unwrap_or(title.len());

    Some(&title[start..end])
}

/// Featured names from a clause, with "and" joins normalized to "&".
/// "feat. Pharrell Williams and Nile Rodgers" → "Pharrell Williams & Nile Rodgers"
fn featured_names(clause: &str) -> String {
    clause
        .split_whitespace()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ")
        .replace(", and ", " & ")
        .replace(" and ", " & ")
}

/// Move a featured artist from the title to the artist field.
///
/// Also splits dash-separated text inside groups and cleans up what the
/// removed clause leaves behind. This part runs even when the title has no
/// feat clause.
pub fn move_feat_from_title_to_artist(artist: &str, title: &str) -> (String, String) {
    let mut artist = artist.to_string();
    let mut title = title.to_string();

    if title.contains(" feat. ") || title.contains("(feat. ") {
        if let Some(clause) = find_feat_clause(&title).map(str::to_string) {
            title = title.replace(&clause, "");

            let names = featured_names(&clause);
            if !names.is_empty() {
                for delimiter in ARTIST_DELIMITERS {
                    artist = artist
                        .replace(&format!("{delimiter}{names}"), "")
                        .replace(&format!("{names}{delimiter}"), "");
                }

                let credit = format!(" feat. {names}");
                if !artist.contains(&credit) {
                    artist.push_str(&credit);
                }
            }
        }
    }

    (artist, replace_dash_in_parentheses(&title))
}

/// Split groups at their inner dashes and tidy the parentheses.
/// "(Discover Love - Mediterranean Club Mix)" → "(Discover Love) (Mediterranean Club Mix)"
pub fn replace_dash_in_parentheses(title: &str) -> String {
    let split = DASH_IN_PARENTHESES.replace_all(title, |caps: &Captures| {
        caps[0].replace(" - - ", ") (").replace(" - ", ") (")
    });

    PARENTHESES_CLEANUP
        .iter()
        .fold(split.into_owned(), |result, (pattern, replacement)| {
            result.replace(pattern, replacement)
        })
}

/// Unwrap a parenthesized feat credit in the artist field.
/// "Major Lazer (feat. Laidback Luke)" → "Major Lazer feat. Laidback Luke"
pub fn extract_feat_from_parentheses(artist: &str) -> String {
    let Some(start) = artist.find("(feat. ") else {
        return artist.to_string();
    };
    let Some(end) = artist[start..].find(')').map(|i| start + i) else {
        return artist.to_string();
    };

    let group = &artist[start..=end];
    artist.replacen(group, &group[1..group.len() - 1], 1)
}

// ============================================================================
// TESTS
// ============================================================================
