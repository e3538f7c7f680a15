//! Deriving tags from "Artist - Title" file names.

use tracing::{debug, warn};

use crate::error::{FormatError, Result};
use crate::models::{MetadataPair, Track, TrackChange};

const SEPARATOR: &str = " - ";

/// Split a file name stem into artist and title at the first " - ".
pub fn parse_filename(stem: &str) -> Result<MetadataPair> {
    match stem.split_once(SEPARATOR) {
        Some((artist, title)) => Ok(MetadataPair::new(artist.trim(), title.trim())),
        None => Err(FormatError::MalformedFilename(stem.to_string())),
    }
}

/// Like [`parse_filename`], but logs malformed names and returns empty tags.
pub fn tags_from_filename(stem: &str) -> MetadataPair {
    parse_filename(stem).unwrap_or_else(|error| {
        warn!("{error}");
        MetadataPair::default()
    })
}

/// Fill missing tags from the file name.
pub fn resolve_tags(artist: &str, title: &str, stem: &str) -> MetadataPair {
    let artist = artist.trim();
    let title = title.trim();

    match (artist.is_empty(), title.is_empty()) {
        (true, true) => {
            warn!(file = stem, "Missing artist and title tags, using file name");
            tags_from_filename(stem)
        }
        (true, false) => {
            warn!(file = stem, "Missing artist tag, using file name");
            MetadataPair::new(tags_from_filename(stem).artist, title)
        }
        (false, true) => {
            warn!(file = stem, "Missing title tag, using file name");
            MetadataPair::new(artist, tags_from_filename(stem).title)
        }
        (false, false) => MetadataPair::new(artist, title),
    }
}

/// Work out what formatting would change for a track, using its file name as tags.
/// A name without tags on either side of the separator is reported as malformed.
pub fn preview_track(track: &Track) -> TrackChange {
    debug!("Previewing {track}");
    let tags = tags_from_filename(&track.name);
    if tags.is_empty() {
        TrackChange::malformed(track)
    } else {
        TrackChange::new(track, tags)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_parse_filename() {
        let test_cases = [
            ("Moby - Porcelain", ("Moby", "Porcelain")),
            (
                "Lizzo - About Damn Time - Purple Disco Machine",
                ("Lizzo", "About Damn Time - Purple Disco Machine"),
            ),
            ("A-Ha  -  Take On Me", ("A-Ha", "Take On Me")),
        ];

        for (input, (artist, title)) in test_cases {
            assert_eq!(parse_filename(input), Ok(MetadataPair::new(artist, title)));
        }
    }

    #[test]
    fn test_parse_filename_malformed() {
        assert_eq!(
            parse_filename("Porcelain"),
            Err(FormatError::MalformedFilename("Porcelain".to_string()))
        );
        assert!(parse_filename("A-Ha-Take On Me").is_err());
        assert_eq!(tags_from_filename("Porcelain"), MetadataPair::default());
    }

    #[test]
    fn test_resolve_tags() {
        let test_cases = [
            (("", "", "Moby - Porcelain"), ("Moby", "Porcelain")),
            (("", "Porcelain (Remix)", "Moby - Porcelain"), ("Moby", "Porcelain (Remix)")),
            (("Moby", " ", "Moby - Porcelain"), ("Moby", "Porcelain")),
            (("Moby", "Porcelain", "Unrelated - Name"), ("Moby", "Porcelain")),
            (("", "", "Porcelain"), ("", "")),
        ];

        for ((artist, title, stem), (expected_artist, expected_title)) in test_cases {
            let expected = MetadataPair::new(expected_artist, expected_title);
            assert_eq!(resolve_tags(artist, title, stem), expected);
        }
    }

    #[test]
    fn test_preview_track() {
        let path = Path::new("Rihanna - Right Now (Facetyme Remix) (132 Ebm).mp3");
        let change = preview_track(&Track::new(path).unwrap());
        assert!(!change.malformed);
        assert_eq!(
            change.formatted,
            MetadataPair::new("Rihanna", "Right Now (Facetyme Remix)")
        );
        assert_eq!(change.proposed_filename, "Rihanna - Right Now (Facetyme Remix).mp3");

        let path = Path::new(".38 Special - Hold On Loosely.mp3");
        let change = preview_track(&Track::new(path).unwrap());
        assert_eq!(change.proposed_filename, "38 Special - Hold On Loosely.mp3");

        let track = Track::new(Path::new("Porcelain.mp3")).unwrap();
        assert!(preview_track(&track).malformed);
    }
}
