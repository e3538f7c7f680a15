//! Core data models for track formatting.
//!
//! Tag pairs, supported audio formats, tracks identified by path, and the
//! per-track change report produced by a preview run.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{FormatError, Result};
use crate::formatter::{format_filename, format_tags};

// ============================================================================
// Tags
// ============================================================================

/// Artist and title tags of one track.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MetadataPair {
    pub artist: String,
    pub title: String,
}

impl MetadataPair {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.artist.is_empty() && self.title.is_empty()
    }

    /// Run both tags through the formatting pipeline.
    pub fn formatted(&self) -> MetadataPair {
        let (artist, title) = format_tags(&self.artist, &self.title);
        MetadataPair { artist, title }
    }

    /// File name stem for these tags: "Artist - Title".
    pub fn file_stem(&self) -> String {
        let (artist, title) = format_filename(&self.artist, &self.title);
        format!("{artist} - {title}")
    }
}

impl fmt::Display for MetadataPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.artist, self.title)
    }
}

// ============================================================================
// File Formats
// ============================================================================

/// Supported audio file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    Mp3,
    Flac,
    Aif,
    M4a,
}

impl FromStr for FileFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mp3" => Ok(FileFormat::Mp3),
            "flac" => Ok(FileFormat::Flac),
            "aif" | "aiff" => Ok(FileFormat::Aif),
            "m4a" => Ok(FileFormat::M4a),
            _ => Err(FormatError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let extension = match self {
            FileFormat::Mp3 => "mp3",
            FileFormat::Flac => "flac",
            FileFormat::Aif => "aif",
            FileFormat::M4a => "m4a",
        };
        f.write_str(extension)
    }
}

// ============================================================================
// Tracks
// ============================================================================

/// Audio file identified by its path. Built without touching the filesystem.
#[derive(Clone, Debug)]
pub struct Track {
    pub name: String,      // File stem, e.g. "Moby - Porcelain"
    pub extension: String, // Extension as found on disk, e.g. "MP3"
    pub format: FileFormat,
    pub root: PathBuf, // Parent directory, empty for bare file names
}

impl Track {
    pub fn new(path: &Path) -> Result<Track> {
        let missing = || FormatError::MissingFileName(path.to_path_buf());

        let name = path.file_stem().ok_or_else(missing)?.to_string_lossy().into_owned();
        let extension = path.extension().ok_or_else(missing)?.to_string_lossy().trim().to_string();
        if name.trim().is_empty() || extension.is_empty() {
            return Err(missing());
        }

        let format = FileFormat::from_str(&extension)?;
        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();

        Ok(Track {
            name,
            extension,
            format,
            root,
        })
    }

    /// Current file name.
    pub fn filename(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }

    /// File name for the given tags, with the canonical lowercase extension.
    pub fn formatted_filename(&self, tags: &MetadataPair) -> String {
        format!("{}.{}", tags.file_stem(), self.format)
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(self.filename())
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Track {}

impl PartialOrd for Track {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Track {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().display())
    }
}

// ============================================================================
// Reports
// ============================================================================

/// What formatting would change for one track.
#[derive(Clone, Debug, Serialize)]
pub struct TrackChange {
    pub path: PathBuf,
    pub original: MetadataPair,
    pub formatted: MetadataPair,
    pub current_filename: String,
    pub proposed_filename: String,
    pub tags_changed: bool,
    pub rename: bool,
    pub malformed: bool, // File name had no "artist - title" separator
}

impl TrackChange {
    pub fn new(track: &Track, original: MetadataPair) -> Self {
        let formatted = original.formatted();
        let current_filename = track.filename();
        let proposed_filename = if formatted.artist.is_empty() || formatted.title.is_empty() {
            current_filename.clone()
        } else {
            track.formatted_filename(&formatted)
        };

        TrackChange {
            path: track.path(),
            tags_changed: formatted != original,
            rename: proposed_filename != current_filename,
            original,
            formatted,
            current_filename,
            proposed_filename,
            malformed: false,
        }
    }

    /// Report for a track whose name could not be split into tags.
    pub fn malformed(track: &Track) -> Self {
        let current_filename = track.filename();
        TrackChange {
            path: track.path(),
            original: MetadataPair::default(),
            formatted: MetadataPair::default(),
            proposed_filename: current_filename.clone(),
            current_filename,
            tags_changed: false,
            rename: false,
            malformed: true,
        }
    }

    pub fn is_changed(&self) -> bool {
        self.tags_changed || self.rename
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_format_from_str() {
        let test_cases = [
            ("mp3", FileFormat::Mp3),
            ("MP3", FileFormat::Mp3),
            ("flac", FileFormat::Flac),
            ("aif", FileFormat::Aif),
            ("AIFF", FileFormat::Aif),
            ("m4a", FileFormat::M4a),
        ];

        for (input, expected) in test_cases {
            assert_eq!(FileFormat::from_str(input), Ok(expected));
        }

        assert_eq!(
            FileFormat::from_str("wav"),
            Err(FormatError::UnsupportedFormat("wav".to_string()))
        );
    }

    #[test]
    fn test_file_format_display() {
        assert_eq!(FileFormat::Mp3.to_string(), "mp3");
        assert_eq!(FileFormat::Aif.to_string(), "aif");
    }

    #[test]
    fn test_track_new() {
        let track = Track::new(Path::new("music/Moby - Porcelain.MP3")).unwrap();
        assert_eq!(track.name, "Moby - Porcelain");
        assert_eq!(track.extension, "MP3");
        assert_eq!(track.format, FileFormat::Mp3);
        assert_eq!(track.root, PathBuf::from("music"));
        assert_eq!(track.filename(), "Moby - Porcelain.MP3");
    }

    #[test]
    fn test_track_new_errors() {
        assert_eq!(
            Track::new(Path::new("Moby - Porcelain")).unwrap_err(),
            FormatError::MissingFileName(PathBuf::from("Moby - Porcelain"))
        );
        assert!(matches!(
            Track::new(Path::new("Moby - Porcelain.wav")),
            Err(FormatError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_track_ordering() {
        let mut tracks = vec![
            Track::new(Path::new("b/Zed - Song.mp3")).unwrap(),
            Track::new(Path::new("a/Abba - Song.flac")).unwrap(),
        ];
        tracks.sort();
        assert_eq!(tracks[0].name, "Abba - Song");
        assert_eq!(
            Track::new(Path::new("a/X - Y.mp3")).unwrap(),
            Track::new(Path::new("b/X - Y.aif")).unwrap()
        );
    }

    #[test]
    fn test_formatted_filename() {
        let track = Track::new(Path::new("ACDC - song.AIFF")).unwrap();
        let tags = MetadataPair::new("AC/DC", "Song: \"Live\"");
        assert_eq!(track.formatted_filename(&tags), "AC-DC - Song- ''Live''.aif");
    }

    #[test]
    fn test_track_change() {
        let path = Path::new("Aazar ft. French Montana - The Carnival (Inst).mp3");
        let track = Track::new(path).unwrap();
        let tags = MetadataPair::new("Aazar ft. French Montana", "The Carnival (Inst)");
        let change = TrackChange::new(&track, tags);
        assert!(change.tags_changed);
        assert!(change.rename);
        assert_eq!(
            change.proposed_filename,
            "Aazar feat. French Montana - The Carnival (Instrumental).mp3"
        );

        let track = Track::new(Path::new("Moby - Porcelain.mp3")).unwrap();
        let change = TrackChange::new(&track, MetadataPair::new("Moby", "Porcelain"));
        assert!(!change.is_changed());
    }

    #[test]
    fn test_malformed_change_keeps_name() {
        let track = Track::new(Path::new("Porcelain.mp3")).unwrap();
        let change = TrackChange::malformed(&track);
        assert!(change.malformed);
        assert!(!change.is_changed());
        assert_eq!(change.proposed_filename, "Porcelain.mp3");
    }
}
