//! Track formatter library - artist/title tag and filename normalization.

pub mod brackets;
pub mod casing;
pub mod error;
pub mod feat;
pub mod filename;
pub mod formatter;
pub mod models;
pub mod progress;
pub mod substitutes;
pub mod suffix;

pub use error::FormatError;
pub use formatter::{format_filename, format_tags};
pub use models::{FileFormat, MetadataPair, Track, TrackChange};
