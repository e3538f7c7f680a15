use anyhow::{bail, Context, Result};
use clap::Parser;
use rayon::prelude::*;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use track_formatter::filename::{preview_track, resolve_tags};
use track_formatter::progress::{create_progress_bar, format_duration, log_progress, set_log_only};
use track_formatter::{format_filename, MetadataPair, Track, TrackChange};

#[derive(Parser)]
#[command(name = "track-formatter")]
#[command(about = "Preview artist/title tag and filename fixes for \"Artist - Title\" audio files")]
struct Args {
    /// Audio file names or paths, e.g. "Moby - Porcelain.mp3"
    names: Vec<PathBuf>,

    /// Read file names from stdin, one per line
    #[arg(long)]
    stdin: bool,

    /// Format a single artist tag instead of file names.
    /// A missing artist or title is taken from the first file name.
    #[arg(long)]
    artist: Option<String>,

    /// Format a single title tag instead of file names
    #[arg(long)]
    title: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Only list tracks that would change
    #[arg(long)]
    changed_only: bool,

    #[arg(long, default_value = "0")]
    workers: usize,

    /// Hide the progress bar and log progress lines instead
    #[arg(long)]
    log_only: bool,
}

const LOG_INTERVAL: u64 = 1_000;

#[derive(Debug, Default)]
struct Summary {
    tracks: usize,
    tag_fixes: usize,
    renames: usize,
    malformed: usize,
    unsupported: usize,
}

impl Summary {
    fn new(changes: &[TrackChange], unsupported: usize) -> Self {
        Summary {
            tracks: changes.len(),
            tag_fixes: changes.iter().filter(|c| c.tags_changed).count(),
            renames: changes.iter().filter(|c| c.rename).count(),
            malformed: changes.iter().filter(|c| c.malformed).count(),
            unsupported,
        }
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "track_formatter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Format one artist/title pair given on the command line.
fn format_single(original: MetadataPair, json: bool) -> Result<()> {
    let formatted = original.formatted();
    debug!("Formatting {original}");
    let (file_artist, file_title) = format_filename(&formatted.artist, &formatted.title);

    if json {
        let report = serde_json::json!({
            "original": original,
            "formatted": formatted,
            "filename": format!("{file_artist} - {file_title}"),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Tags:     {formatted}");
        println!("Artist:   {}", formatted.artist);
        println!("Title:    {}", formatted.title);
        println!("Filename: {file_artist} - {file_title}");
    }

    Ok(())
}

fn collect_names(args: &Args) -> Result<Vec<PathBuf>> {
    let mut names = args.names.clone();

    if args.stdin {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read file names from stdin")?;
            let line = line.trim();
            if !line.is_empty() {
                names.push(PathBuf::from(line));
            }
        }
    }

    Ok(names)
}

/// Build tracks from paths, skipping unsupported ones.
fn load_tracks(names: &[PathBuf]) -> (Vec<Track>, usize) {
    let mut unsupported = 0;
    let mut tracks: Vec<Track> = names
        .iter()
        .filter_map(|path| match Track::new(path) {
            Ok(track) => Some(track),
            Err(error) => {
                warn!("Skipping {}: {error}", path.display());
                unsupported += 1;
                None
            }
        })
        .collect();

    tracks.sort();
    (tracks, unsupported)
}

fn preview_tracks(tracks: &[Track]) -> Vec<TrackChange> {
    let total = tracks.len() as u64;
    let pb = create_progress_bar(total, "Formatting");

    let changes: Vec<TrackChange> = tracks
        .par_iter()
        .map(|track| {
            let change = preview_track(track);
            pb.inc(1);
            log_progress("Formatting", pb.position(), total, LOG_INTERVAL);
            change
        })
        .collect();

    pb.finish_with_message(format!("Formatted {} tracks", changes.len()));
    changes
}

fn print_changes(changes: &[TrackChange], changed_only: bool) {
    for change in changes {
        if changed_only && !change.is_changed() {
            continue;
        }

        if change.malformed {
            println!("? {}", change.current_filename);
        } else if change.is_changed() {
            println!("- {}", change.current_filename);
            println!("+ {}", change.proposed_filename);
        } else {
            debug!("Unchanged: {}", change.current_filename);
            println!("  {}", change.current_filename);
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();
    set_log_only(args.log_only);

    if args.workers > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.workers)
            .build_global()
            .context("Failed to set thread pool size")?;
    }

    if args.artist.is_some() || args.title.is_some() {
        let artist = args.artist.as_deref().unwrap_or_default();
        let title = args.title.as_deref().unwrap_or_default();
        let stem = args
            .names
            .first()
            .and_then(|path| path.file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        return format_single(resolve_tags(artist, title, &stem), args.json);
    }

    let names = collect_names(&args)?;
    if names.is_empty() {
        bail!("No file names given, pass them as arguments or use --stdin");
    }

    let start = Instant::now();
    let (tracks, unsupported) = load_tracks(&names);
    info!("Loaded {} tracks ({} skipped)", tracks.len(), unsupported);

    let changes = preview_tracks(&tracks);
    let summary = Summary::new(&changes, unsupported);

    if args.json {
        let report: Vec<&TrackChange> = changes
            .iter()
            .filter(|c| !args.changed_only || c.is_changed())
            .collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
        info!(
            "{} tracks, {} tag fixes, {} renames, {} malformed",
            summary.tracks, summary.tag_fixes, summary.renames, summary.malformed
        );
        return Ok(());
    }

    print_changes(&changes, args.changed_only);

    println!("\n{:=<60}", "");
    println!("Preview complete!");
    println!("  Tracks: {}", summary.tracks);
    println!("  Tag fixes: {}", summary.tag_fixes);
    println!("  Renames: {}", summary.renames);
    println!("  Malformed names: {}", summary.malformed);
    println!("  Unsupported files: {}", summary.unsupported);
    println!("  Elapsed: {}", format_duration(start.elapsed()));
    println!("{:=<60}", "");

    Ok(())
}
