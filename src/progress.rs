//! Progress reporting for batch runs.
//!
//! A progress bar on the terminal, or periodic log lines in log-only mode
//! so output stays readable when piped or tailed.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::info;

static LOG_ONLY: AtomicBool = AtomicBool::new(false);

/// Set once from `--log-only` before any progress is reported.
pub fn set_log_only(value: bool) {
    LOG_ONLY.store(value, Ordering::Relaxed);
}

fn is_log_only() -> bool {
    LOG_ONLY.load(Ordering::Relaxed)
}

/// "0.4s", "12.0s", "2.5m"
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.1}m", secs / 60.0)
    }
}

/// Progress bar over `len` tracks. Hidden in log-only mode.
pub fn create_progress_bar(len: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if is_log_only() {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    } else {
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} tracks ({per_sec})",
                )
                .unwrap()
                .progress_chars("=> "),
        );
    }
    pb.set_message(msg.to_string());
    pb
}

/// Log a progress line every `interval` tracks and at the end.
/// Does nothing unless log-only mode is on.
pub fn log_progress(phase: &str, current: u64, total: u64, interval: u64) {
    if !is_log_only() || total == 0 || interval == 0 {
        return;
    }
    if current % interval == 0 || current == total {
        let pct = 100.0 * current as f64 / total as f64;
        info!("[{}] {}/{} ({:.1}%)", phase, current, total, pct);
    }
}
