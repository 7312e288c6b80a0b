//! Progress indicators for CLI operations
//!
//! The spinner draws on stderr and hides itself when stderr is not a
//! terminal, so piped output stays clean.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner shown while waiting for a job.
///
/// Returns a hidden bar in quiet mode so callers can update it unconditionally.
pub fn create_poll_spinner(job_id: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {prefix} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_prefix(job_id.to_string());
    pb.set_message("submitted");
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// Format bytes into human-readable string
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}
