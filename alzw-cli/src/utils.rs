//! Utility functions for the CLI.

use alzw_codec::CodecStats;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// Create a spinner shown while a file is being processed.
///
/// The codec works on a whole file in one call, so there is no position to
/// report; the spinner only shows that work is under way.
pub fn create_spinner(message: String, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("[{elapsed_precise}] {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ");
    pb.set_style(style);
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Format a byte count in human-readable form.
pub fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.1}G", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.1}M", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.1}K", size as f64 / KB as f64)
    } else {
        format!("{}B", size)
    }
}

/// Write the verbose report for one finished job.
pub fn print_stats(out: &mut impl Write, action: &str, stats: &CodecStats) -> io::Result<()> {
    writeln!(
        out,
        "{}: {} -> {} ({:.1}%)",
        action,
        format_size(stats.bytes_in),
        format_size(stats.bytes_out),
        stats.percent()
    )?;
    writeln!(
        out,
        "  mode {}, {} codewords, {} resets, final width {} bits",
        stats.mode, stats.codewords, stats.resets, stats.final_width
    )
}
