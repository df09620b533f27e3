//! Formatting for durations and the run report.

use owo_colors::{OwoColorize, Stream, Style};
use reroot_core::RunSummary;
use std::path::Path;
use std::time::Duration;

/// Format duration in human-readable format.
///
/// ```
/// use std::time::Duration;
/// use reroot_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// `"1 file"`, `"3 files"`.
///
/// ```
/// use reroot_cli::ui::plural;
///
/// assert_eq!(plural(1, "file"), "1 file");
/// assert_eq!(plural(0, "specifier"), "0 specifiers");
/// ```
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

fn verb(dry_run: bool) -> &'static str {
    if dry_run { "Would rewrite" } else { "Rewrote" }
}

/// Print one changed file to stdout.
pub fn print_file_change(path: &Path, rewritten: usize, dry_run: bool) {
    println!(
        "{} imports in {} {}",
        verb(dry_run),
        path.display()
            .if_supports_color(Stream::Stdout, |t| t.style(Style::new().bold())),
        format!("({})", plural(rewritten, "specifier"))
            .if_supports_color(Stream::Stdout, |t| t.dimmed())
    );
}

/// Print the final summary line to stdout and the counters to stderr.
pub fn print_run_summary(summary: &RunSummary, dry_run: bool, elapsed: Duration) {
    println!(
        "{} {} imports in {}.",
        "✓".if_supports_color(Stream::Stdout, |t| t.style(Style::new().green().bold())),
        verb(dry_run),
        plural(summary.changed, "file")
    );

    let mut details = format!(
        "scanned {}, visited {}, rewrote {}",
        plural(summary.scanned, "file"),
        summary.visited,
        plural(summary.rewritten_specifiers, "specifier"),
    );
    if summary.skipped_specifiers > 0 {
        details.push_str(&format!(
            ", left {} untouched",
            plural(summary.skipped_specifiers, "unresolvable specifier")
        ));
    }
    eprintln!(
        "  {}",
        format!("{details} in {}", format_duration(elapsed))
            .if_supports_color(Stream::Stderr, |t| t.dimmed())
    );
}
