//! Logging setup for the reroot CLI.
//!
//! Diagnostics go through `tracing`; user-facing status lines go through
//! [`crate::ui`]. The subscriber writes to stderr so stdout carries only the
//! per-file report.
//!
//! # Example
//!
//! ```rust,no_run
//! use reroot_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Starting run");
//! debug!(file = "app/page.tsx", "scanning");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::ui::should_use_color;

/// Filter used by `--verbose`.
pub const VERBOSE_FILTER: &str = "reroot=debug,reroot_core=debug,reroot_cli=debug";

/// Filter used by `--quiet`.
pub const QUIET_FILTER: &str = "reroot=error,reroot_core=error,reroot_cli=error";

/// Filter used when neither flag nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "reroot=info,reroot_core=info,reroot_cli=info";

/// Initialize the tracing subscriber.
///
/// The level is picked in this order:
/// 1. `--verbose`: DEBUG for reroot crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG`
/// 4. INFO for reroot crates
///
/// Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = select_filter(verbose, quiet);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_color())
        .compact();

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn select_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
