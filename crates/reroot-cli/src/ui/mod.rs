//! Terminal output: status messages on stderr, the per-file report on stdout.
//!
//! # Examples
//!
//! ```no_run
//! use reroot_cli::ui;
//!
//! ui::init_colors(false);
//! ui::info("Checking configuration...");
//! ui::success("Configuration is valid");
//! ```

mod format;
mod messages;

pub use format::{format_duration, plural, print_file_change, print_run_summary};
pub use messages::{info, success, warning};

/// Check if color output should be enabled, for status lines and log output.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// decision follows whether stderr is an attended terminal.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support. Call once, early in `main`.
///
/// `--no-color` turns colors off for every stream; otherwise `NO_COLOR` and
/// `FORCE_COLOR` are honored and unset streams fall back to per-stream
/// detection.
pub fn init_colors(no_color: bool) {
    if no_color || std::env::var_os("NO_COLOR").is_some() {
        owo_colors::set_override(false);
    } else if std::env::var_os("FORCE_COLOR").is_some() {
        owo_colors::set_override(true);
    }
    console::set_colors_enabled(!no_color && should_use_color());
}
