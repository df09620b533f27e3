//! reroot CLI - convert import specifiers between alias-rooted and relative notation.
//!
//! This crate wraps `reroot-core` with configuration loading, terminal output
//! and error reporting.
//!
//! # Architecture
//!
//! - [`cli`] - clap definitions
//! - [`config`] - figment-based configuration (`reroot.config.json`, `REROOT_*`, flags)
//! - [`commands`] - `to-alias`, `to-relative`, `check`, `init`
//! - [`error`] - error types with actionable hints
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages and the run report
//!
//! # Example
//!
//! ```rust
//! use reroot_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
