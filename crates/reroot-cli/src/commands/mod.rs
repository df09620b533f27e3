//! Command implementations.
//!
//! - [`convert`] - `to-alias` / `to-relative` rewrite passes
//! - [`check`] - configuration validation and dry-run preview
//! - [`init`] - starter config file
//!
//! Each module provides an `execute` function that takes the parsed command
//! arguments and returns a Result.

pub mod check;
pub mod convert;
pub mod init;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use convert::{to_alias as to_alias_execute, to_relative as to_relative_execute};
pub use init::execute as init_execute;
