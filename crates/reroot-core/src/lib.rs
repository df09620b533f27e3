//! # reroot-core
//!
//! Rewrites module import specifiers between two notations:
//!
//! - **alias-rooted**: `@/components/button`, resolved from the project root
//! - **relative**: `../components/button`, `./button`, resolved from the
//!   importing file's directory
//!
//! ## Architecture
//!
//! ```text
//!   walker::TreeWalker        enumerate files by extension, count changes
//!          │
//!          ▼
//!   rewrite::FileRewriter     read once, substitute spans, write if changed
//!          │
//!    ┌─────┴──────────┐
//!    ▼                ▼
//!  specifier        translate
//!  (scan+classify)  (path arithmetic)
//! ```
//!
//! `specifier` and `translate` do no I/O.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reroot_core::{Direction, RewriteConfig, TreeWalker};
//! use std::path::Path;
//!
//! # fn main() -> reroot_core::Result<()> {
//! let config = RewriteConfig::new("app", ".").anchored(Path::new("/work/site"));
//! let summary = TreeWalker::new(&config, Direction::ToRelative)
//!     .run_with(|change| println!("Rewrote {}", change.path.display()))?;
//! println!("Rewrote imports in {} files.", summary.changed);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod rewrite;
pub mod specifier;
pub mod translate;
pub mod walker;

pub use config::{Direction, RewriteConfig};
pub use error::{Error, Result};
pub use rewrite::{FileRewriter, RewriteResult};
pub use specifier::{Notation, Quote, SpecifierMatch, SpecifierMatcher, StatementKind};
pub use walker::{FileChange, RunSummary, TreeWalker, run};
