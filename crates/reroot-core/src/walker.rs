//! Tree traversal and run orchestration.

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::config::{Direction, RewriteConfig};
use crate::error::{Error, Result};
use crate::rewrite::FileRewriter;

/// Directory names never descended into.
const SKIPPED_DIRS: &[&str] = &["node_modules"];

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files with a matching extension
    pub scanned: usize,
    /// Files that passed the marker pre-check and were fully scanned
    pub visited: usize,
    /// Files whose contents changed
    pub changed: usize,
    /// Specifiers replaced across all files
    pub rewritten_specifiers: usize,
    /// Specifiers left untouched because they could not be translated
    pub skipped_specifiers: usize,
}

/// A file whose contents changed, reported as soon as it is handled.
#[derive(Debug, Clone, Copy)]
pub struct FileChange<'a> {
    pub path: &'a Path,
    pub rewritten: usize,
    /// `true` when the new contents were not written
    pub dry_run: bool,
}

/// Walks the scan root and rewrites every candidate file.
///
/// Roots are used as given; pass a [`RewriteConfig::anchored`] config so file
/// paths and the project root share a base. [`run`] does this for you.
#[derive(Debug, Clone)]
pub struct TreeWalker<'c> {
    config: &'c RewriteConfig,
    rewriter: FileRewriter<'c>,
    dry_run: bool,
}

impl<'c> TreeWalker<'c> {
    pub fn new(config: &'c RewriteConfig, direction: Direction) -> Self {
        Self {
            config,
            rewriter: FileRewriter::new(config, direction),
            dry_run: false,
        }
    }

    /// Report what would change without writing.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.rewriter = self.rewriter.dry_run(dry_run);
        self.dry_run = dry_run;
        self
    }

    /// Candidate files under the scan root, sorted by path.
    ///
    /// Hidden directories and `node_modules` are skipped; symlinks are not
    /// followed, so no file is yielded twice.
    pub fn collect_sources(&self) -> Result<Vec<PathBuf>> {
        let root = &self.config.scan_root;
        if !root.is_dir() {
            return Err(Error::ScanRootNotFound(root.clone()));
        }

        let mut sources = Vec::new();
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));

        for entry in walker {
            let entry = entry.map_err(|source| Error::Walk {
                root: root.clone(),
                source,
            })?;
            if entry.file_type().is_file() && self.config.matches_extension(entry.path()) {
                sources.push(entry.into_path());
            }
        }

        Ok(sources)
    }

    /// Run the pass over the whole tree.
    pub fn run(&self) -> Result<RunSummary> {
        self.run_with(|_| {})
    }

    /// Run the pass, calling `on_change` for each changed file as it happens.
    ///
    /// Stops at the first read or write failure; files handled before the
    /// failure keep their new contents.
    pub fn run_with<F>(&self, mut on_change: F) -> Result<RunSummary>
    where
        F: FnMut(&FileChange<'_>),
    {
        let direction = self.rewriter.direction();
        info!(
            scan_root = %self.config.scan_root.display(),
            %direction,
            dry_run = self.dry_run,
            "rewriting import specifiers"
        );

        let mut summary = RunSummary::default();
        for path in self.collect_sources()? {
            summary.scanned += 1;

            let Some(result) = self.rewriter.rewrite_file(&path)? else {
                continue;
            };

            summary.visited += 1;
            debug!(file = %path.display(), "scanned");

            summary.skipped_specifiers += result.skipped;
            if !result.changed {
                continue;
            }

            summary.changed += 1;
            summary.rewritten_specifiers += result.rewritten;
            on_change(&FileChange {
                path: &path,
                rewritten: result.rewritten,
                dry_run: self.dry_run,
            });
        }

        info!(
            changed = summary.changed,
            visited = summary.visited,
            scanned = summary.scanned,
            "done"
        );
        Ok(summary)
    }
}

/// Run one pass over `config.scan_root`.
///
/// Relative roots are resolved against the current working directory.
pub fn run(config: &RewriteConfig, direction: Direction) -> Result<RunSummary> {
    config.validate()?;
    let cwd = env::current_dir().map_err(Error::CurrentDir)?;
    let config = config.clone().anchored(&cwd);
    TreeWalker::new(&config, direction).run()
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.iter().any(|dir| name == *dir)
}
