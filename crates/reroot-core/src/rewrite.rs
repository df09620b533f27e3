//! Single-file rewriting.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::{Direction, RewriteConfig};
use crate::error::{Error, Result};
use crate::specifier::{Notation, SpecifierMatch, SpecifierMatcher};
use crate::translate;

/// Outcome of rewriting one file's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    /// File contents after rewriting (identical to the input when unchanged)
    pub content: String,
    /// Whether any specifier changed
    pub changed: bool,
    /// Specifiers replaced with a different string
    pub rewritten: usize,
    /// Specifiers the pass acts on that could not be translated
    pub skipped: usize,
}

/// Applies one pass to individual files.
///
/// File paths must share a base with the configured project root; use a
/// [`RewriteConfig::anchored`] config and absolute paths.
#[derive(Debug, Clone)]
pub struct FileRewriter<'c> {
    config: &'c RewriteConfig,
    matcher: SpecifierMatcher,
    direction: Direction,
    dry_run: bool,
}

impl<'c> FileRewriter<'c> {
    pub fn new(config: &'c RewriteConfig, direction: Direction) -> Self {
        Self {
            config,
            matcher: SpecifierMatcher::new(config.alias_prefix.clone()),
            direction,
            dry_run: false,
        }
    }

    /// Compute results without writing anything back.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Read, rewrite and (when changed) write back the file at `path`.
    ///
    /// Returns whether the contents changed.
    pub fn rewrite(&self, path: &Path) -> Result<bool> {
        Ok(self.rewrite_file(path)?.is_some_and(|result| result.changed))
    }

    /// Like [`rewrite`](Self::rewrite), but returns the full result.
    ///
    /// `None` means the file failed the marker pre-check and was not scanned.
    pub fn rewrite_file(&self, path: &Path) -> Result<Option<RewriteResult>> {
        let source = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if !self.matcher.has_candidates(&source, self.direction) {
            return Ok(None);
        }

        let result = self.rewrite_source(path, &source);
        self.commit(path, &result)?;
        Ok(Some(result))
    }

    /// Rewrite already-loaded contents of the file at `path`. No I/O.
    pub fn rewrite_source(&self, path: &Path, source: &str) -> RewriteResult {
        let file_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let matches = self.matcher.scan_for(source, self.direction);

        let mut content = String::with_capacity(source.len());
        let mut cursor = 0;
        let mut rewritten = 0;
        let mut skipped = 0;

        for found in &matches {
            let Some(replacement) = self.translate(found, file_dir) else {
                debug!(
                    file = %path.display(),
                    specifier = found.specifier,
                    "leaving unresolvable specifier untouched"
                );
                skipped += 1;
                continue;
            };

            if replacement == found.specifier {
                continue;
            }

            content.push_str(&source[cursor..found.specifier_span.start]);
            content.push_str(&replacement);
            cursor = found.specifier_span.end;
            rewritten += 1;
        }
        content.push_str(&source[cursor..]);

        RewriteResult {
            changed: rewritten > 0,
            content,
            rewritten,
            skipped,
        }
    }

    /// Write `result` back to `path` if it changed and this is not a dry run.
    pub fn commit(&self, path: &Path, result: &RewriteResult) -> Result<()> {
        if !result.changed || self.dry_run {
            return Ok(());
        }
        fs::write(path, &result.content).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Specifier body in the target notation, or `None` to leave it as is.
    fn translate(&self, found: &SpecifierMatch<'_>, file_dir: &Path) -> Option<String> {
        let prefix = &self.config.alias_prefix;
        let root = &self.config.project_root;

        match found.notation {
            Notation::AliasRooted { subpath } => {
                // `@/@/x` and friends
                if subpath
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
                {
                    return None;
                }
                translate::to_relative(file_dir, subpath, root)
            }
            Notation::RelativeUp { .. } | Notation::RelativeSame { .. } => {
                let subpath = translate::to_alias(file_dir, found.specifier, root)?;
                Some(format!("{prefix}/{subpath}"))
            }
        }
    }
}
