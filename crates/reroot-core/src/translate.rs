//! Conversion between alias-rooted and relative specifier paths.
//!
//! Pure path arithmetic: nothing here touches the filesystem. Resolution is
//! lexical (`.` and `..` are collapsed with [`PathClean`]), so symlinks are
//! not followed and the target does not need to exist.
//!
//! Both directions return `None` when the specifier cannot be translated
//! without guessing:
//!
//! - the subpath carries interior `.`/`..` segments or empty segments
//! - the target escapes the project root or is the project root itself
//!
//! Callers leave such specifiers untouched. A target that is the importing
//! directory or one of its ancestors is a directory import and translates to
//! the bare markers (`./`, `../`, `../../`).

use std::path::{Component, Path, PathBuf};

use path_clean::PathClean;

/// Marker for a specifier resolved against the importing file's directory.
pub const SAME_DIR: &str = "./";

/// Marker for one hop up from the importing file's directory.
pub const PARENT_DIR: &str = "../";

/// Translate a relative specifier into an alias subpath.
///
/// `relative` is the full specifier body (`../../shared/util`, `./helpers`,
/// or markers alone such as `../`). The result is expressed from
/// `project_root`, has no leading `./` and no alias prefix.
///
/// ```
/// use reroot_core::translate::to_alias;
/// use std::path::Path;
///
/// let alias = to_alias(Path::new("/p/app/a/b"), "../../shared/util", Path::new("/p/app"));
/// assert_eq!(alias.as_deref(), Some("shared/util"));
/// ```
pub fn to_alias(file_dir: &Path, relative: &str, project_root: &Path) -> Option<String> {
    let subpath = strip_relative_markers(relative);
    let markers_only = subpath.is_empty() && !relative.is_empty();
    if !markers_only && !is_normal_subpath(subpath) {
        return None;
    }

    let target = file_dir.join(relative).clean();
    let within_root = target.strip_prefix(project_root).ok()?;
    let subpath = slash_join(within_root)?;

    (!subpath.is_empty()).then_some(subpath)
}

/// Translate an alias subpath into a relative specifier.
///
/// `alias_subpath` is the portion after `<alias>/`. The result always starts
/// with `./` (target in or below `file_dir`) or one or more `../`. A target
/// that is `file_dir` or one of its ancestors yields the markers alone.
///
/// ```
/// use reroot_core::translate::to_relative;
/// use std::path::Path;
///
/// let rel = to_relative(Path::new("/p/app/x"), "x/helpers", Path::new("/p/app"));
/// assert_eq!(rel.as_deref(), Some("./helpers"));
/// ```
pub fn to_relative(file_dir: &Path, alias_subpath: &str, project_root: &Path) -> Option<String> {
    if !is_normal_subpath(alias_subpath) {
        return None;
    }

    let target = project_root.join(alias_subpath).clean();
    if !target.starts_with(project_root) {
        return None;
    }

    let (hops, rest) = diff_paths(&target, &file_dir.clean())?;
    let mut relative = if hops == 0 {
        SAME_DIR.to_string()
    } else {
        PARENT_DIR.repeat(hops)
    };
    relative.push_str(&rest.join("/"));
    Some(relative)
}

/// Strip the leading `./` or run of `../` markers from a relative specifier.
pub fn strip_relative_markers(relative: &str) -> &str {
    if let Some(rest) = relative.strip_prefix(SAME_DIR) {
        return rest;
    }

    let mut rest = relative;
    while let Some(stripped) = rest.strip_prefix(PARENT_DIR) {
        rest = stripped;
    }
    rest
}

/// A subpath made only of plain segments: non-empty, no `.`, `..` or `//`.
pub fn is_normal_subpath(subpath: &str) -> bool {
    !subpath.is_empty()
        && subpath
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
}

/// Express `target` relative to `base` as a number of parent hops plus the
/// remaining segments below the common ancestor.
fn diff_paths<'a>(target: &'a Path, base: &Path) -> Option<(usize, Vec<&'a str>)> {
    let mut target_components = target.components().peekable();
    let mut base_components = base.components().peekable();

    // Skip the shared prefix.
    while let (Some(t), Some(b)) = (target_components.peek(), base_components.peek()) {
        if t != b {
            break;
        }
        target_components.next();
        base_components.next();
    }

    let mut hops = 0;
    for component in base_components {
        match component {
            Component::Normal(_) => hops += 1,
            _ => return None,
        }
    }

    let mut rest = Vec::new();
    for component in target_components {
        match component {
            Component::Normal(segment) => rest.push(segment.to_str()?),
            _ => return None,
        }
    }

    Some((hops, rest))
}

/// Join the normal components of `path` with `/`, whatever the platform.
fn slash_join(path: &Path) -> Option<String> {
    let segments = path
        .components()
        .map(|component| match component {
            Component::Normal(segment) => segment.to_str(),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;
    Some(segments.join("/"))
}

/// Resolve a relative specifier against the importing directory.
///
/// Used to compare the targets of two specifiers that may differ only in
/// marker normalization.
pub fn resolve_relative(file_dir: &Path, relative: &str) -> PathBuf {
    file_dir.join(relative).clean()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "/project/app";

    fn root() -> &'static Path {
        Path::new(ROOT)
    }

    #[test]
    fn test_to_alias_parent_hops() {
        let dir = Path::new("/project/app/a/b");
        assert_eq!(
            to_alias(dir, "../../shared/util", root()).as_deref(),
            Some("shared/util")
        );
        assert_eq!(to_alias(dir, "../c", root()).as_deref(), Some("a/c"));
    }

    #[test]
    fn test_to_alias_same_dir() {
        let dir = Path::new("/project/app/a/b");
        assert_eq!(to_alias(dir, "./file", root()).as_deref(), Some("a/b/file"));
    }

    #[test]
    fn test_to_alias_at_root_level() {
        assert_eq!(to_alias(root(), "./page", root()).as_deref(), Some("page"));
    }

    #[test]
    fn test_to_alias_escaping_root_is_skipped() {
        let dir = Path::new("/project/app/a");
        assert_eq!(to_alias(dir, "../../outside", root()), None);
    }

    #[test]
    fn test_to_alias_nested_markers_are_skipped() {
        let dir = Path::new("/project/app/a");
        assert_eq!(to_alias(dir, "../x/../y", root()), None);
        assert_eq!(to_alias(dir, "./x/./y", root()), None);
        assert_eq!(to_alias(dir, "././y", root()), None);
        assert_eq!(to_alias(dir, "./x//y", root()), None);
    }

    #[test]
    fn test_to_alias_markers_only() {
        let dir = Path::new("/project/app/a/b");
        assert_eq!(to_alias(dir, "./", root()).as_deref(), Some("a/b"));
        assert_eq!(to_alias(dir, "../", root()).as_deref(), Some("a"));
        assert_eq!(to_alias(dir, "", root()), None);
        assert_eq!(to_alias(dir, "././", root()), None);
    }

    #[test]
    fn test_to_alias_onto_root_itself_is_skipped() {
        let dir = Path::new("/project/app/a");
        // "../" alone has no subpath to keep
        assert_eq!(to_alias(dir, "../", root()), None);
    }

    #[test]
    fn test_to_relative_same_dir_gets_dot_slash() {
        let dir = Path::new("/project/app/x");
        assert_eq!(
            to_relative(dir, "x/helpers", root()).as_deref(),
            Some("./helpers")
        );
        assert_eq!(
            to_relative(dir, "x/lib/deep", root()).as_deref(),
            Some("./lib/deep")
        );
    }

    #[test]
    fn test_to_relative_parent_hops() {
        let dir = Path::new("/project/app/a/b");
        assert_eq!(
            to_relative(dir, "shared/util", root()).as_deref(),
            Some("../../shared/util")
        );
        assert_eq!(to_relative(dir, "a/c", root()).as_deref(), Some("../c"));
    }

    #[test]
    fn test_to_relative_from_root_dir() {
        assert_eq!(
            to_relative(root(), "lib/db", root()).as_deref(),
            Some("./lib/db")
        );
    }

    #[test]
    fn test_to_relative_scan_root_narrower_than_project_root() {
        // project root is the parent of app/, as with a `@/* -> ./*` mapping
        let project = Path::new("/project");
        let dir = Path::new("/project/app/x");
        assert_eq!(
            to_relative(dir, "lib/utils", project).as_deref(),
            Some("../../lib/utils")
        );
        assert_eq!(
            to_alias(dir, "../../lib/utils", project).as_deref(),
            Some("lib/utils")
        );
    }

    #[test]
    fn test_to_relative_directory_imports_use_markers_only() {
        let dir = Path::new("/project/app/components/ui");
        assert_eq!(
            to_relative(dir, "components/ui", root()).as_deref(),
            Some("./")
        );
        assert_eq!(
            to_relative(dir, "components", root()).as_deref(),
            Some("../")
        );

        let deep = Path::new("/project/app/a/b/c");
        assert_eq!(to_relative(deep, "a", root()).as_deref(), Some("../../"));
        assert_eq!(to_alias(deep, "../../", root()).as_deref(), Some("a"));
    }

    #[test]
    fn test_to_relative_non_normal_subpaths_are_skipped() {
        let dir = Path::new("/project/app/a");
        assert_eq!(to_relative(dir, "../etc/passwd", root()), None);
        assert_eq!(to_relative(dir, "x/../y", root()), None);
        assert_eq!(to_relative(dir, "./x", root()), None);
        assert_eq!(to_relative(dir, "", root()), None);
    }

    #[test]
    fn test_strip_relative_markers() {
        assert_eq!(strip_relative_markers("./a/b"), "a/b");
        assert_eq!(strip_relative_markers("../../a"), "a");
        assert_eq!(strip_relative_markers("lodash"), "lodash");
        // only a single same-dir marker is a marker
        assert_eq!(strip_relative_markers("././a"), "./a");
    }

    #[test]
    fn test_is_normal_subpath() {
        assert!(is_normal_subpath("a"));
        assert!(is_normal_subpath("components/ui/button.tsx"));
        assert!(is_normal_subpath("@scope/pkg"));
        assert!(!is_normal_subpath(""));
        assert!(!is_normal_subpath("a/"));
        assert!(!is_normal_subpath("a/../b"));
        assert!(!is_normal_subpath("./a"));
    }

    #[test]
    fn test_resolve_relative() {
        let dir = Path::new("/project/app/a/b");
        assert_eq!(
            resolve_relative(dir, "../../shared/util"),
            PathBuf::from("/project/app/shared/util")
        );
    }
}
