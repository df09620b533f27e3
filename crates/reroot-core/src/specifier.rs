//! Import specifier scanner.
//!
//! Finds `from '<spec>'` and `import '<spec>'` fragments in source text and
//! classifies the quoted specifier by notation. This is not a JavaScript
//! parser: keywords are located with `memchr` and the fragment around each
//! hit is checked byte by byte.
//!
//! Surface shapes and notation classifiers are both tables. Adding a new
//! statement shape or notation means adding a row, not touching the scan loop.

use std::ops::Range;

use memchr::memmem;

use crate::config::Direction;
use crate::translate::{PARENT_DIR, SAME_DIR};

/// Which statement form introduced a specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// `import x from '<spec>'`, `export { x } from '<spec>'`
    NamedImport,
    /// `import '<spec>'`
    SideEffectImport,
}

/// Quote character around a specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    Single,
    Double,
}

impl Quote {
    fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'\'' => Some(Quote::Single),
            b'"' => Some(Quote::Double),
            _ => None,
        }
    }

    /// The quote character.
    pub fn as_char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }
}

/// Notation of a matched specifier.
///
/// Subpaths borrow from the scanned text and exclude the alias prefix or
/// relative markers. A relative subpath is empty for a directory import
/// written as markers alone (`./`, `../../`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation<'a> {
    /// `<alias>/<subpath>`
    AliasRooted { subpath: &'a str },
    /// `../` repeated `hops` times, then `<subpath>`
    RelativeUp { hops: usize, subpath: &'a str },
    /// `./<subpath>`
    RelativeSame { subpath: &'a str },
}

impl<'a> Notation<'a> {
    pub fn is_alias(&self) -> bool {
        matches!(self, Notation::AliasRooted { .. })
    }

    pub fn is_relative(&self) -> bool {
        matches!(
            self,
            Notation::RelativeUp { .. } | Notation::RelativeSame { .. }
        )
    }
}

/// A classified specifier found in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecifierMatch<'a> {
    pub kind: StatementKind,
    pub quote: Quote,
    /// Byte range from the keyword through the closing quote
    pub span: Range<usize>,
    /// Byte range of the specifier body, quotes excluded
    pub specifier_span: Range<usize>,
    /// The specifier body
    pub specifier: &'a str,
    pub notation: Notation<'a>,
}

/// One statement form the scanner recognizes.
struct SurfaceShape {
    kind: StatementKind,
    keyword: &'static [u8],
}

const SURFACE_SHAPES: &[SurfaceShape] = &[
    SurfaceShape {
        kind: StatementKind::NamedImport,
        keyword: b"from",
    },
    SurfaceShape {
        kind: StatementKind::SideEffectImport,
        keyword: b"import",
    },
];

type Classifier = for<'a> fn(&'a str, &str) -> Option<Notation<'a>>;

/// Tried in order; the first classifier that accepts a specifier wins.
const CLASSIFIERS: &[Classifier] = &[
    classify_alias_rooted,
    classify_relative_up,
    classify_relative_same,
];

fn classify_alias_rooted<'a>(specifier: &'a str, alias_prefix: &str) -> Option<Notation<'a>> {
    let subpath = specifier.strip_prefix(alias_prefix)?.strip_prefix('/')?;
    (!subpath.is_empty()).then_some(Notation::AliasRooted { subpath })
}

fn classify_relative_up<'a>(specifier: &'a str, _alias_prefix: &str) -> Option<Notation<'a>> {
    let mut hops = 0;
    let mut subpath = specifier;
    while let Some(rest) = subpath.strip_prefix(PARENT_DIR) {
        hops += 1;
        subpath = rest;
    }
    (hops > 0).then_some(Notation::RelativeUp { hops, subpath })
}

fn classify_relative_same<'a>(specifier: &'a str, _alias_prefix: &str) -> Option<Notation<'a>> {
    let subpath = specifier.strip_prefix(SAME_DIR)?;
    Some(Notation::RelativeSame { subpath })
}

/// Scanner for import specifiers under a given alias prefix.
#[derive(Debug, Clone)]
pub struct SpecifierMatcher {
    alias_prefix: String,
}

impl SpecifierMatcher {
    /// `alias_prefix` is the alias token without its trailing `/`.
    pub fn new(alias_prefix: impl Into<String>) -> Self {
        Self {
            alias_prefix: alias_prefix.into(),
        }
    }

    /// Every classified specifier in `text`, ordered by position.
    ///
    /// Specifiers that fit no notation (bare package names, URLs) are not
    /// returned. Overlapping candidates are resolved in favor of the one that
    /// starts first.
    pub fn scan<'a>(&self, text: &'a str) -> Vec<SpecifierMatch<'a>> {
        let bytes = text.as_bytes();
        let mut matches: Vec<SpecifierMatch<'a>> = Vec::new();

        for shape in SURFACE_SHAPES {
            for start in memmem::find_iter(bytes, shape.keyword) {
                if let Some(found) = self.match_at(text, start, shape) {
                    matches.push(found);
                }
            }
        }

        matches.sort_by_key(|m| m.span.start);
        let mut last_end = 0;
        matches.retain(|m| {
            if m.span.start < last_end {
                return false;
            }
            last_end = m.span.end;
            true
        });
        matches
    }

    /// Specifiers the given pass acts on.
    pub fn scan_for<'a>(&self, text: &'a str, direction: Direction) -> Vec<SpecifierMatch<'a>> {
        self.scan(text)
            .into_iter()
            .filter(|m| direction.accepts(&m.notation))
            .collect()
    }

    /// Cheap substring pre-check for the marker syntax a pass looks for.
    ///
    /// A `false` result guarantees [`scan_for`](Self::scan_for) finds nothing;
    /// `true` only means a full scan is worthwhile.
    pub fn has_candidates(&self, text: &str, direction: Direction) -> bool {
        let bytes = text.as_bytes();
        let markers: Vec<String> = match direction {
            Direction::ToRelative => vec![format!("{}/", self.alias_prefix)],
            Direction::ToAlias => vec![SAME_DIR.to_string(), PARENT_DIR.to_string()],
        };

        markers.iter().any(|marker| {
            [b'\'', b'"'].iter().any(|&quote| {
                let mut needle = Vec::with_capacity(marker.len() + 1);
                needle.push(quote);
                needle.extend_from_slice(marker.as_bytes());
                memmem::find(bytes, &needle).is_some()
            })
        })
    }

    fn match_at<'a>(
        &self,
        text: &'a str,
        start: usize,
        shape: &SurfaceShape,
    ) -> Option<SpecifierMatch<'a>> {
        let bytes = text.as_bytes();

        if start > 0 && is_identifier_byte(bytes[start - 1]) {
            return None;
        }

        let mut pos = start + shape.keyword.len();
        let whitespace_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos == whitespace_start {
            return None;
        }

        let quote = Quote::from_byte(*bytes.get(pos)?)?;
        let body_start = pos + 1;
        let body_len = find_closing_quote(&bytes[body_start..], quote)?;
        if body_len == 0 {
            return None;
        }
        let body_end = body_start + body_len;

        let specifier = &text[body_start..body_end];
        let notation = CLASSIFIERS
            .iter()
            .find_map(|classify| classify(specifier, &self.alias_prefix))?;

        Some(SpecifierMatch {
            kind: shape.kind,
            quote,
            span: start..body_end + 1,
            specifier_span: body_start..body_end,
            specifier,
            notation,
        })
    }
}

/// Length of the specifier body up to the matching quote.
///
/// A body never contains either quote character or a line break; hitting one
/// before the matching quote means this is not a plain string specifier.
fn find_closing_quote(bytes: &[u8], quote: Quote) -> Option<usize> {
    let closing = quote.as_char() as u8;
    for (i, &byte) in bytes.iter().enumerate() {
        match byte {
            b if b == closing => return Some(i),
            b'\'' | b'"' | b'\n' | b'\r' => return None,
            _ => {}
        }
    }
    None
}

fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'$' | b'.') || byte >= 0x80
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> SpecifierMatcher {
        SpecifierMatcher::new("@")
    }

    #[test]
    fn test_named_import_alias() {
        let text = r#"import { db } from "@/lib/db";"#;
        let found = matcher().scan(text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, StatementKind::NamedImport);
        assert_eq!(found[0].quote, Quote::Double);
        assert_eq!(found[0].specifier, "@/lib/db");
        assert_eq!(
            found[0].notation,
            Notation::AliasRooted { subpath: "lib/db" }
        );
        assert_eq!(&text[found[0].span.clone()], r#"from "@/lib/db""#);
    }

    #[test]
    fn test_side_effect_import_relative_same() {
        let text = "import './globals.css';\n";
        let found = matcher().scan(text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, StatementKind::SideEffectImport);
        assert_eq!(found[0].quote, Quote::Single);
        assert_eq!(
            found[0].notation,
            Notation::RelativeSame {
                subpath: "globals.css"
            }
        );
    }

    #[test]
    fn test_relative_up_counts_hops() {
        let found = matcher().scan(r#"export * from '../../shared/util';"#);
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].notation,
            Notation::RelativeUp {
                hops: 2,
                subpath: "shared/util"
            }
        );
    }

    #[test]
    fn test_bare_and_scoped_packages_are_ignored() {
        let text = r#"
import React from "react";
import { z } from 'zod';
import { Button } from "@radix-ui/react-button";
import "server-only";
"#;
        assert!(matcher().scan(text).is_empty());
    }

    #[test]
    fn test_dynamic_import_and_require_are_ignored() {
        let text = r#"
const page = await import("./page");
const util = require("../util");
"#;
        assert!(matcher().scan(text).is_empty());
    }

    #[test]
    fn test_mismatched_quotes_are_ignored() {
        assert!(matcher().scan(r#"import x from "./a';"#).is_empty());
        assert!(matcher().scan("import x from `./a`;").is_empty());
    }

    #[test]
    fn test_keyword_must_stand_alone() {
        assert!(matcher().scan(r#"const datafrom "./a""#).is_empty());
        assert!(matcher().scan(r#"reimport "./a""#).is_empty());
        assert!(matcher().scan(r#"x.from "./a""#).is_empty());
    }

    #[test]
    fn test_whitespace_is_required_and_may_span_lines() {
        assert!(matcher().scan(r#"import x from"./a""#).is_empty());
        let found = matcher().scan("import {\n  a,\n} from\n  \"./a\";");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_empty_specifier_and_bare_alias_are_ignored() {
        let text = r#"
import a from "";
import d from "@/";
"#;
        assert!(matcher().scan(text).is_empty());
    }

    #[test]
    fn test_markers_only_are_directory_imports() {
        let found = matcher().scan(r#"import b from "./"; import c from '../../';"#);
        let notations: Vec<_> = found.iter().map(|m| m.notation).collect();
        assert_eq!(
            notations,
            vec![
                Notation::RelativeSame { subpath: "" },
                Notation::RelativeUp {
                    hops: 2,
                    subpath: ""
                },
            ]
        );
    }

    #[test]
    fn test_multiple_matches_are_ordered_by_position() {
        let text = r#"
import "./side-effect";
import { a } from "@/a";
import type { B } from '../b';
export { c } from "./c";
"#;
        let found = matcher().scan(text);
        let specifiers: Vec<_> = found.iter().map(|m| m.specifier).collect();
        assert_eq!(specifiers, vec!["./side-effect", "@/a", "../b", "./c"]);
        assert!(found.windows(2).all(|w| w[0].span.end <= w[1].span.start));
    }

    #[test]
    fn test_scan_for_is_notation_directional() {
        let text = r#"import { a } from "@/a"; import { b } from "./b";"#;
        let to_relative = matcher().scan_for(text, Direction::ToRelative);
        assert_eq!(to_relative.len(), 1);
        assert_eq!(to_relative[0].specifier, "@/a");

        let to_alias = matcher().scan_for(text, Direction::ToAlias);
        assert_eq!(to_alias.len(), 1);
        assert_eq!(to_alias[0].specifier, "./b");
    }

    #[test]
    fn test_custom_alias_prefix() {
        let m = SpecifierMatcher::new("~");
        let found = m.scan(r#"import x from "~/x"; import y from "@/y";"#);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].notation, Notation::AliasRooted { subpath: "x" });
    }

    #[test]
    fn test_classifier_order_alias_wins() {
        // An alias token that itself looks relative is rejected by config
        // validation, but classification order still decides ties.
        let m = SpecifierMatcher::new("..");
        let found = m.scan(r#"import x from "../x";"#);
        assert_eq!(found.len(), 1);
        assert!(found[0].notation.is_alias());
    }

    #[test]
    fn test_has_candidates() {
        let m = matcher();
        let alias = r#"import { a } from "@/a";"#;
        let relative = r#"import { b } from '../b';"#;
        let bare = r#"import React from "react";"#;

        assert!(m.has_candidates(alias, Direction::ToRelative));
        assert!(!m.has_candidates(alias, Direction::ToAlias));
        assert!(m.has_candidates(relative, Direction::ToAlias));
        assert!(!m.has_candidates(relative, Direction::ToRelative));
        assert!(!m.has_candidates(bare, Direction::ToAlias));
        assert!(!m.has_candidates(bare, Direction::ToRelative));
    }

    #[test]
    fn test_non_ascii_text_is_sliced_safely() {
        let text = "// héllo wörld\nimport { ü } from \"./ü\";\n";
        let found = matcher().scan(text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].specifier, "./ü");
    }
}
