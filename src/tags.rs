//! Fixed vocabularies for doc tags and `@group` categories.
//!
//! Both tables are read-only and built once on first use; classification is
//! case-insensitive throughout.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// Tag names recognised after a leading `@` on a body line.
static DOC_TAGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "param",
        "return",
        "throws",
        "see",
        "since",
        "author",
        "version",
        "deprecated",
        "group",
        "example",
    ]
    .into_iter()
    .collect()
});

/// Canonical casing for the category word of a `@group` tag.
static GROUP_KINDS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("class", "Class"),
        ("classes", "Classes"),
        ("interface", "Interface"),
        ("enum", "Enum"),
        ("trigger", "Trigger"),
        ("exception", "Exception"),
        ("method", "Method"),
        ("property", "Property"),
        ("constructor", "Constructor"),
    ]
    .into_iter()
    .collect()
});

/// Look up the canonical lowercase form of a candidate tag name.
///
/// Unrecognised names return `None`; the segmenter renders those lines as
/// ordinary text rather than raising an error.
#[must_use]
pub fn canonical_tag(name: &str) -> Option<&'static str> {
    let lower = name.to_ascii_lowercase();
    DOC_TAGS.get(lower.as_str()).copied()
}

/// Look up the canonical casing for a `@group` category word.
#[must_use]
pub fn group_kind(word: &str) -> Option<&'static str> {
    let lower = word.to_ascii_lowercase();
    GROUP_KINDS.get(lower.as_str()).copied()
}
