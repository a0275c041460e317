//! Type-token casing for embedded code samples.
//!
//! The doc comment engine accepts its casing normaliser as an injected
//! function, so alternative rules can be swapped in or stubbed out in
//! tests. This module supplies the default table covering Apex primitive
//! and collection types.

use std::{collections::HashMap, sync::LazyLock};

use once_cell::sync::Lazy;
use regex::Regex;

static TYPE_CASING: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("string", "String"),
        ("integer", "Integer"),
        ("boolean", "Boolean"),
        ("decimal", "Decimal"),
        ("double", "Double"),
        ("long", "Long"),
        ("date", "Date"),
        ("datetime", "Datetime"),
        ("time", "Time"),
        ("blob", "Blob"),
        ("id", "Id"),
        ("object", "Object"),
        ("sobject", "SObject"),
        ("list", "List"),
        ("set", "Set"),
        ("map", "Map"),
    ]
    .into_iter()
    .collect()
});

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_]*").expect("valid word regex"));

/// Rewrite primitive and collection type tokens to canonical casing.
///
/// The lookup is context-free: any word matching the fixed table is
/// recased, every other word is left untouched.
///
/// # Errors
///
/// Never fails; the `Result` signature accommodates fallible normalisers
/// injected in its place.
pub fn normalize_types(code: &str) -> anyhow::Result<String> {
    let out = WORD_RE.replace_all(code, |cap: &regex::Captures<'_>| {
        let word = &cap[0];
        TYPE_CASING
            .get(word.to_ascii_lowercase().as_str())
            .map_or_else(|| word.to_string(), |canon| (*canon).to_string())
    });
    Ok(out.into_owned())
}
