//! High-level processing of source line streams.
//!
//! Comments are located with a line-level scan; no attempt is made to parse
//! the surrounding language. Each doc comment is normalised independently
//! with a fresh accumulator, so comments never share state.

use crate::{
    casing::normalize_types, options::FormatOptions, reflow::normalize_doc_comment,
    scan::is_doc_comment,
};

/// Normalise every doc comment in a stream of source lines, using default
/// options.
#[must_use]
pub fn process_stream(lines: &[String]) -> Vec<String> {
    process_stream_opts(lines, &FormatOptions::default())
}

/// Normalise every doc comment in a stream of source lines.
///
/// A comment region opens on a line whose trimmed form starts with `/**`
/// without closing on the same line, and ends on the line containing `*/`.
/// The opening line's whitespace prefix is re-applied to every emitted
/// comment line, and its character count becomes the comment indent for
/// width calculations. Everything else passes through untouched, including
/// single-line doc comments, non-doc block comments, and an unterminated
/// comment at end of input.
#[must_use]
pub fn process_stream_opts(lines: &[String], opts: &FormatOptions) -> Vec<String> {
    let mut out = Vec::new();
    let mut buf: Vec<String> = Vec::new();
    let mut indent = String::new();
    let mut in_comment = false;

    for line in lines {
        if in_comment {
            buf.push(line.clone());
            if line.contains("*/") {
                flush_comment(&mut out, &buf, &indent, opts);
                buf.clear();
                in_comment = false;
            }
            continue;
        }

        let trimmed = line.trim_start();
        if trimmed.starts_with("/**") && !trimmed.contains("*/") {
            indent = line[..line.len() - trimmed.len()].to_string();
            buf.push(line.clone());
            in_comment = true;
            continue;
        }

        out.push(line.clone());
    }

    out.extend(buf);
    out
}

fn flush_comment(out: &mut Vec<String>, buf: &[String], indent: &str, opts: &FormatOptions) {
    let value = buf.join("\n");
    if !is_doc_comment(&value) {
        out.extend(buf.iter().cloned());
        return;
    }
    let ctx = FormatOptions {
        comment_indent: indent.chars().count(),
        ..*opts
    };
    let normalized = normalize_doc_comment(&value, &ctx, normalize_types);
    for line in normalized.lines() {
        out.push(format!("{indent}{line}"));
    }
}
