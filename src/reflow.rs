//! Reflow and recomposition of doc comment units.
//!
//! Prose paragraphs are joined and greedily rewrapped to the effective
//! width; code samples and tag lines are emitted verbatim. Every body line
//! is re-prefixed with the canonical gutter and the whole comment is closed
//! back up with its `/**` and `*/` markers.

use textwrap::{Options as WrapOptions, WrapAlgorithm};

use crate::{
    options::FormatOptions,
    scan::{comment_body, is_doc_comment},
    segment::{CodeBlock, DocUnit, TagLine, segment},
    tags,
    width::{GUTTER, continuation_indent, effective_width},
};

/// Normalise a full doc comment payload.
///
/// `value` spans from the opening marker to the closing marker inclusive.
/// Payloads that are not structured doc comments come back unchanged. Each
/// embedded code sample is routed through `normalize_code` unless
/// `opts.embed_formatted` marks the text as already formatted upstream; a
/// delegate error falls back to the raw captured sample, so a misbehaving
/// normaliser degrades output quality without aborting the print. Running
/// the function on its own output is a no-op.
///
/// # Examples
///
/// ```
/// use apexdocfix::{FormatOptions, normalize_doc_comment, normalize_types};
///
/// let comment = "/**\n * Example:\n * {@code string name = 'test'; }\n */";
/// let out = normalize_doc_comment(comment, &FormatOptions::default(), normalize_types);
/// assert!(out.contains("{@code String name = 'test'; }"));
/// ```
pub fn normalize_doc_comment<F>(value: &str, opts: &FormatOptions, normalize_code: F) -> String
where
    F: Fn(&str) -> anyhow::Result<String>,
{
    if !is_doc_comment(value) {
        return value.to_string();
    }

    let mut units = segment(comment_body(value));
    if !opts.embed_formatted {
        for unit in &mut units {
            if let DocUnit::Code(block) = unit {
                block.normalized = normalize_code(&block.raw).ok();
            }
        }
    }

    let mut lines = vec![String::from("/**")];
    for unit in &units {
        render_unit(unit, opts, &mut lines);
    }
    lines.push(String::from(" */"));
    lines.join("\n")
}

fn render_unit(unit: &DocUnit, opts: &FormatOptions, out: &mut Vec<String>) {
    match unit {
        DocUnit::Text { lines } => render_text(lines, opts, out),
        DocUnit::ParagraphBreak => out.push(String::from(" *")),
        DocUnit::Code(block) => render_code(block, out),
        DocUnit::Tag(tag) => out.push(render_tag(tag)),
    }
}

fn render_text(lines: &[String], opts: &FormatOptions, out: &mut Vec<String>) {
    let joined = lines
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join(" ");
    let indent = " ".repeat(continuation_indent(opts.comment_indent));
    let wrap_opts = WrapOptions::new(effective_width(opts))
        .break_words(false)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .subsequent_indent(&indent);
    for line in textwrap::wrap(&joined, wrap_opts) {
        out.push(gutter_line(&line));
    }
}

fn render_code(block: &CodeBlock, out: &mut Vec<String>) {
    let text = block.normalized.as_deref().unwrap_or(&block.raw);
    for line in text.lines() {
        out.push(gutter_line(line.trim_end()));
    }
}

fn render_tag(tag: &TagLine) -> String {
    if tag.name == "group" {
        format!("{GUTTER}@{}{}", tag.name, recase_group(&tag.content))
    } else {
        format!("{GUTTER}@{}{}", tag.name, tag.content)
    }
}

/// Replace the first word of a `@group` value through the category table,
/// leaving the remainder untouched, internal whitespace runs included.
fn recase_group(content: &str) -> String {
    let word_start = content.len() - content.trim_start().len();
    let rest = &content[word_start..];
    let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    match tags::group_kind(&rest[..word_end]) {
        Some(kind) => format!("{}{}{}", &content[..word_start], kind, &rest[word_end..]),
        None => content.to_string(),
    }
}

fn gutter_line(text: &str) -> String {
    if text.is_empty() {
        String::from(" *")
    } else {
        format!("{GUTTER}{text}")
    }
}
