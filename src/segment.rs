//! Splits a doc comment body into typed content units.
//!
//! Segmentation is a fold over physical lines: a reducer consumes one line
//! at a time together with its byte offset and carries the open paragraph,
//! the open code block, and the units emitted so far. Each step is a
//! function of that state alone, so the reducer can be driven line by line
//! in tests.

use std::sync::LazyLock;

use regex::Regex;

use crate::{braces::BraceTracker, scan::strip_gutter, tags};

/// Literal opener of an embedded code sample.
pub const CODE_TAG: &str = "{@code";

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@([A-Za-z]+)(\s.*)?$").expect("valid doc tag regex"));

/// One content unit of a doc comment body.
#[derive(Debug, PartialEq, Eq)]
pub enum DocUnit {
    /// Consecutive prose lines forming one paragraph.
    Text {
        /// Gutter-stripped source lines, in order.
        lines: Vec<String>,
    },
    /// A collapsed run of blank separator lines.
    ParagraphBreak,
    /// One `{@code ... }` span, possibly covering several lines.
    Code(CodeBlock),
    /// A recognised `@tag` line.
    Tag(TagLine),
}

/// An embedded code sample delimited by balanced braces.
#[derive(Debug, PartialEq, Eq)]
pub struct CodeBlock {
    /// Captured sample text, gutter stripped, indentation preserved.
    pub raw: String,
    /// Byte offset of the opening line within the comment body.
    pub start: usize,
    /// Byte offset just past the closing line within the comment body.
    pub end: usize,
    /// Output of the casing delegate, filled in before rendering.
    pub normalized: Option<String>,
}

/// A doc tag line such as `@param name description`.
#[derive(Debug, PartialEq, Eq)]
pub struct TagLine {
    /// Canonical lowercase tag name.
    pub name: &'static str,
    /// Everything after the tag token, verbatim.
    pub content: String,
}

#[derive(Debug, Default)]
struct SegmentState {
    units: Vec<DocUnit>,
    paragraph: Vec<String>,
    block: Option<OpenBlock>,
}

#[derive(Debug)]
struct OpenBlock {
    tracker: BraceTracker,
    lines: Vec<String>,
    start: usize,
}

impl SegmentState {
    fn step(mut self, offset: usize, line: &str) -> Self {
        let content = strip_gutter(line);

        if let Some(block) = self.block.as_mut() {
            block.lines.push(content.trim_end().to_string());
            if block.tracker.observe(content) {
                self.close_block(offset + line.len());
            }
            return self;
        }

        let trimmed = content.trim();
        if trimmed.is_empty() {
            self.flush_paragraph();
            if !self.units.is_empty() && self.units.last() != Some(&DocUnit::ParagraphBreak) {
                self.units.push(DocUnit::ParagraphBreak);
            }
            return self;
        }

        if trimmed.starts_with(CODE_TAG) {
            self.flush_paragraph();
            let mut tracker = BraceTracker::new();
            let closed = tracker.observe(trimmed);
            self.block = Some(OpenBlock {
                tracker,
                lines: vec![trimmed.to_string()],
                start: offset,
            });
            if closed {
                self.close_block(offset + line.len());
            }
            return self;
        }

        if let Some(cap) = TAG_RE.captures(trimmed)
            && let Some(name) = tags::canonical_tag(&cap[1])
        {
            self.flush_paragraph();
            let content = cap.get(2).map_or("", |m| m.as_str());
            self.units.push(DocUnit::Tag(TagLine {
                name,
                content: content.trim_end().to_string(),
            }));
            return self;
        }

        self.paragraph.push(content.trim_end().to_string());
        self
    }

    fn close_block(&mut self, end: usize) {
        if let Some(block) = self.block.take() {
            self.units.push(DocUnit::Code(CodeBlock {
                raw: block.lines.join("\n"),
                start: block.start,
                end,
                normalized: None,
            }));
        }
    }

    fn flush_paragraph(&mut self) {
        if !self.paragraph.is_empty() {
            let lines = std::mem::take(&mut self.paragraph);
            self.units.push(DocUnit::Text { lines });
        }
    }

    fn finish(mut self, body_len: usize) -> Vec<DocUnit> {
        if let Some(block) = self.block.as_mut() {
            while block.lines.last().is_some_and(|l| l.trim().is_empty()) {
                block.lines.pop();
            }
        }
        self.close_block(body_len);
        self.flush_paragraph();
        if self.units.last() == Some(&DocUnit::ParagraphBreak) {
            self.units.pop();
        }
        self.units
    }
}

fn offset_lines(body: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    let mut offset = 0;
    body.split('\n').map(move |line| {
        let start = offset;
        offset += line.len() + 1;
        (start, line.strip_suffix('\r').unwrap_or(line))
    })
}

/// Split a comment body into ordered content units.
///
/// Units appear in strictly increasing offset order. Runs of blank lines
/// collapse into one [`DocUnit::ParagraphBreak`]; breaks at the very start
/// or end of the body are dropped. An embedded code block that never closes
/// extends to the body's end with trailing blank lines trimmed, and no
/// error is raised.
#[must_use]
pub fn segment(body: &str) -> Vec<DocUnit> {
    offset_lines(body)
        .fold(SegmentState::default(), |state, (offset, line)| {
            state.step(offset, line)
        })
        .finish(body.len())
}
