//! Width arithmetic for comment bodies.

use crate::options::FormatOptions;

/// Gutter prefix applied to body lines that carry content.
pub const GUTTER: &str = " * ";

/// Floor for the usable body width.
pub const MIN_BODY_WIDTH: usize = 20;

/// Body indentation for wrapped continuation lines of a margin-level
/// comment.
pub const MARGIN_BODY_INDENT: usize = 2;

/// Usable text width for wrapped body lines.
///
/// Subtracts the comment's indentation columns and the gutter from the
/// print width. With `use_tabs` each indentation character occupies a full
/// tab stop. The result never drops below [`MIN_BODY_WIDTH`], so a
/// pathologically narrow configuration still wraps one word per line
/// instead of emitting nothing.
#[must_use]
pub fn effective_width(opts: &FormatOptions) -> usize {
    let indent = if opts.use_tabs {
        opts.comment_indent * opts.tab_width
    } else {
        opts.comment_indent
    };
    opts.print_width
        .saturating_sub(indent + GUTTER.len())
        .max(MIN_BODY_WIDTH)
}

/// Extra indentation for wrapped continuation lines.
///
/// Margin-level comments indent continuations by [`MARGIN_BODY_INDENT`];
/// indented comments add nothing, their alignment being supplied by the
/// enclosing context.
#[must_use]
pub fn continuation_indent(comment_indent: usize) -> usize {
    if comment_indent == 0 {
        MARGIN_BODY_INDENT
    } else {
        0
    }
}
