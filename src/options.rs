//! Layout options threaded through comment processing.

/// Immutable layout context for one comment.
///
/// The printer constructs a fresh value per comment, filling in
/// `comment_indent` from the column at which the comment attaches. Nothing
/// here is mutated during processing.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Maximum rendered line width, including indentation and the gutter.
    pub print_width: usize,
    /// Columns per indentation level.
    pub tab_width: usize,
    /// Indentation uses tab characters.
    pub use_tabs: bool,
    /// Indentation characters before the comment opener.
    pub comment_indent: usize,
    /// Embedded code arrived pre-formatted from an upstream pass and is
    /// emitted as-is instead of being routed through the casing delegate.
    pub embed_formatted: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            print_width: 80,
            tab_width: 2,
            use_tabs: false,
            comment_indent: 0,
            embed_formatted: false,
        }
    }
}
