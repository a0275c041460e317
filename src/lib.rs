//! Normalises ApexDoc comments in Apex source files.
//!
//! A doc comment is re-segmented into typed content units: prose
//! paragraphs, blank separators, embedded `{@code}` samples, and recognised
//! doc tags. Prose is rewrapped to the configured print width, code samples
//! are preserved verbatim with their type tokens recased, and everything is
//! re-emitted behind a canonical ` * ` gutter.
//!
//! The engine is a pure function from comment text and layout options to
//! normalised text: it performs no I/O, holds no shared state between
//! comments, and degrades malformed input to best-effort output instead of
//! failing.

pub mod braces;
pub mod casing;
pub mod io;
pub mod options;
pub mod process;
pub mod reflow;
pub mod scan;
pub mod segment;
pub mod tags;
pub mod width;

pub use braces::BraceTracker;
pub use casing::normalize_types;
pub use options::FormatOptions;
pub use process::{process_stream, process_stream_opts};
pub use reflow::normalize_doc_comment;
pub use scan::is_doc_comment;
pub use segment::{CodeBlock, DocUnit, TagLine, segment};
pub use width::{MIN_BODY_WIDTH, continuation_indent, effective_width};
