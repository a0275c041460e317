//! File helpers for rewriting source files.

use std::{fs, path::Path};

use crate::{options::FormatOptions, process::process_stream_opts};

/// Rewrite a file in place with normalised doc comments.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite(path: &Path, opts: &FormatOptions) -> std::io::Result<()> {
    let text = fs::read_to_string(path)?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    let fixed = process_stream_opts(&lines, opts);
    fs::write(path, fixed.join("\n") + "\n")
}
