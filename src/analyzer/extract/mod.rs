//! Extractor Family
//!
//! One extractor per ecosystem, all producing the same [`Report`] shape by
//! pattern-matching declarations in raw source text. No tokenizer, no AST:
//! the regex layer trades parsing fidelity for breadth, and its known
//! false positives/negatives on malformed input are accepted behavior.
//!
//! Shared policy: matched files are recorded in the inventory even when
//! their content cannot be read (the read failure only skips declaration
//! scanning); test/spec files are dropped by filename pattern; only
//! exported/public declarations are recorded.

use std::fs;
use std::path::Path;

pub mod fallback;
pub mod go;
pub mod js_ts;
pub mod python;

/// Project name fallback: the last segment of the (resolved) root path.
pub(crate) fn project_name(root: &Path) -> String {
    root.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Best-effort read: any file that cannot be decoded contributes nothing.
pub(crate) fn read_source(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "skipping unreadable file");
            None
        }
    }
}

/// 1-based line number of a byte offset within the scanned text.
pub(crate) fn line_of_offset(content: &str, offset: usize) -> u32 {
    content[..offset].bytes().filter(|b| *b == b'\n').count() as u32 + 1
}

/// Ecosystem visibility rule shared by Go-style identifiers: exported iff
/// the first character is uppercase.
pub(crate) fn starts_uppercase(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}
