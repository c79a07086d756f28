use crate::errors::Result;
use regex::bytes::{NoExpand, Regex};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Literal find-and-replace over raw file contents.
///
/// The needle is escaped and compiled once, so matching is a plain substring
/// search: all non-overlapping occurrences, left to right, with scanning
/// resuming right after each replaced region. Working on bytes means files
/// that are not valid UTF-8 are still handled.
pub struct Replacer {
    needle: Regex,
    replacement: Vec<u8>,
}

impl Replacer {
    /// Creates a `Replacer` for the given needle and replacement.
    ///
    /// An empty needle is rejected: it would match between every byte.
    pub fn new(needle: &str, replacement: &str) -> Result<Self> {
        if needle.is_empty() {
            return Err("search text must not be empty".into());
        }
        Ok(Self {
            needle: Regex::new(&regex::escape(needle))?,
            replacement: replacement.as_bytes().to_vec(),
        })
    }

    /// Replaces every occurrence of the needle in `content`.
    ///
    /// Returns `None` when the result is byte-for-byte identical to the input,
    /// either because the needle was absent or because it equals the replacement.
    pub fn replace(&self, content: &[u8]) -> Option<Vec<u8>> {
        let replaced = self
            .needle
            .replace_all(content, NoExpand(self.replacement.as_slice()));
        if *replaced == *content {
            None
        } else {
            Some(replaced.into_owned())
        }
    }
}

/// Overwrites the existing file at `path` with `contents`.
///
/// The file is opened for writing and truncated, never recreated, so the
/// inode keeps its permission mode, owner and hard links. A missing or
/// read-only file is an error.
pub fn write_in_place(path: &Path, contents: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new().write(true).truncate(true).open(path)?;
    file.write_all(contents)?;
    file.flush()?;
    Ok(())
}
