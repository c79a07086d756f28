use crate::config::Config;
use crate::errors::Result;
use crate::replacer::{self, Replacer};
use std::borrow::Cow;
use std::fmt;
use std::fs::{self, Metadata};
use std::io::Write;
use std::path::{Component, Path};
use walkdir::WalkDir;

/// Files at or above this size are never read.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Why a visited entry was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Directory,
    /// Symlinks, sockets, device nodes and the like.
    NotRegular,
    TooLarge,
    Excluded,
    NotIncluded,
    Unreadable,
    Unchanged,
}

/// The outcome of visiting a single filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Skipped(SkipReason),
    /// The needle was found. `written` is `true` only if the new content was
    /// actually persisted, so it stays `false` in dry runs and on write errors.
    Changed { written: bool },
}

/// Totals reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Files that changed, or would have changed in a dry run.
    pub changed: usize,
    pub applied: bool,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.applied {
            write!(f, "{} file(s) were updated.", self.changed)
        } else {
            write!(f, "{} file(s) WOULD have been updated.", self.changed)
        }
    }
}

/// Walks directory trees and applies the configured replacement to each file.
///
/// Report lines (`+ path`) go to the writer handed to [`Walker::walk`] or
/// [`Walker::visit`]; diagnostics go through the `log` facade.
pub struct Walker<'a> {
    config: &'a Config,
    replacer: Replacer,
}

impl<'a> Walker<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            config,
            replacer: Replacer::new(&config.needle, &config.replacement)?,
        })
    }

    /// Recursively visits every entry under `dir` in file-name order.
    ///
    /// Returns the number of files that changed. Per-entry errors are logged
    /// and skipped; if `dir` itself cannot be read the whole directory is
    /// skipped and `Ok(0)` is returned. Only failures writing to `out` are
    /// returned as errors.
    pub fn walk<W: Write>(&self, dir: &Path, out: &mut W) -> Result<usize> {
        let mut changed = 0;

        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    log::warn!("Cannot scan directory {}: {}; skipping.", dir.display(), err);
                    break;
                }
                Err(err) => {
                    let path = err.path().map(display_path).unwrap_or_default();
                    log::warn!("Error accessing path {}: {}", path, err);
                    continue;
                }
            };

            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(err) => {
                    log::warn!("Error accessing path {}: {}", display_path(entry.path()), err);
                    continue;
                }
            };

            if let Visit::Changed { .. } = self.visit(entry.path(), &metadata, out)? {
                changed += 1;
            }
        }

        Ok(changed)
    }

    /// Runs the per-file decision list for one entry.
    ///
    /// `metadata` must describe `path` itself, not a symlink target. The `+`
    /// line is written and the file counted before any write is attempted, so
    /// a failed write still reports the file as changed.
    pub fn visit<W: Write>(&self, path: &Path, metadata: &Metadata, out: &mut W) -> Result<Visit> {
        if metadata.is_dir() {
            return Ok(Visit::Skipped(SkipReason::Directory));
        }
        if !metadata.is_file() {
            return Ok(Visit::Skipped(SkipReason::NotRegular));
        }
        if metadata.len() >= MAX_FILE_SIZE {
            log::debug!("Skipping {} ({} bytes)", path.display(), metadata.len());
            return Ok(Visit::Skipped(SkipReason::TooLarge));
        }

        let shown = display_path(path);
        let patterns = &self.config.patterns;
        if let Some(pattern) = patterns.excluded(&shown) {
            log::info!("Skipping excluded file {} (matches {})", shown, pattern.as_str());
            return Ok(Visit::Skipped(SkipReason::Excluded));
        }
        if !patterns.included(&shown) {
            return Ok(Visit::Skipped(SkipReason::NotIncluded));
        }

        let content = match fs::read(path) {
            Ok(content) => content,
            Err(err) => {
                log::warn!("Error reading {}: {}. Skipping.", shown, err);
                return Ok(Visit::Skipped(SkipReason::Unreadable));
            }
        };

        let Some(new_content) = self.replacer.replace(&content) else {
            return Ok(Visit::Skipped(SkipReason::Unchanged));
        };

        writeln!(out, "+ {shown}")?;

        if !self.config.apply {
            return Ok(Visit::Changed { written: false });
        }

        match replacer::write_in_place(path, &new_content) {
            Ok(()) => Ok(Visit::Changed { written: true }),
            Err(err) => {
                log::warn!("Error writing file {}: {}.", shown, err);
                Ok(Visit::Changed { written: false })
            }
        }
    }
}

/// Runs the whole pipeline: header, one walk per directory, summary line.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Summary> {
    let walker = Walker::new(config)?;

    if !config.apply {
        writeln!(out, "No changes will be applied unless -f is given.")?;
    }

    let mut changed = 0;
    for dir in &config.directories {
        changed += walker.walk(dir, out)?;
    }

    let summary = Summary {
        changed,
        applied: config.apply,
    };
    writeln!(out, "{summary}")?;
    Ok(summary)
}

/// Renders a path for matching and output, without a leading `./`.
fn display_path(path: &Path) -> Cow<'_, str> {
    let mut components = path.components();
    match components.next() {
        Some(Component::CurDir) if components.clone().next().is_some() => {
            components.as_path().to_string_lossy()
        }
        _ => path.to_string_lossy(),
    }
}
