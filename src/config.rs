use crate::cli::Args;
use crate::errors::Result;
use crate::patterns::FilePatterns;
use std::path::PathBuf;

/// Validated settings for one run, built once from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    /// The literal text to search for. Never empty.
    pub needle: String,
    /// The text every occurrence of `needle` is replaced with.
    pub replacement: String,
    /// Directories to walk, in the order given.
    pub directories: Vec<PathBuf>,
    /// Write changes to disk. When `false` the run only reports.
    pub apply: bool,
    pub patterns: FilePatterns,
}

impl Config {
    /// Resolves parsed arguments into a `Config`, compiling the filename patterns.
    ///
    /// Fails when the search text is empty or a pattern cannot be compiled.
    pub fn from_args(args: Args) -> Result<Self> {
        if args.search.is_empty() {
            return Err("search text must not be empty".into());
        }

        let directories = if args.dirs.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            args.dirs
        };

        let patterns = FilePatterns::new(&args.exclude, args.include.as_deref().unwrap_or(""))?;

        Ok(Self {
            needle: args.search,
            replacement: args.replacement,
            directories,
            apply: args.apply,
            patterns,
        })
    }
}
