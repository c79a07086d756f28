use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;
use std::process;

/// Filename patterns excluded when `-e` is not given: common version-control directories.
pub const DEFAULT_EXCLUDES: &str = ".bzr,CVS,.git,.hg,.svn";

/// Recursive, literal find-and-replace across directory trees.
///
/// Nothing is written unless `-f` is given; without it `re` only reports the
/// files that would change.
#[derive(Parser, Debug)]
#[command(
    name = "re",
    version,
    about = "Recursive literal find-and-replace, dry run by default",
    override_usage = "re [options] SEARCH REPLACEMENT [DIR ...]",
    arg_required_else_help = true,
    after_help = "EXAMPLES:
  re foo bar                       # Preview replacing foo with bar under .
  re -f foo bar src/ docs/         # Apply in two directories
  re -i '*.js,*.html' -f old new   # Only touch JS and HTML files
  re -e '*.git*,*/vendor/*' a b    # Custom excludes"
)]
pub struct Args {
    /// Apply changes (default: dry run only).
    #[arg(short = 'f', long = "apply")]
    pub apply: bool,

    /// Comma-separated list of excluded files, wildcards supported.
    #[arg(short = 'e', long = "exclude", value_name = "LIST", default_value = DEFAULT_EXCLUDES)]
    pub exclude: String,

    /// Comma-separated list of included files, wildcards supported, e.g. "*.js,*.html,*index.*".
    #[arg(short = 'i', long = "include", value_name = "LIST")]
    pub include: Option<String>,

    /// The literal text to search for.
    #[arg(value_name = "SEARCH")]
    pub search: String,

    /// The text to replace every occurrence with.
    #[arg(value_name = "REPLACEMENT")]
    pub replacement: String,

    /// Directories to process. Defaults to the current directory.
    #[arg(value_name = "DIR")]
    pub dirs: Vec<PathBuf>,
}

/// Parses command-line arguments and returns the populated `Args` struct.
///
/// Help and version requests exit with 0. Every other parse failure, including
/// missing SEARCH/REPLACEMENT, prints the usage to stderr and exits with 1.
pub fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            process::exit(1);
        }
    }
}
