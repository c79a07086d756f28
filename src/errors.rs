use thiserror::Error;

/// Failures that end a run of `re`.
///
/// Problems with individual files (unreadable, unwritable, inaccessible) are
/// logged by the walker and never become an `Error`.
#[derive(Error, Debug)]
pub enum Error {
    /// Writing the report to stdout, or writing back a file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The search text or a wildcard could not be compiled.
    #[error("Pattern compilation failed: {0}")]
    Regex(#[from] regex::Error),

    /// Invalid arguments, such as empty search text.
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Config(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Config(s.to_string())
    }
}
