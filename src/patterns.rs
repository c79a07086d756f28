use crate::errors::Result;
use regex::Regex;

/// A filename wildcard compiled to an anchored regex.
///
/// `*` matches any run of characters (including none), `?` matches exactly one
/// character, and everything else matches itself. The whole candidate string
/// must match; a match on part of a path does not count.
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    source: String,
    regex: Regex,
}

impl WildcardPattern {
    /// Compiles a single wildcard pattern.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&wildcard_to_regex(pattern))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Returns `true` if the pattern matches the entire `candidate`.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// The wildcard text this pattern was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// Translates a wildcard into regex syntax, escaping every literal character.
fn wildcard_to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 2);
    out.push('^');
    let mut buf = [0u8; 4];
    for c in pattern.chars() {
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            _ => out.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }
    out.push('$');
    out
}

/// Compiles a comma-separated list of wildcards, keeping input order.
///
/// Empty segments are dropped, so `",*.rs,,*.md,"` yields two patterns.
pub fn parse_wildcard_list(list: &str) -> Result<Vec<WildcardPattern>> {
    list.split(',')
        .filter(|segment| !segment.is_empty())
        .map(WildcardPattern::new)
        .collect()
}

/// The include and exclude filters applied to every visited file.
#[derive(Debug, Clone, Default)]
pub struct FilePatterns {
    pub excludes: Vec<WildcardPattern>,
    pub includes: Vec<WildcardPattern>,
}

impl FilePatterns {
    /// Compiles both comma-separated lists.
    pub fn new(excludes: &str, includes: &str) -> Result<Self> {
        Ok(Self {
            excludes: parse_wildcard_list(excludes)?,
            includes: parse_wildcard_list(includes)?,
        })
    }

    /// Returns the first exclude pattern matching `path`, if any.
    pub fn excluded(&self, path: &str) -> Option<&WildcardPattern> {
        self.excludes.iter().find(|p| p.is_match(path))
    }

    /// Returns `true` when no includes are configured or any of them matches `path`.
    pub fn included(&self, path: &str) -> bool {
        self.includes.is_empty() || self.includes.iter().any(|p| p.is_match(path))
    }
}
