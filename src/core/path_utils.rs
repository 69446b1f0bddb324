//! Path normalization utilities for consistent file path handling.
//!
//! File paths arrive from the external indexer in whatever form its file
//! walker produced. All registries key by the normalized form so that
//! `./src/a.py`, `src/./a.py`, and `src\a.py` land in the same bucket.

use std::fmt;
use std::sync::Arc;

/// An interned, normalized file path.
///
/// Cheap to clone (`Arc<str>` internally); equality and hashing operate on
/// the normalized text. Every registry in the crate keys files by this type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilePath(Arc<str>);

impl FilePath {
    /// Create a path, normalizing it first.
    pub fn new(path: &str) -> Self {
        Self(Arc::from(normalize_path(path).as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The directory portion of the path, without a trailing slash.
    /// Empty string for paths with no directory component.
    pub fn parent_dir(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) => &self.0[..idx],
            None => "",
        }
    }

    /// The final path segment (file name including extension).
    pub fn file_name(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FilePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// Normalize a file path for consistent storage and lookup.
///
/// Converts backslashes to forward slashes and folds `.` and `..` segments.
/// Purely textual: the file system is never consulted, because the core
/// never performs I/O; paths are opaque keys handed in by the indexer.
///
/// # Examples
///
/// ```
/// use refgraph::core::normalize_path;
///
/// assert_eq!(normalize_path("src/./handlers/../main.py"), "src/main.py");
/// assert_eq!(normalize_path("src\\util.ts"), "src/util.ts");
/// ```
pub fn normalize_path(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let absolute = unified.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                // Pop a real segment if we have one; otherwise keep the
                // leading ".." (relative path escaping its root).
                if matches!(segments.last(), Some(&s) if s != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{joined}")
    } else {
        joined
    }
}
