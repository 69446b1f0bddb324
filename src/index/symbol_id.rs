use std::fmt;
use std::sync::Arc;

use crate::core::{FilePath, Location};

/// Globally unique identifier for a definition.
///
/// Derived from (kind, file, location, name), so ids are stable across
/// re-indexing of unchanged code: the same declaration in the same place
/// always yields the same id, regardless of what else changed in the
/// project. Anonymous functions get synthetic ids of the form
/// `anon:<file>:<line>:<col>`.
///
/// Cheap to clone (`Arc<str>` internally).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(Arc<str>);

impl SymbolId {
    /// Derive the id for a named definition.
    pub fn derive(kind: &str, file: &FilePath, location: Location, name: &str) -> Self {
        Self(Arc::from(
            format!("{kind}:{file}:{location}:{name}").as_str(),
        ))
    }

    /// Synthetic id for an anonymous function literal.
    pub fn anonymous(file: &FilePath, location: Location) -> Self {
        Self(Arc::from(format!("anon:{file}:{location}").as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id names an anonymous function.
    pub fn is_anonymous(&self) -> bool {
        self.0.starts_with("anon:")
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}
