//! Ingestion-time data-integrity errors.

use thiserror::Error;

use crate::core::FilePath;

/// A structural violation in an incoming semantic index.
///
/// These are the only errors the core ever escalates: a malformed index is
/// rejected whole at ingestion, so downstream lookups never have to defend
/// against dangling scope ids. Resolution itself is total and reports
/// failures as empty candidate sets, never through this type.
#[derive(Debug, Error)]
pub enum IngestError {
    /// A definition names a scope that does not exist in the file's tree.
    #[error("definition '{name}' in {file} references unknown scope {scope}")]
    DanglingDefinitionScope {
        file: FilePath,
        name: String,
        scope: u32,
    },

    /// A reference names a scope that does not exist in the file's tree.
    #[error("reference '{name}' in {file} references unknown scope {scope}")]
    DanglingReferenceScope {
        file: FilePath,
        name: String,
        scope: u32,
    },

    /// A scope's parent pointer is out of range.
    #[error("scope {scope} in {file} has unknown parent {parent}")]
    DanglingScopeParent {
        file: FilePath,
        scope: u32,
        parent: u32,
    },

    /// The scope tree's parent chain loops.
    #[error("scope {scope} in {file} is part of a parent cycle")]
    CyclicScopeParents { file: FilePath, scope: u32 },

    /// The scope tree is empty or its root is not a module scope.
    #[error("scope tree of {file} has no module root")]
    MissingModuleRoot { file: FilePath },
}
