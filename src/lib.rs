//! # refgraph
//!
//! Core library for multi-language symbol resolution, reference analysis,
//! and call graph construction.
//!
//! The crate consumes one [`index::SemanticIndex`] per source file (produced
//! by an external tree-sitter based extractor), resolves every reference to
//! concrete definitions, and builds a whole-program call graph with entry
//! point detection.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! semantic  → registries, resolvers, resolution cache, call graph, Project
//!   ↓
//! index     → input contract: definitions, references, scope trees, hints
//!   ↓
//! core      → primitives (Location, FilePath, path normalization)
//! ```

/// Foundation types: Location, FilePath, path normalization
pub mod core;

/// Input contract: per-file semantic indices from the external extractor
pub mod index;

/// Semantic analysis: registries, reference resolution, call graph
pub mod semantic;

// Re-export foundation types
pub use core::{FilePath, Location, normalize_path};

// Re-export the input contract types most callers touch
pub use index::{Definition, ScopeId, SemanticIndex, SymbolId, SymbolReference};

// Re-export the main entry points
pub use semantic::{CallGraph, Confidence, IngestError, Project, ResolutionCandidate};
