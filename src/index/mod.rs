//! # Input contract
//!
//! The types the external per-file indexer produces: definitions,
//! references, lexical scope trees, and type-preprocessing hints, bundled
//! into one [`SemanticIndex`] per source file.
//!
//! The core only consumes these; it never parses source text or syntax
//! trees. Indices are immutable once handed to a
//! [`Project`](crate::semantic::Project); re-indexing a file produces a
//! fresh index that replaces the old one wholesale.

mod definition;
mod error;
mod reference;
mod scope;
mod semantic_index;
mod symbol_id;

pub use definition::{CollectionType, Definition, DefinitionKind, Initializer, Language};
pub use error::IngestError;
pub use reference::{AccessType, SymbolReference, TypeContext};
pub use scope::{Scope, ScopeId, ScopeKind, ScopeTree};
pub use semantic_index::{SemanticIndex, TypeHints};
pub use symbol_id::SymbolId;
