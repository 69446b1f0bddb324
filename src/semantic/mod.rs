//! # Semantic Analysis
//!
//! Whole-program analysis over per-file semantic indices: definition and
//! type registries, scope-aware reference resolution, the resolution
//! cache, and call-graph construction. Everything is owned by a
//! [`Project`], mutated only through its entry points, and immutable
//! between mutations.

pub mod definitions;
pub mod graphs;
pub mod project;
pub mod resolution;
pub mod resolver;
pub mod resolvers;
pub mod type_registry;
pub mod types;

pub use definitions::DefinitionRegistry;
pub use graphs::{CallGraph, CallableNode};
pub use project::Project;
pub use resolution::ResolutionRegistry;
pub use resolver::{ExportRegistry, ModuleResolver, ScopeResolverIndex};
pub use resolvers::resolve_reference;
pub use type_registry::{FunctionCollection, TypeMemberInfo, TypeRegistry};
pub use types::{Confidence, ResolutionCandidate};

// Ingestion errors surface through Project::update_file.
pub use crate::index::IngestError;
