//! Per-file derived type data: variable→type bindings, type member maps,
//! alias targets, function collections, and derived-variable links.

mod collections;
mod members;
mod registry;

pub use collections::FunctionCollection;
pub use members::TypeMemberInfo;
pub use registry::TypeRegistry;
