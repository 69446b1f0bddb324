//! Global store of all definitions, indexed by file, scope, and kind,
//! with the type-inheritance index layered on top.

mod inheritance;
mod registry;

pub use inheritance::InheritanceIndex;
pub use registry::DefinitionRegistry;
