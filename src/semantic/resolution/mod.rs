//! The resolution cache: every reference's candidate list, keyed by
//! file and location, owned per file for invalidation.

mod registry;

pub use registry::{ResolutionRegistry, ResolvedReference};
