//! Scope-aware name resolution: the scope resolver chain, module path
//! resolution, and export maps with re-export chain following.

mod exports;
mod module_resolver;
mod scope_resolver;

pub use exports::ExportRegistry;
pub use module_resolver::ModuleResolver;
pub use scope_resolver::ScopeResolverIndex;

#[cfg(test)]
mod tests;
