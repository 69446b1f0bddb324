use rustc_hash::FxHashMap;

use crate::core::{FilePath, Location};

use super::definition::{Definition, Language};
use super::error::IngestError;
use super::reference::SymbolReference;
use super::scope::{ScopeKind, ScopeTree};

/// Type-preprocessing hints extracted alongside definitions.
///
/// These capture facts that are syntactically local (annotations and
/// constructions at a specific location) so the resolvers never have to
/// look at source text.
#[derive(Debug, Clone, Default)]
pub struct TypeHints {
    /// Binding location → annotated type name (`x: Foo` records `Foo` at
    /// the location of `x`).
    pub type_bindings: FxHashMap<Location, String>,
    /// Binding location → constructed class name (`x = new Foo()` records
    /// `Foo` at the location of `x`).
    pub constructor_bindings: FxHashMap<Location, String>,
}

/// Everything the external indexer extracted from one source file.
///
/// Immutable once constructed; a file update replaces the whole index.
#[derive(Debug, Clone)]
pub struct SemanticIndex {
    pub file: FilePath,
    pub language: Language,
    pub definitions: Vec<Definition>,
    pub references: Vec<SymbolReference>,
    pub scopes: ScopeTree,
    pub type_hints: TypeHints,
}

impl SemanticIndex {
    /// Check structural integrity: every definition and reference must sit
    /// in a scope that exists, every scope parent must exist, and the
    /// parent chain must be acyclic.
    ///
    /// Violations are reported once here, at ingestion; nothing downstream
    /// re-validates.
    pub fn validate(&self) -> Result<(), IngestError> {
        let root_ok = self
            .scopes
            .get(super::scope::ScopeId::ROOT)
            .is_some_and(|s| s.kind == ScopeKind::Module && s.parent.is_none());
        if !root_ok {
            return Err(IngestError::MissingModuleRoot {
                file: self.file.clone(),
            });
        }

        for scope in self.scopes.iter() {
            if let Some(parent) = scope.parent {
                if !self.scopes.contains(parent) {
                    return Err(IngestError::DanglingScopeParent {
                        file: self.file.clone(),
                        scope: scope.id.0,
                        parent: parent.0,
                    });
                }
            }
            // Parent chain must terminate at the root within tree-size steps.
            let walked = self.scopes.walk_outward(scope.id).count();
            let reaches_root = self
                .scopes
                .walk_outward(scope.id)
                .last()
                .is_some_and(|s| s.parent.is_none());
            if walked > self.scopes.len() || !reaches_root {
                return Err(IngestError::CyclicScopeParents {
                    file: self.file.clone(),
                    scope: scope.id.0,
                });
            }
        }

        for def in &self.definitions {
            if !self.scopes.contains(def.scope_id()) {
                return Err(IngestError::DanglingDefinitionScope {
                    file: self.file.clone(),
                    name: def.name().to_string(),
                    scope: def.scope_id().0,
                });
            }
        }

        for reference in &self.references {
            if !self.scopes.contains(reference.scope_id()) {
                return Err(IngestError::DanglingReferenceScope {
                    file: self.file.clone(),
                    name: reference.name().to_string(),
                    scope: reference.scope_id().0,
                });
            }
        }

        Ok(())
    }
}
