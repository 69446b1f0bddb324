use indexmap::IndexMap;
use tracing::trace;

use crate::core::FilePath;
use crate::index::{Definition, DefinitionKind, ScopeId, SemanticIndex, SymbolId};
use crate::semantic::DefinitionRegistry;

use super::exports::ExportRegistry;
use super::module_resolver::ModuleResolver;

/// The single source of truth for "what does name `x` mean at this
/// point".
///
/// For every scope the resolver chains: local bindings → that scope's
/// resolved imports → the parent scope, iteratively outward, first hit
/// wins (lexical shadowing). Import resolution is a distinct phase from
/// plain lexical lookup: an import binding resolves through module-path
/// resolution into the target file's export map, following re-export
/// chains.
///
/// Borrows the project's current state; rebuilt (cheaply) for each
/// resolution pass, so it can never observe a half-updated project.
pub struct ScopeResolverIndex<'a> {
    indices: &'a IndexMap<FilePath, SemanticIndex>,
    exports: &'a ExportRegistry,
    modules: &'a ModuleResolver,
}

impl<'a> ScopeResolverIndex<'a> {
    pub fn new(
        indices: &'a IndexMap<FilePath, SemanticIndex>,
        exports: &'a ExportRegistry,
        modules: &'a ModuleResolver,
    ) -> Self {
        Self {
            indices,
            exports,
            modules,
        }
    }

    /// Resolve `name` as seen from `scope_id` in `file`, walking scopes
    /// outward and following imports. Returns the final definition:
    /// import bindings are resolved through to their exporting file.
    pub fn resolve_in_scope(
        &self,
        defs: &DefinitionRegistry,
        name: &str,
        file: &FilePath,
        scope_id: ScopeId,
    ) -> Option<SymbolId> {
        let index = self.indices.get(file)?;

        for scope in index.scopes.walk_outward(scope_id) {
            if let Some(def) = defs.find_in_scope(file, scope.id, name) {
                // The binding exists in this scope; whether or not an
                // import target resolves, it still shadows outer scopes.
                return match def {
                    Definition::Import { .. } => self.resolve_import(defs, def),
                    other => Some(other.symbol_id().clone()),
                };
            }

            // Wildcard imports bind every exported name of their target
            // into this scope. Exported wildcards (`export * from`) are
            // pure re-exports and bind nothing locally.
            for import in defs.get_scope_definitions(scope.id, file, Some(DefinitionKind::Import)) {
                let Definition::Import {
                    module_path,
                    is_wildcard: true,
                    is_exported: false,
                    ..
                } = import
                else {
                    continue;
                };
                let Some(target) = self.modules.resolve(file, module_path) else {
                    continue;
                };
                if let Some(id) = self.exports.resolve_export(&target, name) {
                    trace!(name, file = %file, target = %target, "resolved via wildcard import");
                    return Some(id);
                }
            }
        }

        trace!(name, file = %file, scope = scope_id.0, "name not in scope");
        None
    }

    /// Resolve an import binding to the definition it ultimately names.
    pub fn resolve_import(
        &self,
        defs: &DefinitionRegistry,
        import: &Definition,
    ) -> Option<SymbolId> {
        let Definition::Import {
            symbol_id,
            name,
            module_path,
            original_name,
            is_wildcard,
            ..
        } = import
        else {
            return None;
        };
        if *is_wildcard {
            // A wildcard binds no single name; per-name lookup happens in
            // resolve_in_scope.
            return None;
        }

        let file = defs.file_of(symbol_id)?;
        let target = self.modules.resolve(file, module_path)?;
        let exported_name = original_name.as_deref().unwrap_or(name);
        let resolved = self.exports.resolve_export(&target, exported_name);
        if resolved.is_none() {
            trace!(
                name,
                target = %target,
                exported = exported_name,
                "import target missing from export map"
            );
        }
        resolved
    }
}
