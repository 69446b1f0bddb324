use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use tracing::trace;

use crate::core::{FilePath, Location};
use crate::index::{Definition, ScopeId, ScopeTree, SemanticIndex, SymbolId};
use crate::semantic::definitions::DefinitionRegistry;
use crate::semantic::resolver::ScopeResolverIndex;
use crate::semantic::type_registry::TypeRegistry;
use crate::semantic::types::Confidence;

/// Everything a reference resolver may consult, borrowed from the
/// project for the duration of one resolution pass.
pub struct ResolveCtx<'a> {
    pub indices: &'a IndexMap<FilePath, SemanticIndex>,
    pub defs: &'a DefinitionRegistry,
    pub types: &'a TypeRegistry,
    pub names: ScopeResolverIndex<'a>,
}

impl<'a> ResolveCtx<'a> {
    pub fn scope_tree(&self, file: &FilePath) -> Option<&'a ScopeTree> {
        self.indices.get(file).map(|index| &index.scopes)
    }

    /// Scope-aware name lookup, imports included.
    pub fn resolve_name(&self, file: &FilePath, scope: ScopeId, name: &str) -> Option<SymbolId> {
        self.names.resolve_in_scope(self.defs, name, file, scope)
    }

    pub fn definition(&self, id: &SymbolId) -> Option<&'a Definition> {
        self.defs.get(id)
    }

    /// Resolve a type name to its defining symbol, looking through type
    /// aliases. Alias cycles terminate as unresolved.
    pub fn resolve_type_name(
        &self,
        file: &FilePath,
        scope: ScopeId,
        name: &str,
    ) -> Option<SymbolId> {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut current = name.to_string();

        loop {
            if !seen.insert(current.clone()) {
                trace!(name, "type alias cycle");
                return None;
            }
            let id = self.resolve_name(file, scope, &current)?;
            if let Some(target) = self.types.alias_target(self.defs, &id) {
                current = target.to_string();
                continue;
            }
            let def = self.definition(&id)?;
            return def.kind().is_type().then_some(id);
        }
    }

    /// The type whose body lexically encloses `scope`, if any.
    pub fn enclosing_type(&self, file: &FilePath, scope: ScopeId) -> Option<SymbolId> {
        let scopes = self.scope_tree(file)?;
        scopes
            .nearest(scope, |s| s.kind.is_type_body())
            .and_then(|s| s.owner.clone())
    }

    /// The static type of a value expression, resolved to its defining
    /// symbol, plus how confident the lookup is. Explicit bindings and
    /// constructor tracking are certain; return-type inference is only
    /// likely. Each type name is resolved in the file that wrote it, so
    /// an imported value keeps its type even when the use site never
    /// imports the type itself.
    pub fn value_type_id(
        &self,
        file: &FilePath,
        scope: ScopeId,
        name: &str,
        location: Location,
    ) -> Option<(SymbolId, Confidence)> {
        if let Some(bound) = self.types.binding_at(file, location) {
            return self
                .resolve_type_name(file, scope, bound)
                .map(|id| (id, Confidence::Certain));
        }
        if let Some(constructed) = self.types.constructor_binding_at(file, location) {
            return self
                .resolve_type_name(file, scope, constructed)
                .map(|id| (id, Confidence::Certain));
        }

        let id = self.resolve_name(file, scope, name)?;
        let def = self.definition(&id)?;
        let owner = self.defs.file_of(&id)?;

        if let Some(annotation) = def.type_annotation() {
            return self
                .resolve_type_name(owner, def.scope_id(), annotation)
                .map(|id| (id, Confidence::Certain));
        }
        // The declaration site may carry a binding the use site did not.
        if let Some(bound) = self.types.binding_at(owner, def.location()) {
            return self
                .resolve_type_name(owner, def.scope_id(), bound)
                .map(|id| (id, Confidence::Certain));
        }
        if let Some(constructed) = self.types.constructor_binding_at(owner, def.location()) {
            return self
                .resolve_type_name(owner, def.scope_id(), constructed)
                .map(|id| (id, Confidence::Certain));
        }
        // `let svc = make_service()` takes the callee's return type. The
        // callee is a name in the declaring file; its return type is a
        // name in the callee's own file.
        if let Some(callee) = self.types.init_from_call(self.defs, &id) {
            let callee_id = self.resolve_name(owner, def.scope_id(), callee)?;
            let callee_def = self.definition(&callee_id)?;
            let callee_file = self.defs.file_of(&callee_id)?;
            let return_type = callee_def.return_type()?;
            return self
                .resolve_type_name(callee_file, callee_def.scope_id(), return_type)
                .map(|id| (id, Confidence::Likely));
        }
        None
    }

    /// Walk interior property-chain links through member types. Each link
    /// must be a member of the current type whose own type resolves; the
    /// final type id is returned.
    pub fn walk_member_chain(
        &self,
        file: &FilePath,
        scope: ScopeId,
        start: SymbolId,
        links: &[String],
    ) -> Option<SymbolId> {
        let mut current = start;
        for link in links {
            let member = self.types.resolve_member(self.defs, &current, link)?;
            let type_name = self.types.property_type_name(self.defs, &member)?;
            current = self.resolve_type_name(file, scope, &type_name)?;
        }
        Some(current)
    }
}
