use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::core::FilePath;
use crate::index::{Definition, DefinitionKind, ScopeId, ScopeTree, SymbolId};

use super::inheritance::InheritanceIndex;

/// Per-file definition lists plus the scope index derived from them.
#[derive(Debug, Default)]
struct FileDefinitions {
    /// Ids in extraction order, which is the deterministic enumeration order.
    ids: Vec<SymbolId>,
    /// Scope → ids bound in that scope, in extraction order.
    by_scope: FxHashMap<ScopeId, Vec<SymbolId>>,
}

/// Global store of all definitions.
///
/// Owns one definition list per file; `update_file` replaces a file's
/// definitions wholesale and rebuilds the derived indexes; definitions
/// are never mutated one by one. All lookups go through ids; definitions
/// reference each other by [`SymbolId`], never by pointer.
#[derive(Debug, Default)]
pub struct DefinitionRegistry {
    files: IndexMap<FilePath, FileDefinitions>,
    arena: FxHashMap<SymbolId, Definition>,
    owner_file: FxHashMap<SymbolId, FilePath>,
    inheritance: InheritanceIndex,
    /// (subtype id, file, defining scope, parent name) for parent names the
    /// same-file phase could not resolve; consumed by the cross-file phase.
    pending_parents: Vec<(SymbolId, FilePath, ScopeId, String)>,
}

impl DefinitionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a file's definitions and rebuild its derived indexes.
    pub fn update_file(&mut self, file: &FilePath, definitions: &[Definition]) {
        self.remove_file(file);

        let mut entry = FileDefinitions::default();
        for def in definitions {
            let id = def.symbol_id().clone();
            entry.ids.push(id.clone());
            entry
                .by_scope
                .entry(def.scope_id())
                .or_default()
                .push(id.clone());
            self.owner_file.insert(id.clone(), file.clone());
            self.arena.insert(id, def.clone());
        }
        trace!(file = %file, count = definitions.len(), "definitions updated");
        self.files.insert(file.clone(), entry);
    }

    /// Drop a file's definitions from every index.
    pub fn remove_file(&mut self, file: &FilePath) {
        if let Some(old) = self.files.shift_remove(file) {
            for id in &old.ids {
                self.arena.remove(id);
                self.owner_file.remove(id);
            }
        }
    }

    pub fn get(&self, id: &SymbolId) -> Option<&Definition> {
        self.arena.get(id)
    }

    /// The file a definition lives in.
    pub fn file_of(&self, id: &SymbolId) -> Option<&FilePath> {
        self.owner_file.get(id)
    }

    pub fn files(&self) -> impl Iterator<Item = &FilePath> {
        self.files.keys()
    }

    /// All definitions of a file, in extraction order.
    pub fn file_definitions(&self, file: &FilePath) -> impl Iterator<Item = &Definition> {
        self.files
            .get(file)
            .into_iter()
            .flat_map(|f| f.ids.iter())
            .filter_map(|id| self.arena.get(id))
    }

    /// All definitions across every file, in file order then extraction
    /// order. Deterministic.
    pub fn iter_definitions(&self) -> impl Iterator<Item = &Definition> {
        self.files
            .values()
            .flat_map(|f| f.ids.iter())
            .filter_map(|id| self.arena.get(id))
    }

    /// Enumerate the definitions bound in one scope, optionally filtered by
    /// kind. This is the only sanctioned way to enumerate a scope.
    pub fn get_scope_definitions(
        &self,
        scope_id: ScopeId,
        file: &FilePath,
        kind: Option<DefinitionKind>,
    ) -> Vec<&Definition> {
        self.files
            .get(file)
            .and_then(|f| f.by_scope.get(&scope_id))
            .into_iter()
            .flatten()
            .filter_map(|id| self.arena.get(id))
            .filter(|def| kind.is_none_or(|k| def.kind() == k))
            .collect()
    }

    /// First definition named `name` bound directly in `scope_id` of `file`.
    pub fn find_in_scope(
        &self,
        file: &FilePath,
        scope_id: ScopeId,
        name: &str,
    ) -> Option<&Definition> {
        self.files
            .get(file)?
            .by_scope
            .get(&scope_id)?
            .iter()
            .filter_map(|id| self.arena.get(id))
            .find(|def| def.name() == name)
    }

    /// Walk the scope chain of `file` outward from `start`, returning the
    /// first binding of `name`. Purely lexical: imports are not followed
    /// (that is [`ScopeResolverIndex`](crate::semantic::ScopeResolverIndex)'s
    /// job), which is exactly what same-file phases want.
    pub fn resolve_local(
        &self,
        file: &FilePath,
        scopes: &ScopeTree,
        start: ScopeId,
        name: &str,
    ) -> Option<&Definition> {
        scopes
            .walk_outward(start)
            .find_map(|scope| self.find_in_scope(file, scope.id, name))
    }

    // ============================================================
    // Type inheritance index
    // ============================================================

    pub fn inheritance(&self) -> &InheritanceIndex {
        &self.inheritance
    }

    /// Drop all inheritance edges and pending parent names. Called before
    /// re-running the two registration phases.
    pub fn clear_inheritance(&mut self) {
        self.inheritance.clear();
        self.pending_parents.clear();
    }

    /// Phase one of inheritance registration: resolve each type's parent
    /// names lexically within its own file. Parent names that do not
    /// resolve locally are queued for the cross-file phase.
    pub fn register_same_file_inheritance(&mut self, file: &FilePath, scopes: &ScopeTree) {
        let mut edges: Vec<(SymbolId, SymbolId)> = Vec::new();
        let mut pending: Vec<(SymbolId, FilePath, ScopeId, String)> = Vec::new();

        for def in self.file_definitions(file) {
            if !def.kind().is_type() {
                continue;
            }
            for parent_name in def.extends() {
                let parent = self
                    .resolve_local(file, scopes, def.scope_id(), parent_name)
                    .filter(|p| p.kind().is_type());
                match parent {
                    Some(parent) => {
                        edges.push((def.symbol_id().clone(), parent.symbol_id().clone()));
                    }
                    None => pending.push((
                        def.symbol_id().clone(),
                        file.clone(),
                        def.scope_id(),
                        parent_name.clone(),
                    )),
                }
            }
        }

        for (child, parent) in edges {
            self.inheritance.add_edge(child, parent);
        }
        self.pending_parents.append(&mut pending);
    }

    /// Phase two: resolve the queued parent names through the full
    /// scope-and-import resolver, picking up `extends`/`implements` of
    /// imported types.
    pub fn resolve_cross_file_type_inheritance(
        &mut self,
        resolve: impl Fn(&Self, &FilePath, ScopeId, &str) -> Option<SymbolId>,
    ) {
        let pending = std::mem::take(&mut self.pending_parents);
        let mut edges: Vec<(SymbolId, SymbolId)> = Vec::new();

        for (child, file, scope, parent_name) in &pending {
            if let Some(parent_id) = resolve(self, file, *scope, parent_name) {
                if self.get(&parent_id).is_some_and(|d| d.kind().is_type()) {
                    edges.push((child.clone(), parent_id));
                } else {
                    trace!(child = %child, parent = %parent_name, "parent is not a type");
                }
            } else {
                trace!(child = %child, parent = %parent_name, "unresolved parent type");
            }
        }

        for (child, parent) in edges {
            self.inheritance.add_edge(child, parent);
        }
    }
}
