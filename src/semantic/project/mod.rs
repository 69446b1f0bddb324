//! The project: every registry behind one owner, mutated only through
//! `update_file`/`remove_file`, consistent again before either returns.

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::core::FilePath;
use crate::index::{Definition, IngestError, SemanticIndex, SymbolId, SymbolReference};
use crate::semantic::definitions::DefinitionRegistry;
use crate::semantic::graphs::CallGraph;
use crate::semantic::resolution::{ResolutionRegistry, ResolvedReference};
use crate::semantic::resolver::{ExportRegistry, ModuleResolver, ScopeResolverIndex};
use crate::semantic::resolvers::ResolveCtx;
use crate::semantic::type_registry::TypeRegistry;

/// Whole-program state over per-file semantic indices.
///
/// Both mutations are eager and synchronous: they validate, rebuild the
/// per-file registries, re-run the cross-file phases (module and export
/// resolution, cross-file inheritance), then re-resolve every file.
/// There is no pending state a reader could observe.
#[derive(Debug, Default)]
pub struct Project {
    indices: IndexMap<FilePath, SemanticIndex>,
    defs: DefinitionRegistry,
    types: TypeRegistry,
    modules: ModuleResolver,
    exports: ExportRegistry,
    resolutions: ResolutionRegistry,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest or replace one file's index. Fails only on structurally
    /// invalid input; resolution failures are recorded, never errors.
    pub fn update_file(
        &mut self,
        file: &FilePath,
        mut index: SemanticIndex,
    ) -> Result<(), IngestError> {
        index.file = file.clone();
        index.validate()?;

        info!(file = %file, definitions = index.definitions.len(), "updating file");
        self.indices.insert(file.clone(), index);
        self.indices.sort_keys();
        if let Some(index) = self.indices.get(file) {
            self.defs.update_file(file, &index.definitions);
            self.types.update_file(index, &self.defs);
        }
        self.rebuild_cross_file_state();
        self.resolve_all();
        Ok(())
    }

    pub fn remove_file(&mut self, file: &FilePath) {
        if self.indices.shift_remove(file).is_none() {
            return;
        }
        info!(file = %file, "removing file");
        self.defs.remove_file(file);
        self.types.remove_file(file);
        self.resolutions.invalidate_file(file);
        self.rebuild_cross_file_state();
        self.resolve_all();
    }

    /// Always built from current state; never cached across mutations.
    pub fn get_call_graph(&self) -> CallGraph {
        CallGraph::build(&self.indices, &self.defs, &self.resolutions)
    }

    pub fn resolutions(&self) -> &ResolutionRegistry {
        &self.resolutions
    }

    pub fn definition(&self, id: &SymbolId) -> Option<&Definition> {
        self.defs.get(id)
    }

    pub fn files(&self) -> impl Iterator<Item = &FilePath> {
        self.indices.keys()
    }

    /// References whose candidate set came back empty.
    pub fn unresolved_references(&self) -> Vec<(&FilePath, &SymbolReference)> {
        self.resolutions.unresolved().collect()
    }

    /// A file's exported names, re-exports followed, sorted by name.
    pub fn exports_of(&self, file: &FilePath) -> Vec<(String, SymbolId)> {
        self.exports.exports_of(file)
    }

    /// One resolved reference per reference in the project, for callers
    /// that report precision.
    pub fn resolved_references(&self) -> impl Iterator<Item = (&FilePath, &ResolvedReference)> {
        self.resolutions.iter()
    }

    fn rebuild_cross_file_state(&mut self) {
        self.modules = ModuleResolver::new(self.indices.keys());
        self.exports = ExportRegistry::build(self.indices.values(), &self.modules);

        self.defs.clear_inheritance();
        for (file, index) in &self.indices {
            self.defs.register_same_file_inheritance(file, &index.scopes);
        }
        let resolver = ScopeResolverIndex::new(&self.indices, &self.exports, &self.modules);
        self.defs
            .resolve_cross_file_type_inheritance(|defs, file, scope, name| {
                resolver.resolve_in_scope(defs, name, file, scope)
            });
    }

    /// Eager full re-resolution. Cross-file edges (imports, inheritance,
    /// polymorphic candidates) can shift under any mutation, so every
    /// file's references are resolved again.
    fn resolve_all(&mut self) {
        let ctx = ResolveCtx {
            indices: &self.indices,
            defs: &self.defs,
            types: &self.types,
            names: ScopeResolverIndex::new(&self.indices, &self.exports, &self.modules),
        };
        let files: Vec<FilePath> = self.indices.keys().cloned().collect();
        self.resolutions.resolve_files(files.iter(), &ctx);
        debug!(
            files = files.len(),
            references = self.resolutions.len(),
            "project resolved"
        );
    }
}
