use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::core::{FilePath, Location};
use crate::index::{
    Definition, DefinitionKind, Initializer, ScopeId, SemanticIndex, SymbolId, SymbolReference,
};
use crate::semantic::DefinitionRegistry;

use super::collections::{FunctionCollection, detect_collection};
use super::members::TypeMemberInfo;

/// Everything the type passes derived from one file.
#[derive(Debug, Default)]
struct FileTypes {
    /// Binding location → annotated type name.
    bindings: FxHashMap<Location, String>,
    /// Binding location → constructed class name.
    constructor_bindings: FxHashMap<Location, String>,
    /// Type id → member maps.
    members: FxHashMap<SymbolId, TypeMemberInfo>,
    /// Type alias id → raw right-hand-side type expression.
    alias_targets: FxHashMap<SymbolId, String>,
    /// Variable id → its literal function collection.
    collections: FxHashMap<SymbolId, FunctionCollection>,
    /// Variable id → name of the collection it was read from.
    derived_from: FxHashMap<SymbolId, String>,
    /// Variable id → callee name it was initialized from.
    init_from_call: FxHashMap<SymbolId, String>,
    /// Variable id → anonymous function bound to it.
    lambda_bindings: FxHashMap<SymbolId, SymbolId>,
}

/// Per-file type-derivation registry.
///
/// `update_file` runs the extraction passes over one file's definitions
/// and references. Every pass is local to the file: names stay raw
/// strings here and are resolved to ids later, scope-aware, by the
/// reference resolvers; extraction must not depend on scope state or
/// file ordering.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    files: IndexMap<FilePath, FileTypes>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive all type data for `file`. The file's definitions must
    /// already be in `defs`.
    pub fn update_file(&mut self, index: &SemanticIndex, defs: &DefinitionRegistry) {
        let mut types = FileTypes::default();

        self.extract_bindings(index, &mut types);
        self.extract_members(index, &mut types);
        self.extract_aliases(index, &mut types);
        self.extract_collections(index, defs, &mut types);
        self.extract_derivations(index, &mut types);

        trace!(
            file = %index.file,
            types = types.members.len(),
            collections = types.collections.len(),
            "type registry updated"
        );
        self.files.insert(index.file.clone(), types);
    }

    pub fn remove_file(&mut self, file: &FilePath) {
        self.files.shift_remove(file);
    }

    // ============================================================
    // Extraction passes
    // ============================================================

    /// Pass 1: location → type name, from indexer hints and explicit
    /// variable annotations.
    fn extract_bindings(&self, index: &SemanticIndex, types: &mut FileTypes) {
        for (location, type_name) in &index.type_hints.type_bindings {
            types.bindings.insert(*location, type_name.clone());
        }
        for (location, class_name) in &index.type_hints.constructor_bindings {
            types
                .constructor_bindings
                .insert(*location, class_name.clone());
        }
        for def in &index.definitions {
            if let Some(annotation) = def.type_annotation() {
                types
                    .bindings
                    .entry(def.location())
                    .or_insert_with(|| annotation.to_string());
            }
        }
    }

    /// Pass 2: per-type member maps. A type's members are the definitions
    /// bound in its body scope (the scope whose `owner` is the type).
    fn extract_members(&self, index: &SemanticIndex, types: &mut FileTypes) {
        // Body scope → owning type id.
        let mut body_of: FxHashMap<ScopeId, SymbolId> = FxHashMap::default();
        for scope in index.scopes.iter() {
            if let Some(owner) = &scope.owner {
                if scope.kind.is_type_body() {
                    body_of.insert(scope.id, owner.clone());
                }
            }
        }

        for def in &index.definitions {
            if def.kind().is_type() {
                let info = types.members.entry(def.symbol_id().clone()).or_default();
                info.parent_names = def.extends().to_vec();
            }
        }

        for def in &index.definitions {
            let Some(type_id) = body_of.get(&def.scope_id()) else {
                continue;
            };
            let info = types.members.entry(type_id.clone()).or_default();
            match def.kind() {
                DefinitionKind::Method | DefinitionKind::Function => {
                    info.methods
                        .insert(def.name().to_string(), def.symbol_id().clone());
                }
                DefinitionKind::Constructor => {
                    info.constructor = Some(def.symbol_id().clone());
                }
                DefinitionKind::Variable | DefinitionKind::Constant => {
                    info.properties
                        .insert(def.name().to_string(), def.symbol_id().clone());
                }
                _ => {}
            }
        }
    }

    /// Pass 3: alias id → raw target expression.
    fn extract_aliases(&self, index: &SemanticIndex, types: &mut FileTypes) {
        for def in &index.definitions {
            if let Definition::TypeAlias {
                symbol_id, target, ..
            } = def
            {
                types.alias_targets.insert(symbol_id.clone(), target.clone());
            }
        }
    }

    /// Pass 4: function collections.
    fn extract_collections(
        &self,
        index: &SemanticIndex,
        defs: &DefinitionRegistry,
        types: &mut FileTypes,
    ) {
        for def in &index.definitions {
            if let Some(collection) = detect_collection(def, index, defs) {
                types.collections.insert(def.symbol_id().clone(), collection);
            }
        }
    }

    /// Pass 5: derived variables, return-type seeds, constructor tracking,
    /// and lambda bindings.
    fn extract_derivations(&self, index: &SemanticIndex, types: &mut FileTypes) {
        for def in &index.definitions {
            match def.initializer() {
                Some(Initializer::CollectionAccess { collection }) => {
                    types
                        .derived_from
                        .insert(def.symbol_id().clone(), collection.clone());
                }
                Some(Initializer::Call { callee }) => {
                    types
                        .init_from_call
                        .insert(def.symbol_id().clone(), callee.clone());
                }
                Some(Initializer::New { class_name }) => {
                    types
                        .constructor_bindings
                        .insert(def.location(), class_name.clone());
                }
                Some(Initializer::Lambda { function }) => {
                    types
                        .lambda_bindings
                        .insert(def.symbol_id().clone(), function.clone());
                }
                _ => {}
            }
        }

        // Constructor calls assigned to a binding record the constructed
        // type at the binding's location.
        for reference in &index.references {
            if let SymbolReference::ConstructorCall {
                name,
                construct_target: Some(target),
                ..
            } = reference
            {
                types.constructor_bindings.insert(*target, name.clone());
            }
        }
    }

    // ============================================================
    // Accessors
    // ============================================================

    /// Annotated type name at a binding location.
    pub fn binding_at(&self, file: &FilePath, location: Location) -> Option<&str> {
        self.files
            .get(file)?
            .bindings
            .get(&location)
            .map(String::as_str)
    }

    /// Constructed class name at a binding location.
    pub fn constructor_binding_at(&self, file: &FilePath, location: Location) -> Option<&str> {
        self.files
            .get(file)?
            .constructor_bindings
            .get(&location)
            .map(String::as_str)
    }

    /// Member maps of a type, wherever its file is.
    pub fn member_info(
        &self,
        defs: &DefinitionRegistry,
        type_id: &SymbolId,
    ) -> Option<&TypeMemberInfo> {
        let file = defs.file_of(type_id)?;
        self.files.get(file)?.members.get(type_id)
    }

    /// Raw alias target of a TypeAlias definition.
    pub fn alias_target(&self, defs: &DefinitionRegistry, alias_id: &SymbolId) -> Option<&str> {
        let file = defs.file_of(alias_id)?;
        self.files
            .get(file)?
            .alias_targets
            .get(alias_id)
            .map(String::as_str)
    }

    /// The function collection stored in a variable, if any.
    pub fn collection_of(
        &self,
        defs: &DefinitionRegistry,
        variable_id: &SymbolId,
    ) -> Option<&FunctionCollection> {
        let file = defs.file_of(variable_id)?;
        self.files.get(file)?.collections.get(variable_id)
    }

    /// Name of the collection a variable was read from (`x = C.get(k)`).
    pub fn derived_from(&self, defs: &DefinitionRegistry, variable_id: &SymbolId) -> Option<&str> {
        let file = defs.file_of(variable_id)?;
        self.files
            .get(file)?
            .derived_from
            .get(variable_id)
            .map(String::as_str)
    }

    /// Callee a variable was initialized from (`x = make()`).
    pub fn init_from_call(
        &self,
        defs: &DefinitionRegistry,
        variable_id: &SymbolId,
    ) -> Option<&str> {
        let file = defs.file_of(variable_id)?;
        self.files
            .get(file)?
            .init_from_call
            .get(variable_id)
            .map(String::as_str)
    }

    /// The anonymous function a variable is bound to (`f = () => ...`).
    pub fn lambda_binding(
        &self,
        defs: &DefinitionRegistry,
        variable_id: &SymbolId,
    ) -> Option<&SymbolId> {
        let file = defs.file_of(variable_id)?;
        self.files.get(file)?.lambda_bindings.get(variable_id)
    }
}
