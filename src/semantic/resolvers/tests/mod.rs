
use indexmap::IndexMap;

use crate::core::{FilePath, Location};
use crate::index::{
    Definition, Initializer, Language, ScopeId, SemanticIndex, SymbolId, SymbolReference,
    TypeHints,
};
use crate::semantic::DefinitionRegistry;
use crate::semantic::TypeRegistry;
use crate::semantic::resolver::{ExportRegistry, ModuleResolver, ScopeResolverIndex};
use crate::semantic::resolvers::{ResolveCtx, resolve_reference};
use crate::semantic::types::ResolutionCandidate;

pub(super) fn loc(line: u32) -> Location {
    Location::new(line, 0)
}

pub(super) fn function(file: &FilePath, name: &str, line: u32, scope: ScopeId) -> Definition {
    Definition::Function {
        symbol_id: SymbolId::derive("function", file, loc(line), name),
        name: name.to_string(),
        location: loc(line),
        scope_id: scope,
        language: Language::TypeScript,
        is_exported: false,
        return_type: None,
        is_anonymous: false,
    }
}

pub(super) fn method(file: &FilePath, name: &str, line: u32, scope: ScopeId) -> Definition {
    Definition::Method {
        symbol_id: SymbolId::derive("method", file, loc(line), name),
        name: name.to_string(),
        location: loc(line),
        scope_id: scope,
        language: Language::TypeScript,
        is_exported: false,
        return_type: None,
    }
}

pub(super) fn class(
    file: &FilePath,
    name: &str,
    line: u32,
    extends: Vec<String>,
    is_abstract: bool,
) -> Definition {
    Definition::Class {
        symbol_id: SymbolId::derive("class", file, loc(line), name),
        name: name.to_string(),
        location: loc(line),
        scope_id: ScopeId::ROOT,
        language: Language::TypeScript,
        is_exported: false,
        methods: Vec::new(),
        properties: Vec::new(),
        extends,
        is_abstract,
    }
}

pub(super) fn interface(file: &FilePath, name: &str, line: u32) -> Definition {
    Definition::Interface {
        symbol_id: SymbolId::derive("interface", file, loc(line), name),
        name: name.to_string(),
        location: loc(line),
        scope_id: ScopeId::ROOT,
        language: Language::TypeScript,
        is_exported: false,
        methods: Vec::new(),
        properties: Vec::new(),
        extends: Vec::new(),
    }
}

pub(super) fn variable(
    file: &FilePath,
    name: &str,
    line: u32,
    scope: ScopeId,
    initializer: Option<Initializer>,
) -> Definition {
    Definition::Variable {
        symbol_id: SymbolId::derive("variable", file, loc(line), name),
        name: name.to_string(),
        location: loc(line),
        scope_id: scope,
        language: Language::TypeScript,
        is_exported: false,
        type_annotation: None,
        initializer,
    }
}

pub(super) fn import(file: &FilePath, name: &str, line: u32, module_path: &str) -> Definition {
    Definition::Import {
        symbol_id: SymbolId::derive("import", file, loc(line), name),
        name: name.to_string(),
        location: loc(line),
        scope_id: ScopeId::ROOT,
        language: Language::TypeScript,
        is_exported: false,
        module_path: module_path.to_string(),
        original_name: None,
        is_wildcard: false,
    }
}

pub(super) fn type_alias(file: &FilePath, name: &str, line: u32, target: &str) -> Definition {
    Definition::TypeAlias {
        symbol_id: SymbolId::derive("type_alias", file, loc(line), name),
        name: name.to_string(),
        location: loc(line),
        scope_id: ScopeId::ROOT,
        language: Language::TypeScript,
        is_exported: false,
        target: target.to_string(),
    }
}

/// A fully wired registry stack over a fixed set of indices, mirroring
/// the project's resolution pass.
pub(super) struct Fixture {
    indices: IndexMap<FilePath, SemanticIndex>,
    defs: DefinitionRegistry,
    types: TypeRegistry,
    modules: ModuleResolver,
    exports: ExportRegistry,
}

impl Fixture {
    pub(super) fn build(indices: Vec<SemanticIndex>) -> Self {
        let indices: IndexMap<FilePath, SemanticIndex> = indices
            .into_iter()
            .map(|index| (index.file.clone(), index))
            .collect();

        let mut defs = DefinitionRegistry::new();
        for (file, index) in &indices {
            defs.update_file(file, &index.definitions);
        }
        for (file, index) in &indices {
            defs.register_same_file_inheritance(file, &index.scopes);
        }

        let modules = ModuleResolver::new(indices.keys());
        let exports = ExportRegistry::build(indices.values(), &modules);
        let resolver = ScopeResolverIndex::new(&indices, &exports, &modules);
        defs.resolve_cross_file_type_inheritance(|defs, file, scope, name| {
            resolver.resolve_in_scope(defs, name, file, scope)
        });

        let mut types = TypeRegistry::new();
        for index in indices.values() {
            types.update_file(index, &defs);
        }

        Self {
            indices,
            defs,
            types,
            modules,
            exports,
        }
    }

    pub(super) fn resolve(
        &self,
        file: &FilePath,
        reference: &SymbolReference,
    ) -> Vec<ResolutionCandidate> {
        let ctx = ResolveCtx {
            indices: &self.indices,
            defs: &self.defs,
            types: &self.types,
            names: ScopeResolverIndex::new(&self.indices, &self.exports, &self.modules),
        };
        resolve_reference(&ctx, file, reference)
    }
}

pub(super) fn index_of(file: &FilePath, definitions: Vec<Definition>) -> SemanticIndex {
    SemanticIndex {
        file: file.clone(),
        language: Language::TypeScript,
        definitions,
        references: Vec::new(),
        scopes: crate::index::ScopeTree::new(),
        type_hints: TypeHints::default(),
    }
}
