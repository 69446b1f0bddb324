
use indexmap::IndexMap;

use crate::core::{FilePath, Location};
use crate::index::{
    Definition, Language, ScopeId, ScopeTree, SemanticIndex, SymbolId, TypeHints,
};

pub(super) fn index_with(file: &FilePath, definitions: Vec<Definition>) -> SemanticIndex {
    SemanticIndex {
        file: file.clone(),
        language: Language::Python,
        definitions,
        references: Vec::new(),
        scopes: ScopeTree::new(),
        type_hints: TypeHints::default(),
    }
}

pub(super) fn index_map(indices: Vec<SemanticIndex>) -> IndexMap<FilePath, SemanticIndex> {
    indices
        .into_iter()
        .map(|index| (index.file.clone(), index))
        .collect()
}

pub(super) fn function_def(
    file: &FilePath,
    name: &str,
    line: u32,
    exported: bool,
) -> Definition {
    let location = Location::new(line, 0);
    Definition::Function {
        symbol_id: SymbolId::derive("function", file, location, name),
        name: name.to_string(),
        location,
        scope_id: ScopeId::ROOT,
        language: Language::Python,
        is_exported: exported,
        return_type: None,
        is_anonymous: false,
    }
}

#[allow(clippy::too_many_arguments)]
pub(super) fn import_def(
    file: &FilePath,
    name: &str,
    line: u32,
    module_path: &str,
    original_name: Option<&str>,
    is_wildcard: bool,
    exported: bool,
    scope: ScopeId,
) -> Definition {
    let location = Location::new(line, 0);
    Definition::Import {
        symbol_id: SymbolId::derive("import", file, location, name),
        name: name.to_string(),
        location,
        scope_id: scope,
        language: Language::Python,
        is_exported: exported,
        module_path: module_path.to_string(),
        original_name: original_name.map(str::to_string),
        is_wildcard,
    }
}
