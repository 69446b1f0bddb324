use rustc_hash::FxHashSet;
use tracing::trace;

use crate::core::Location;
use crate::index::{
    CollectionType, Definition, Initializer, SemanticIndex, SymbolId,
};
use crate::semantic::DefinitionRegistry;

/// Metadata for a variable whose initializer is a literal collection of
/// function values (`new Map([["a", handlerA]])`, `[f, g]`, `{k: f}`).
///
/// `stored_functions` only ever holds Function/Method definitions;
/// collection-valued elements are excluded rather than nested.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCollection {
    pub collection_type: CollectionType,
    pub stored_functions: Vec<SymbolId>,
    pub location: Location,
}

/// Detect the function collection behind `def`, if its initializer is a
/// collection literal holding function-valued names.
///
/// Spreads (`...OTHER`, `**other`) are followed recursively through other
/// same-file collections; the visited set makes mutually-spreading
/// collections terminate. Resolution is purely lexical within the file;
/// this pass never needs cross-file data.
pub(super) fn detect_collection(
    def: &Definition,
    index: &SemanticIndex,
    defs: &DefinitionRegistry,
) -> Option<FunctionCollection> {
    let Some(Initializer::CollectionLiteral {
        collection_type, ..
    }) = def.initializer()
    else {
        return None;
    };

    let mut visited: FxHashSet<SymbolId> = FxHashSet::default();
    visited.insert(def.symbol_id().clone());
    let stored_functions = collect_stored_functions(def, index, defs, &mut visited);

    if stored_functions.is_empty() {
        trace!(variable = %def.symbol_id(), "collection literal holds no functions");
        return None;
    }

    Some(FunctionCollection {
        collection_type: *collection_type,
        stored_functions,
        location: def.location(),
    })
}

fn collect_stored_functions(
    def: &Definition,
    index: &SemanticIndex,
    defs: &DefinitionRegistry,
    visited: &mut FxHashSet<SymbolId>,
) -> Vec<SymbolId> {
    let Some(Initializer::CollectionLiteral {
        element_names,
        spreads,
        ..
    }) = def.initializer()
    else {
        return Vec::new();
    };

    let mut result: Vec<SymbolId> = Vec::new();
    let mut push_unique = |id: &SymbolId, result: &mut Vec<SymbolId>| {
        if !result.contains(id) {
            result.push(id.clone());
        }
    };

    for name in element_names {
        let Some(element) = defs.resolve_local(&index.file, &index.scopes, def.scope_id(), name)
        else {
            continue;
        };
        if element.kind().is_callable() {
            push_unique(element.symbol_id(), &mut result);
        }
        // Collection-valued elements would nest collections; v1 excludes
        // them, so anything else is skipped.
    }

    for spread in spreads {
        let Some(source) = defs.resolve_local(&index.file, &index.scopes, def.scope_id(), spread)
        else {
            continue;
        };
        if !matches!(
            source.initializer(),
            Some(Initializer::CollectionLiteral { .. })
        ) {
            continue;
        }
        if !visited.insert(source.symbol_id().clone()) {
            continue;
        }
        for id in collect_stored_functions(source, index, defs, visited) {
            push_unique(&id, &mut result);
        }
    }

    result
}
