//! Project lifecycle: ingestion validation, idempotence, file removal,
//! and the reporting surface.

use refgraph::index::{IngestError, ScopeId};
use refgraph::{Project, SemanticIndex};

use crate::helpers::IndexBuilder;
use crate::helpers::index_builders::at;

fn two_file_project() -> (Project, IndexBuilder, IndexBuilder) {
    // lib.ts exports `helper`; main.ts imports and calls it.
    let mut lib = IndexBuilder::new("lib.ts");
    let (helper, _) = lib.function("helper", 1, ScopeId::ROOT);
    lib.set_exported(&helper);

    let mut main = IndexBuilder::new("main.ts");
    main.import("helper", 1, "./lib", None);
    let (_, main_body) = main.function("main", 3, ScopeId::ROOT);
    main.call("helper", 4, main_body);

    (Project::new(), lib, main)
}

#[test]
fn test_ingestion_rejects_dangling_definition_scope() {
    // The scope tree itself is valid; only the definition points at a
    // scope the tree does not contain.
    let mut builder = IndexBuilder::new("bad.ts");
    builder.function("f", 1, ScopeId::ROOT);
    let file = builder.file();
    let mut index = builder.build();
    if let refgraph::Definition::Function { scope_id, .. } = &mut index.definitions[0] {
        *scope_id = ScopeId::new(9);
    }
    let mut project = Project::new();

    let result = project.update_file(&file, index);
    assert!(matches!(
        result,
        Err(IngestError::DanglingDefinitionScope { .. })
    ));
    assert_eq!(project.files().count(), 0);
}

#[test]
fn test_ingestion_rejects_missing_module_root() {
    let mut project = Project::new();
    let index = SemanticIndex {
        scopes: refgraph::index::ScopeTree::default(),
        ..IndexBuilder::new("bad.ts").build()
    };
    let result = project.update_file(&refgraph::FilePath::new("bad.ts"), index);
    assert!(matches!(result, Err(IngestError::MissingModuleRoot { .. })));
}

#[test]
fn test_ingestion_rejects_dangling_reference_scope() {
    let mut builder = IndexBuilder::new("bad.ts");
    builder.call("ghost", 1, ScopeId::new(4));
    let mut project = Project::new();

    let result = project.update_file(&builder.file(), builder.build());
    assert!(matches!(
        result,
        Err(IngestError::DanglingReferenceScope { .. })
    ));
}

#[test]
fn test_resolution_is_idempotent() {
    let (mut project, lib, main) = two_file_project();
    let (lib_file, main_file) = (lib.file(), main.file());
    let (lib_index, main_index) = (lib.build(), main.build());

    project.update_file(&lib_file, lib_index.clone()).unwrap();
    project.update_file(&main_file, main_index.clone()).unwrap();
    let first: Vec<_> = project
        .resolutions()
        .iter()
        .map(|(file, entry)| (file.clone(), entry.clone()))
        .collect();
    let first_entries: Vec<String> = project
        .get_call_graph()
        .entry_points()
        .iter()
        .map(|n| n.signature())
        .collect();

    // Feeding identical indices again must change nothing.
    project.update_file(&lib_file, lib_index).unwrap();
    project.update_file(&main_file, main_index).unwrap();
    let second: Vec<_> = project
        .resolutions()
        .iter()
        .map(|(file, entry)| (file.clone(), entry.clone()))
        .collect();
    let second_entries: Vec<String> = project
        .get_call_graph()
        .entry_points()
        .iter()
        .map(|n| n.signature())
        .collect();

    assert_eq!(first, second);
    assert_eq!(first_entries, second_entries);
}

#[test]
fn test_remove_file_drops_its_definitions_everywhere() {
    let (mut project, lib, main) = two_file_project();
    let (lib_file, main_file) = (lib.file(), main.file());
    project.update_file(&lib_file, lib.build()).unwrap();
    project.update_file(&main_file, main.build()).unwrap();

    assert!(project.unresolved_references().is_empty());

    project.remove_file(&lib_file);
    assert_eq!(project.files().count(), 1);
    // The import target is gone; the call can no longer resolve.
    let unresolved = project.unresolved_references();
    assert_eq!(unresolved.len(), 1);
    assert_eq!(unresolved[0].1.name(), "helper");
}

#[test]
fn test_remove_unknown_file_is_a_no_op() {
    let (mut project, lib, _) = two_file_project();
    let lib_file = lib.file();
    project.update_file(&lib_file, lib.build()).unwrap();

    project.remove_file(&refgraph::FilePath::new("ghost.ts"));
    assert_eq!(project.files().count(), 1);
}

#[test]
fn test_exports_of_lists_exported_names_only() {
    let mut lib = IndexBuilder::new("lib.ts");
    let (public_fn, _) = lib.function("publicFn", 1, ScopeId::ROOT);
    lib.set_exported(&public_fn);
    lib.function("privateFn", 2, ScopeId::ROOT);

    let mut project = Project::new();
    let file = lib.file();
    project.update_file(&file, lib.build()).unwrap();

    let exports = project.exports_of(&file);
    assert_eq!(exports.len(), 1);
    assert_eq!(exports[0].0, "publicFn");
    assert_eq!(exports[0].1, public_fn);
}

#[test]
fn test_candidates_queryable_by_location() {
    let (mut project, lib, main) = two_file_project();
    let main_file = main.file();
    project.update_file(&lib.file(), lib.build()).unwrap();
    project.update_file(&main_file, main.build()).unwrap();

    let candidates = project.resolutions().candidates_at(&main_file, at(4));
    assert_eq!(candidates.map(<[_]>::len), Some(1));
    assert!(project.resolutions().candidates_at(&main_file, at(99)).is_none());
}
