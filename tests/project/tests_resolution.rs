//! End-to-end resolution through the project: shadowing, self and super
//! calls, and cross-file polymorphic dispatch.

use refgraph::Project;
use refgraph::index::ScopeId;
use refgraph::semantic::types::Confidence;

use crate::helpers::IndexBuilder;
use crate::helpers::index_builders::at;

#[test]
fn test_inner_binding_shadows_outer_for_calls() {
    let mut builder = IndexBuilder::new("app.ts");
    builder.function("log", 1, ScopeId::ROOT);
    let (_, outer_body) = builder.function("outer", 5, ScopeId::ROOT);
    // `function log()` redeclared inside `outer`; the call inside must
    // pick the inner one.
    let (inner_log, _) = builder.function("log", 6, outer_body);
    builder.call("log", 7, outer_body);

    let mut project = Project::new();
    let file = builder.file();
    project.update_file(&file, builder.build()).unwrap();

    let candidates = project.resolutions().candidates_at(&file, at(7)).unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].symbol_id, inner_log);
}

#[test]
fn test_self_call_prefers_own_method_over_top_level() {
    let mut builder = IndexBuilder::new("service.ts");
    builder.function("refresh", 1, ScopeId::ROOT);
    let (_, class_body) = builder.class("Cache", 5, &[]);
    let (refresh_method, _) = builder.method("refresh", 6, class_body);
    let (_, run_body) = builder.method("run", 8, class_body);
    builder.self_call("this", "refresh", 9, run_body);

    let mut project = Project::new();
    let file = builder.file();
    project.update_file(&file, builder.build()).unwrap();

    let candidates = project.resolutions().candidates_at(&file, at(9)).unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].symbol_id, refresh_method);
}

#[test]
fn test_super_call_resolves_parent_and_nothing_without_one() {
    let mut builder = IndexBuilder::new("service.ts");
    let (_, base_body) = builder.class("Base", 1, &[]);
    let (base_init, _) = builder.method("init", 2, base_body);
    let (_, derived_body) = builder.class("Derived", 10, &["Base"]);
    let (_, init_body) = builder.method("init", 11, derived_body);
    builder.self_call("super", "init", 12, init_body);
    // Base has no parent; its own super call stays unresolved.
    let (_, base_run_body) = builder.method("run", 3, base_body);
    builder.self_call("super", "init", 4, base_run_body);

    let mut project = Project::new();
    let file = builder.file();
    project.update_file(&file, builder.build()).unwrap();

    let derived_call = project.resolutions().candidates_at(&file, at(12)).unwrap();
    assert_eq!(derived_call.len(), 1);
    assert_eq!(derived_call[0].symbol_id, base_init);

    let base_call = project.resolutions().candidates_at(&file, at(4)).unwrap();
    assert!(base_call.is_empty());
}

/// Interface in one file, two implementations in others, a call through
/// an interface-typed value in a fourth. Inheritance and the receiver
/// type both cross files through imports.
#[test]
fn test_polymorphic_call_across_files() {
    let mut shapes = IndexBuilder::new("shapes.ts");
    let (shape, shape_body) = shapes.interface("Shape", 1);
    shapes.set_exported(&shape);
    shapes.method("area", 2, shape_body);

    let mut circle = IndexBuilder::new("circle.ts");
    circle.import("Shape", 1, "./shapes", None);
    let (circle_class, circle_body) = circle.class("Circle", 3, &["Shape"]);
    circle.set_exported(&circle_class);
    let (circle_area, _) = circle.method("area", 4, circle_body);

    let mut square = IndexBuilder::new("square.ts");
    square.import("Shape", 1, "./shapes", None);
    let (square_class, square_body) = square.class("Square", 3, &["Shape"]);
    square.set_exported(&square_class);
    let (square_area, _) = square.method("area", 4, square_body);

    let mut main = IndexBuilder::new("main.ts");
    main.import("Shape", 1, "./shapes", None);
    let (_, body) = main.function("measure", 3, ScopeId::ROOT);
    main.annotated_variable("shape", 4, body, "Shape");
    main.method_call("shape", 4, "area", 5, body);

    let mut project = Project::new();
    for builder in [shapes, circle, square] {
        let file = builder.file();
        project.update_file(&file, builder.build()).unwrap();
    }
    let main_file = main.file();
    project.update_file(&main_file, main.build()).unwrap();

    let candidates = project
        .resolutions()
        .candidates_at(&main_file, at(5))
        .unwrap();
    assert_eq!(candidates.len(), 2);
    assert!(candidates.iter().all(|c| c.confidence == Confidence::Certain));
    let ids: Vec<_> = candidates.iter().map(|c| c.symbol_id.clone()).collect();
    assert!(ids.contains(&circle_area));
    assert!(ids.contains(&square_area));
}

#[test]
fn test_import_alias_resolves_to_original_definition() {
    let mut lib = IndexBuilder::new("lib.ts");
    let (fetch, _) = lib.function("fetchData", 1, ScopeId::ROOT);
    lib.set_exported(&fetch);

    let mut main = IndexBuilder::new("main.ts");
    main.import("load", 1, "./lib", Some("fetchData"));
    let (_, body) = main.function("main", 3, ScopeId::ROOT);
    main.call("load", 4, body);

    let mut project = Project::new();
    project.update_file(&lib.file(), lib.build()).unwrap();
    let main_file = main.file();
    project.update_file(&main_file, main.build()).unwrap();

    let candidates = project
        .resolutions()
        .candidates_at(&main_file, at(4))
        .unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].symbol_id, fetch);
}

#[test]
fn test_unknown_import_records_empty_candidates() {
    let mut main = IndexBuilder::new("main.ts");
    main.import("lodash", 1, "lodash", None);
    let (_, body) = main.function("main", 3, ScopeId::ROOT);
    main.call("lodash", 4, body);

    let mut project = Project::new();
    let file = main.file();
    project.update_file(&file, main.build()).unwrap();

    // Recorded, empty, and reported. Never an error.
    let candidates = project.resolutions().candidates_at(&file, at(4)).unwrap();
    assert!(candidates.is_empty());
    assert_eq!(project.unresolved_references().len(), 1);
}
