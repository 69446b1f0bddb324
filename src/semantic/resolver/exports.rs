use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::core::FilePath;
use crate::index::{Definition, SemanticIndex, SymbolId};

use super::module_resolver::ModuleResolver;

/// A re-exported name: `export { original as name } from "./target"`.
#[derive(Debug, Clone)]
struct Reexport {
    /// Resolved target file; `None` when the module specifier did not
    /// resolve (external package), which makes the chain end unresolved.
    target: Option<FilePath>,
    /// The name to look up in the target's export map.
    original: String,
}

/// One file's exported surface.
#[derive(Debug, Default)]
struct ExportMap {
    /// Exported definitions of this file, by exported name.
    direct: FxHashMap<String, SymbolId>,
    /// Exported imports (re-exports), by local exported name.
    reexports: FxHashMap<String, Reexport>,
    /// Targets of `export * from` style wildcard re-exports.
    wildcards: Vec<FilePath>,
}

/// Per-file export maps with re-export chain following.
///
/// Rebuilt wholesale whenever the project's file set or contents change.
/// Chain following carries a visited set, so circular re-exports
/// terminate as "unresolved" instead of looping.
#[derive(Debug, Default)]
pub struct ExportRegistry {
    files: IndexMap<FilePath, ExportMap>,
}

impl ExportRegistry {
    /// Build export maps for every file in the project.
    pub fn build<'a>(
        indices: impl Iterator<Item = &'a SemanticIndex>,
        modules: &ModuleResolver,
    ) -> Self {
        let mut registry = Self::default();

        for index in indices {
            let mut map = ExportMap::default();
            for def in &index.definitions {
                if !def.is_exported() {
                    continue;
                }
                match def {
                    Definition::Import {
                        name,
                        module_path,
                        original_name,
                        is_wildcard,
                        ..
                    } => {
                        let target = modules.resolve(&index.file, module_path);
                        if *is_wildcard {
                            if let Some(target) = target {
                                map.wildcards.push(target);
                            }
                        } else {
                            map.reexports.insert(
                                name.clone(),
                                Reexport {
                                    target,
                                    original: original_name.clone().unwrap_or_else(|| name.clone()),
                                },
                            );
                        }
                    }
                    other => {
                        map.direct
                            .insert(other.name().to_string(), other.symbol_id().clone());
                    }
                }
            }
            registry.files.insert(index.file.clone(), map);
        }

        registry
    }

    /// Resolve an exported name to the original exporting definition,
    /// following re-export chains.
    pub fn resolve_export(&self, file: &FilePath, name: &str) -> Option<SymbolId> {
        let mut visited: FxHashSet<(FilePath, String)> = FxHashSet::default();
        self.resolve_inner(file, name, &mut visited)
    }

    fn resolve_inner(
        &self,
        file: &FilePath,
        name: &str,
        visited: &mut FxHashSet<(FilePath, String)>,
    ) -> Option<SymbolId> {
        if !visited.insert((file.clone(), name.to_string())) {
            trace!(file = %file, name, "circular re-export chain");
            return None;
        }
        let map = self.files.get(file)?;

        if let Some(id) = map.direct.get(name) {
            return Some(id.clone());
        }
        if let Some(reexport) = map.reexports.get(name) {
            let target = reexport.target.as_ref()?;
            return self.resolve_inner(target, &reexport.original, visited);
        }
        for wildcard in &map.wildcards {
            if let Some(id) = self.resolve_inner(wildcard, name, visited) {
                return Some(id);
            }
        }
        None
    }

    /// The exported names of a file, sorted, with their resolved targets.
    /// Re-exports that do not resolve are omitted.
    pub fn exports_of(&self, file: &FilePath) -> Vec<(String, SymbolId)> {
        let Some(map) = self.files.get(file) else {
            return Vec::new();
        };

        let mut names: Vec<String> = map.direct.keys().cloned().collect();
        names.extend(map.reexports.keys().cloned());
        for wildcard in &map.wildcards {
            if let Some(inner) = self.files.get(wildcard) {
                names.extend(inner.direct.keys().cloned());
                names.extend(inner.reexports.keys().cloned());
            }
        }
        names.sort();
        names.dedup();

        names
            .into_iter()
            .filter_map(|name| {
                self.resolve_export(file, &name)
                    .map(|id| (name, id))
            })
            .collect()
    }
}
