use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::core::FilePath;
use crate::index::{Definition, SemanticIndex, SymbolId, SymbolReference};
use crate::semantic::definitions::DefinitionRegistry;
use crate::semantic::resolution::ResolutionRegistry;

/// One callable (function, method, constructor, or anonymous function)
/// and its position in the call graph.
#[derive(Debug, Clone)]
pub struct CallableNode {
    pub symbol_id: SymbolId,
    pub definition: Definition,
    pub file: FilePath,
    /// Call-shaped references lexically inside this callable's body.
    pub enclosed_calls: Vec<SymbolReference>,
    pub callers: BTreeSet<SymbolId>,
    pub callees: BTreeSet<SymbolId>,
}

impl CallableNode {
    /// `name (file:line)`, for entry-point reporting.
    pub fn signature(&self) -> String {
        format!(
            "{} ({}:{})",
            self.definition.name(),
            self.file,
            self.definition.location().line
        )
    }
}

/// Caller → callee edges over every callable in the project.
///
/// Edges come from resolved call-shaped references: the callable whose
/// body encloses the reference calls each resolution candidate.
/// Multi-candidate resolutions fan out into distinct edges. References
/// at module level have no enclosing callable and contribute no edge, so
/// a function invoked only from module level still counts as an entry
/// point.
#[derive(Debug, Default)]
pub struct CallGraph {
    nodes: BTreeMap<SymbolId, CallableNode>,
}

impl CallGraph {
    pub fn build(
        indices: &IndexMap<FilePath, SemanticIndex>,
        defs: &DefinitionRegistry,
        resolutions: &ResolutionRegistry,
    ) -> Self {
        let mut nodes: BTreeMap<SymbolId, CallableNode> = BTreeMap::new();
        for file in defs.files() {
            for def in defs.file_definitions(file) {
                if def.kind().is_callable() {
                    nodes.insert(
                        def.symbol_id().clone(),
                        CallableNode {
                            symbol_id: def.symbol_id().clone(),
                            definition: def.clone(),
                            file: file.clone(),
                            enclosed_calls: Vec::new(),
                            callers: BTreeSet::new(),
                            callees: BTreeSet::new(),
                        },
                    );
                }
            }
        }

        let mut edges: Vec<(SymbolId, SymbolId)> = Vec::new();
        for (file, resolved) in resolutions.iter() {
            if !resolved.reference.is_call() {
                continue;
            }
            let Some(index) = indices.get(file) else {
                continue;
            };
            let Some(caller) = enclosing_callable(index, resolved.reference.scope_id(), &nodes)
            else {
                trace!(
                    name = resolved.reference.name(),
                    file = %file,
                    "module-level call, no edge"
                );
                continue;
            };

            if let Some(node) = nodes.get_mut(&caller) {
                node.enclosed_calls.push(resolved.reference.clone());
            }
            for candidate in &resolved.candidates {
                if nodes.contains_key(&candidate.symbol_id) {
                    edges.push((caller.clone(), candidate.symbol_id.clone()));
                }
            }
        }

        for (caller, callee) in edges {
            if let Some(node) = nodes.get_mut(&caller) {
                node.callees.insert(callee.clone());
            }
            if let Some(node) = nodes.get_mut(&callee) {
                node.callers.insert(caller);
            }
        }

        debug!(callables = nodes.len(), "call graph built");
        Self { nodes }
    }

    pub fn node(&self, id: &SymbolId) -> Option<&CallableNode> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &CallableNode> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Callables nothing calls, in symbol-id order.
    pub fn entry_points(&self) -> Vec<&CallableNode> {
        self.nodes
            .values()
            .filter(|node| node.callers.is_empty())
            .collect()
    }

    pub fn callers_of(&self, id: &SymbolId) -> Vec<&SymbolId> {
        self.nodes
            .get(id)
            .map(|node| node.callers.iter().collect())
            .unwrap_or_default()
    }

    pub fn callees_of(&self, id: &SymbolId) -> Vec<&SymbolId> {
        self.nodes
            .get(id)
            .map(|node| node.callees.iter().collect())
            .unwrap_or_default()
    }

    /// Number of distinct callables reachable from `id`, including `id`
    /// itself. Iterative, and a node revisited through a cycle counts
    /// once.
    pub fn transitive_call_tree_size(&self, id: &SymbolId) -> usize {
        if !self.nodes.contains_key(id) {
            return 0;
        }
        let mut visited: FxHashSet<&SymbolId> = FxHashSet::default();
        let mut stack: Vec<&SymbolId> = vec![id];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            if let Some(node) = self.nodes.get(current) {
                for callee in &node.callees {
                    if !visited.contains(callee) {
                        stack.push(callee);
                    }
                }
            }
        }
        visited.len()
    }
}


/// The callable whose body most closely encloses `scope`. Scopes owned
/// by types (class bodies) are skipped over.
fn enclosing_callable(
    index: &SemanticIndex,
    scope: crate::index::ScopeId,
    nodes: &BTreeMap<SymbolId, CallableNode>,
) -> Option<SymbolId> {
    index
        .scopes
        .walk_outward(scope)
        .filter(|s| s.kind.is_callable_body())
        .filter_map(|s| s.owner.as_ref())
        .find(|owner| nodes.contains_key(*owner))
        .cloned()
}
