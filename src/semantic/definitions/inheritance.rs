use rustc_hash::{FxHashMap, FxHashSet};

use crate::index::SymbolId;

/// Directed `extends`/`implements` edges between type definitions.
///
/// Both directions are kept: parents drive inherited-member lookup,
/// children drive polymorphic resolution (interface → implementations).
/// Edge lists preserve declaration order; multi-inheritance walks are
/// breadth-first in that order with a visited set, so circular
/// inheritance terminates instead of looping.
#[derive(Debug, Default)]
pub struct InheritanceIndex {
    parents: FxHashMap<SymbolId, Vec<SymbolId>>,
    children: FxHashMap<SymbolId, Vec<SymbolId>>,
}

impl InheritanceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.parents.clear();
        self.children.clear();
    }

    pub fn add_edge(&mut self, child: SymbolId, parent: SymbolId) {
        let parents = self.parents.entry(child.clone()).or_default();
        if !parents.contains(&parent) {
            parents.push(parent.clone());
        }
        let children = self.children.entry(parent).or_default();
        if !children.contains(&child) {
            children.push(child);
        }
    }

    /// Direct parents, in declaration order.
    pub fn parents_of(&self, id: &SymbolId) -> &[SymbolId] {
        self.parents.get(id).map_or(&[], Vec::as_slice)
    }

    /// Direct subtypes, in registration order.
    pub fn children_of(&self, id: &SymbolId) -> &[SymbolId] {
        self.children.get(id).map_or(&[], Vec::as_slice)
    }

    /// All types transitively extending/implementing `id`, breadth-first,
    /// excluding `id` itself. Cycle-safe.
    pub fn transitive_subtypes(&self, id: &SymbolId) -> Vec<SymbolId> {
        self.walk(id, |index, current| index.children_of(current))
    }

    /// All ancestors of `id`, breadth-first, excluding `id` itself.
    /// Cycle-safe.
    pub fn transitive_supertypes(&self, id: &SymbolId) -> Vec<SymbolId> {
        self.walk(id, |index, current| index.parents_of(current))
    }

    fn walk<'a>(
        &'a self,
        start: &SymbolId,
        next: impl Fn(&'a Self, &SymbolId) -> &'a [SymbolId],
    ) -> Vec<SymbolId> {
        let mut visited: FxHashSet<SymbolId> = FxHashSet::default();
        visited.insert(start.clone());
        let mut queue: std::collections::VecDeque<SymbolId> =
            next(self, start).iter().cloned().collect();
        let mut result = Vec::new();

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current.clone()) {
                continue;
            }
            queue.extend(next(self, &current).iter().cloned());
            result.push(current);
        }

        result
    }
}
