use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::index::SymbolId;
use crate::semantic::DefinitionRegistry;

use super::registry::TypeRegistry;

/// Member maps of one type definition: methods and properties by name,
/// the constructor if one exists, and the raw parent name list.
///
/// Parent names stay unresolved here; resolved parent ids live in the
/// [`InheritanceIndex`](crate::semantic::definitions::InheritanceIndex),
/// which the member walks below consult.
#[derive(Debug, Clone, Default)]
pub struct TypeMemberInfo {
    pub methods: FxHashMap<String, SymbolId>,
    pub properties: FxHashMap<String, SymbolId>,
    pub constructor: Option<SymbolId>,
    pub parent_names: Vec<String>,
}

impl TypeMemberInfo {
    /// Look up a directly-declared member, methods before properties.
    pub fn own_member(&self, name: &str) -> Option<&SymbolId> {
        self.methods.get(name).or_else(|| self.properties.get(name))
    }
}

// Inherited-member resolution: breadth-first over the inheritance index
// with a visited set, declaration order among parents.
impl TypeRegistry {
    /// Resolve `name` as a member of `type_id`, walking `extends` edges.
    pub fn resolve_member(
        &self,
        defs: &DefinitionRegistry,
        type_id: &SymbolId,
        name: &str,
    ) -> Option<SymbolId> {
        self.resolve_member_with_origin(defs, type_id, name)
            .map(|(member, _origin)| member)
    }

    /// Like [`resolve_member`](Self::resolve_member), but also reports the
    /// type that actually declares the member. Polymorphic resolution
    /// needs to know whether an implementation is concrete or just the
    /// abstract declaration inherited back from the interface.
    pub fn resolve_member_with_origin(
        &self,
        defs: &DefinitionRegistry,
        type_id: &SymbolId,
        name: &str,
    ) -> Option<(SymbolId, SymbolId)> {
        let mut visited: FxHashSet<SymbolId> = FxHashSet::default();
        let mut queue: VecDeque<SymbolId> = VecDeque::new();
        queue.push_back(type_id.clone());

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current.clone()) {
                continue;
            }
            if let Some(info) = self.member_info(defs, &current) {
                if let Some(member) = info.own_member(name) {
                    return Some((member.clone(), current));
                }
            }
            queue.extend(defs.inheritance().parents_of(&current).iter().cloned());
        }

        None
    }

    /// The constructor of `type_id`, searching ancestors if the type
    /// itself declares none.
    pub fn resolve_constructor(
        &self,
        defs: &DefinitionRegistry,
        type_id: &SymbolId,
    ) -> Option<SymbolId> {
        let mut visited: FxHashSet<SymbolId> = FxHashSet::default();
        let mut queue: VecDeque<SymbolId> = VecDeque::new();
        queue.push_back(type_id.clone());

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current.clone()) {
                continue;
            }
            if let Some(ctor) = self
                .member_info(defs, &current)
                .and_then(|info| info.constructor.clone())
            {
                return Some(ctor);
            }
            queue.extend(defs.inheritance().parents_of(&current).iter().cloned());
        }

        None
    }

    /// The declared type of a property member (annotation or constructor
    /// binding at its definition site), for walking property chains.
    pub fn property_type_name(
        &self,
        defs: &DefinitionRegistry,
        member_id: &SymbolId,
    ) -> Option<String> {
        let file = defs.file_of(member_id)?;
        let def = defs.get(member_id)?;
        if let Some(annotation) = def.type_annotation() {
            return Some(annotation.to_string());
        }
        self.binding_at(file, def.location())
            .or_else(|| self.constructor_binding_at(file, def.location()))
            .map(str::to_string)
    }
}
