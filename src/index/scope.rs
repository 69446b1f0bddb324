use super::symbol_id::SymbolId;

/// Identifier of a lexical scope, local to one file's scope tree.
///
/// Scope ids are plain indices into the owning [`ScopeTree`]; the owning
/// file travels alongside wherever scopes cross module boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScopeId(pub u32);

impl ScopeId {
    /// The module (file) scope, always index 0.
    pub const ROOT: ScopeId = ScopeId(0);

    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What kind of lexical region a scope is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Module,
    Class,
    Interface,
    Enum,
    Function,
    Method,
    Block,
}

impl ScopeKind {
    /// Scopes that belong to a type declaration's body.
    pub fn is_type_body(self) -> bool {
        matches!(self, ScopeKind::Class | ScopeKind::Interface | ScopeKind::Enum)
    }

    /// Scopes that belong to a callable's body.
    pub fn is_callable_body(self) -> bool {
        matches!(self, ScopeKind::Function | ScopeKind::Method)
    }
}

/// A node in a file's lexical scope tree.
#[derive(Debug, Clone)]
pub struct Scope {
    pub id: ScopeId,
    pub kind: ScopeKind,
    /// Name of the declaration that opened this scope, if any
    /// (class name, function name). Blocks and modules are unnamed.
    pub name: Option<String>,
    pub parent: Option<ScopeId>,
    /// The definition whose body this scope is. Set by the indexer for
    /// class/function/method bodies; the call-graph builder relies on it
    /// to find the callable enclosing a reference.
    pub owner: Option<SymbolId>,
}

/// The scope tree of a single file: module scope at index 0, every other
/// scope reachable through parent pointers.
#[derive(Debug, Clone, Default)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
}

impl ScopeTree {
    /// Create a tree containing only the module scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope {
                id: ScopeId::ROOT,
                kind: ScopeKind::Module,
                name: None,
                parent: None,
                owner: None,
            }],
        }
    }

    /// Append a child scope and return its id.
    pub fn push_scope(
        &mut self,
        kind: ScopeKind,
        name: Option<String>,
        parent: ScopeId,
        owner: Option<SymbolId>,
    ) -> ScopeId {
        let id = ScopeId::new(self.scopes.len());
        self.scopes.push(Scope {
            id,
            kind,
            name,
            parent: Some(parent),
            owner,
        });
        id
    }

    pub fn get(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.index())
    }

    pub fn parent_of(&self, id: ScopeId) -> Option<ScopeId> {
        self.get(id)?.parent
    }

    pub fn contains(&self, id: ScopeId) -> bool {
        id.index() < self.scopes.len()
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scope> {
        self.scopes.iter()
    }

    /// Walk outward from `start`, yielding `start` first, then each parent.
    /// The walk is iterative and bounded by the tree size, so a corrupted
    /// parent chain cannot loop forever.
    pub fn walk_outward(&self, start: ScopeId) -> ScopeChain<'_> {
        ScopeChain {
            tree: self,
            current: Some(start),
            steps: 0,
        }
    }

    /// Find the nearest enclosing scope (including `start` itself) matching
    /// the predicate.
    pub fn nearest(&self, start: ScopeId, pred: impl Fn(&Scope) -> bool) -> Option<&Scope> {
        self.walk_outward(start).find(|scope| pred(scope))
    }
}

/// Iterator over a scope's parent chain. See [`ScopeTree::walk_outward`].
pub struct ScopeChain<'a> {
    tree: &'a ScopeTree,
    current: Option<ScopeId>,
    steps: usize,
}

impl<'a> Iterator for ScopeChain<'a> {
    type Item = &'a Scope;

    fn next(&mut self) -> Option<Self::Item> {
        // The step bound guards against malformed parent cycles.
        if self.steps > self.tree.len() {
            return None;
        }
        self.steps += 1;
        let scope = self.tree.get(self.current?)?;
        self.current = scope.parent;
        Some(scope)
    }
}
