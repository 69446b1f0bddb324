//! A small builder over [`SemanticIndex`] so tests read like the source
//! files they stand in for. Lines double as unique locations; column is
//! always 0.

use refgraph::core::{FilePath, Location};
use refgraph::index::{
    Definition, Initializer, Language, ScopeId, ScopeKind, ScopeTree, SemanticIndex,
    SymbolId, SymbolReference, TypeHints,
};

pub fn at(line: u32) -> Location {
    Location::new(line, 0)
}

pub struct IndexBuilder {
    file: FilePath,
    language: Language,
    definitions: Vec<Definition>,
    references: Vec<SymbolReference>,
    scopes: ScopeTree,
    type_hints: TypeHints,
}

impl IndexBuilder {
    pub fn new(path: &str) -> Self {
        Self {
            file: FilePath::new(path),
            language: Language::TypeScript,
            definitions: Vec::new(),
            references: Vec::new(),
            scopes: ScopeTree::new(),
            type_hints: TypeHints::default(),
        }
    }

    pub fn file(&self) -> FilePath {
        self.file.clone()
    }

    pub fn build(self) -> SemanticIndex {
        SemanticIndex {
            file: self.file,
            language: self.language,
            definitions: self.definitions,
            references: self.references,
            scopes: self.scopes,
            type_hints: self.type_hints,
        }
    }

    // ---- definitions -------------------------------------------------

    /// A function plus its body scope. Returns (id, body scope).
    pub fn function(&mut self, name: &str, line: u32, scope: ScopeId) -> (SymbolId, ScopeId) {
        let symbol_id = SymbolId::derive("function", &self.file, at(line), name);
        self.definitions.push(Definition::Function {
            symbol_id: symbol_id.clone(),
            name: name.to_string(),
            location: at(line),
            scope_id: scope,
            language: self.language,
            is_exported: false,
            return_type: None,
            is_anonymous: false,
        });
        let body = self.scopes.push_scope(
            ScopeKind::Function,
            Some(name.to_string()),
            scope,
            Some(symbol_id.clone()),
        );
        (symbol_id, body)
    }

    pub fn exported_function(
        &mut self,
        name: &str,
        line: u32,
        scope: ScopeId,
    ) -> (SymbolId, ScopeId) {
        let (id, body) = self.function(name, line, scope);
        self.set_exported(&id);
        (id, body)
    }

    /// A class plus its body scope. Returns (id, body scope).
    pub fn class(&mut self, name: &str, line: u32, extends: &[&str]) -> (SymbolId, ScopeId) {
        self.type_def(name, line, extends, false, false)
    }

    pub fn abstract_class(
        &mut self,
        name: &str,
        line: u32,
        extends: &[&str],
    ) -> (SymbolId, ScopeId) {
        self.type_def(name, line, extends, true, false)
    }

    pub fn interface(&mut self, name: &str, line: u32) -> (SymbolId, ScopeId) {
        self.type_def(name, line, &[], false, true)
    }

    fn type_def(
        &mut self,
        name: &str,
        line: u32,
        extends: &[&str],
        is_abstract: bool,
        is_interface: bool,
    ) -> (SymbolId, ScopeId) {
        let kind = if is_interface { "interface" } else { "class" };
        let symbol_id = SymbolId::derive(kind, &self.file, at(line), name);
        let extends: Vec<String> = extends.iter().map(|s| s.to_string()).collect();
        if is_interface {
            self.definitions.push(Definition::Interface {
                symbol_id: symbol_id.clone(),
                name: name.to_string(),
                location: at(line),
                scope_id: ScopeId::ROOT,
                language: self.language,
                is_exported: false,
                methods: Vec::new(),
                properties: Vec::new(),
                extends,
            });
        } else {
            self.definitions.push(Definition::Class {
                symbol_id: symbol_id.clone(),
                name: name.to_string(),
                location: at(line),
                scope_id: ScopeId::ROOT,
                language: self.language,
                is_exported: false,
                methods: Vec::new(),
                properties: Vec::new(),
                extends,
                is_abstract,
            });
        }
        let scope_kind = if is_interface {
            ScopeKind::Interface
        } else {
            ScopeKind::Class
        };
        let body = self.scopes.push_scope(
            scope_kind,
            Some(name.to_string()),
            ScopeId::ROOT,
            Some(symbol_id.clone()),
        );
        (symbol_id, body)
    }

    /// A method plus its body scope. Returns (id, body scope).
    pub fn method(&mut self, name: &str, line: u32, class_body: ScopeId) -> (SymbolId, ScopeId) {
        let symbol_id = SymbolId::derive("method", &self.file, at(line), name);
        self.definitions.push(Definition::Method {
            symbol_id: symbol_id.clone(),
            name: name.to_string(),
            location: at(line),
            scope_id: class_body,
            language: self.language,
            is_exported: false,
            return_type: None,
        });
        let body = self.scopes.push_scope(
            ScopeKind::Method,
            Some(name.to_string()),
            class_body,
            Some(symbol_id.clone()),
        );
        (symbol_id, body)
    }

    /// A constructor plus its body scope. Returns (id, body scope).
    pub fn constructor(&mut self, line: u32, class_body: ScopeId) -> (SymbolId, ScopeId) {
        let symbol_id = SymbolId::derive("constructor", &self.file, at(line), "constructor");
        self.definitions.push(Definition::Constructor {
            symbol_id: symbol_id.clone(),
            name: "constructor".to_string(),
            location: at(line),
            scope_id: class_body,
            language: self.language,
            is_exported: false,
        });
        let body = self.scopes.push_scope(
            ScopeKind::Method,
            Some("constructor".to_string()),
            class_body,
            Some(symbol_id.clone()),
        );
        (symbol_id, body)
    }

    pub fn variable(
        &mut self,
        name: &str,
        line: u32,
        scope: ScopeId,
        initializer: Option<Initializer>,
    ) -> SymbolId {
        let symbol_id = SymbolId::derive("variable", &self.file, at(line), name);
        self.definitions.push(Definition::Variable {
            symbol_id: symbol_id.clone(),
            name: name.to_string(),
            location: at(line),
            scope_id: scope,
            language: self.language,
            is_exported: false,
            type_annotation: None,
            initializer,
        });
        symbol_id
    }

    pub fn annotated_variable(
        &mut self,
        name: &str,
        line: u32,
        scope: ScopeId,
        type_name: &str,
    ) -> SymbolId {
        let symbol_id = self.variable(name, line, scope, None);
        if let Some(Definition::Variable {
            type_annotation, ..
        }) = self.definitions.last_mut()
        {
            *type_annotation = Some(type_name.to_string());
        }
        symbol_id
    }

    pub fn import(
        &mut self,
        name: &str,
        line: u32,
        module_path: &str,
        original_name: Option<&str>,
    ) -> SymbolId {
        let symbol_id = SymbolId::derive("import", &self.file, at(line), name);
        self.definitions.push(Definition::Import {
            symbol_id: symbol_id.clone(),
            name: name.to_string(),
            location: at(line),
            scope_id: ScopeId::ROOT,
            language: self.language,
            is_exported: false,
            module_path: module_path.to_string(),
            original_name: original_name.map(str::to_string),
            is_wildcard: false,
        });
        symbol_id
    }

    pub fn set_exported(&mut self, id: &SymbolId) {
        for def in &mut self.definitions {
            if def.symbol_id() == id {
                match def {
                    Definition::Function { is_exported, .. }
                    | Definition::Method { is_exported, .. }
                    | Definition::Constructor { is_exported, .. }
                    | Definition::Class { is_exported, .. }
                    | Definition::Interface { is_exported, .. }
                    | Definition::Enum { is_exported, .. }
                    | Definition::Variable { is_exported, .. }
                    | Definition::Constant { is_exported, .. }
                    | Definition::Import { is_exported, .. }
                    | Definition::TypeAlias { is_exported, .. } => *is_exported = true,
                }
            }
        }
    }

    // ---- references --------------------------------------------------

    pub fn call(&mut self, name: &str, line: u32, scope: ScopeId) {
        self.references.push(SymbolReference::FunctionCall {
            name: name.to_string(),
            location: at(line),
            scope_id: scope,
        });
    }

    pub fn method_call(
        &mut self,
        receiver: &str,
        receiver_line: u32,
        name: &str,
        line: u32,
        scope: ScopeId,
    ) {
        self.references.push(SymbolReference::MethodCall {
            name: name.to_string(),
            location: at(line),
            scope_id: scope,
            receiver_location: at(receiver_line),
            property_chain: vec![receiver.to_string(), name.to_string()],
        });
    }

    pub fn self_call(&mut self, keyword: &str, name: &str, line: u32, scope: ScopeId) {
        self.references.push(SymbolReference::SelfReferenceCall {
            name: name.to_string(),
            location: at(line),
            scope_id: scope,
            keyword: keyword.to_string(),
            property_chain: vec![keyword.to_string(), name.to_string()],
        });
    }

    pub fn constructor_call(
        &mut self,
        name: &str,
        line: u32,
        scope: ScopeId,
        construct_target: Option<Location>,
    ) {
        self.references.push(SymbolReference::ConstructorCall {
            name: name.to_string(),
            location: at(line),
            scope_id: scope,
            construct_target,
        });
    }
}
