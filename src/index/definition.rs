use crate::core::Location;

use super::scope::ScopeId;
use super::symbol_id::SymbolId;

/// Source language of a file, as reported by the external indexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    TypeScript,
    JavaScript,
    Rust,
}

/// Discriminant of a [`Definition`], for kind-filtered queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    Function,
    Method,
    Constructor,
    Class,
    Interface,
    Enum,
    Variable,
    Constant,
    Import,
    TypeAlias,
}

impl DefinitionKind {
    pub fn is_callable(self) -> bool {
        matches!(
            self,
            DefinitionKind::Function | DefinitionKind::Method | DefinitionKind::Constructor
        )
    }

    pub fn is_type(self) -> bool {
        matches!(
            self,
            DefinitionKind::Class | DefinitionKind::Interface | DefinitionKind::Enum
        )
    }
}

/// Shape of a collection literal that can hold function values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionType {
    Map,
    Set,
    Array,
    Object,
}

/// What a variable's initializer looked like, as far as the indexer could
/// tell without resolving any names. The type registry turns these raw
/// shapes into function collections, derived-variable links, and
/// constructor bindings.
#[derive(Debug, Clone, PartialEq)]
pub enum Initializer {
    /// A literal collection (`new Map([...])`, `[...]`, `{...}`, `vec![...]`)
    /// whose elements are bare names.
    CollectionLiteral {
        collection_type: CollectionType,
        /// Names appearing in value position (candidate function references).
        element_names: Vec<String>,
        /// Names spread/splatted into the literal (`...OTHER`, `**other`).
        spreads: Vec<String>,
    },
    /// An indexed or keyed read of another variable (`C.get(k)`, `C[k]`).
    CollectionAccess { collection: String },
    /// A plain call (`x = make_thing()`), for return-type inference.
    Call { callee: String },
    /// A constructor call (`x = new Foo()`, `x = Foo()` in Python).
    New { class_name: String },
    /// An anonymous function literal (`x = () => ...`, `x = lambda: ...`);
    /// the indexer emits the function's definition separately and links
    /// its synthetic id here.
    Lambda { function: SymbolId },
}

/// A named, located declaration of a symbol.
///
/// One variant per definition kind; fields a kind requires are plain fields
/// on its variant, never options on a shared struct. Common fields
/// (symbol id, name, location, defining scope, language, export flag) are
/// repeated per variant and reached through the accessor methods.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    Function {
        symbol_id: SymbolId,
        name: String,
        location: Location,
        scope_id: ScopeId,
        language: Language,
        is_exported: bool,
        return_type: Option<String>,
        is_anonymous: bool,
    },
    Method {
        symbol_id: SymbolId,
        name: String,
        location: Location,
        scope_id: ScopeId,
        language: Language,
        is_exported: bool,
        return_type: Option<String>,
    },
    Constructor {
        symbol_id: SymbolId,
        name: String,
        location: Location,
        scope_id: ScopeId,
        language: Language,
        is_exported: bool,
    },
    Class {
        symbol_id: SymbolId,
        name: String,
        location: Location,
        scope_id: ScopeId,
        language: Language,
        is_exported: bool,
        methods: Vec<String>,
        properties: Vec<String>,
        /// Parent type names (`extends`/`implements`/base list), unresolved.
        extends: Vec<String>,
        is_abstract: bool,
    },
    Interface {
        symbol_id: SymbolId,
        name: String,
        location: Location,
        scope_id: ScopeId,
        language: Language,
        is_exported: bool,
        methods: Vec<String>,
        properties: Vec<String>,
        extends: Vec<String>,
    },
    Enum {
        symbol_id: SymbolId,
        name: String,
        location: Location,
        scope_id: ScopeId,
        language: Language,
        is_exported: bool,
        methods: Vec<String>,
        properties: Vec<String>,
        extends: Vec<String>,
    },
    Variable {
        symbol_id: SymbolId,
        name: String,
        location: Location,
        scope_id: ScopeId,
        language: Language,
        is_exported: bool,
        type_annotation: Option<String>,
        initializer: Option<Initializer>,
    },
    Constant {
        symbol_id: SymbolId,
        name: String,
        location: Location,
        scope_id: ScopeId,
        language: Language,
        is_exported: bool,
        type_annotation: Option<String>,
        initializer: Option<Initializer>,
    },
    /// An import binding (`import {x} from "./m"`, `from m import x as y`).
    Import {
        symbol_id: SymbolId,
        /// The local name the import binds (alias if one was given).
        name: String,
        location: Location,
        scope_id: ScopeId,
        language: Language,
        /// Re-exports (`export {x} from "./m"`) are exported imports.
        is_exported: bool,
        /// The module specifier as written (`./handlers`, `pkg.mod`).
        module_path: String,
        /// The name in the source module, when it differs from `name`.
        original_name: Option<String>,
        /// Wildcard imports (`from m import *`, `export * from "./m"`).
        is_wildcard: bool,
    },
    TypeAlias {
        symbol_id: SymbolId,
        name: String,
        location: Location,
        scope_id: ScopeId,
        language: Language,
        is_exported: bool,
        /// Raw right-hand-side type expression, unresolved.
        target: String,
    },
}

impl Definition {
    pub fn symbol_id(&self) -> &SymbolId {
        match self {
            Definition::Function { symbol_id, .. }
            | Definition::Method { symbol_id, .. }
            | Definition::Constructor { symbol_id, .. }
            | Definition::Class { symbol_id, .. }
            | Definition::Interface { symbol_id, .. }
            | Definition::Enum { symbol_id, .. }
            | Definition::Variable { symbol_id, .. }
            | Definition::Constant { symbol_id, .. }
            | Definition::Import { symbol_id, .. }
            | Definition::TypeAlias { symbol_id, .. } => symbol_id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Definition::Function { name, .. }
            | Definition::Method { name, .. }
            | Definition::Constructor { name, .. }
            | Definition::Class { name, .. }
            | Definition::Interface { name, .. }
            | Definition::Enum { name, .. }
            | Definition::Variable { name, .. }
            | Definition::Constant { name, .. }
            | Definition::Import { name, .. }
            | Definition::TypeAlias { name, .. } => name,
        }
    }

    pub fn location(&self) -> Location {
        match self {
            Definition::Function { location, .. }
            | Definition::Method { location, .. }
            | Definition::Constructor { location, .. }
            | Definition::Class { location, .. }
            | Definition::Interface { location, .. }
            | Definition::Enum { location, .. }
            | Definition::Variable { location, .. }
            | Definition::Constant { location, .. }
            | Definition::Import { location, .. }
            | Definition::TypeAlias { location, .. } => *location,
        }
    }

    /// The scope in which this definition's name is bound.
    pub fn scope_id(&self) -> ScopeId {
        match self {
            Definition::Function { scope_id, .. }
            | Definition::Method { scope_id, .. }
            | Definition::Constructor { scope_id, .. }
            | Definition::Class { scope_id, .. }
            | Definition::Interface { scope_id, .. }
            | Definition::Enum { scope_id, .. }
            | Definition::Variable { scope_id, .. }
            | Definition::Constant { scope_id, .. }
            | Definition::Import { scope_id, .. }
            | Definition::TypeAlias { scope_id, .. } => *scope_id,
        }
    }

    pub fn language(&self) -> Language {
        match self {
            Definition::Function { language, .. }
            | Definition::Method { language, .. }
            | Definition::Constructor { language, .. }
            | Definition::Class { language, .. }
            | Definition::Interface { language, .. }
            | Definition::Enum { language, .. }
            | Definition::Variable { language, .. }
            | Definition::Constant { language, .. }
            | Definition::Import { language, .. }
            | Definition::TypeAlias { language, .. } => *language,
        }
    }

    pub fn is_exported(&self) -> bool {
        match self {
            Definition::Function { is_exported, .. }
            | Definition::Method { is_exported, .. }
            | Definition::Constructor { is_exported, .. }
            | Definition::Class { is_exported, .. }
            | Definition::Interface { is_exported, .. }
            | Definition::Enum { is_exported, .. }
            | Definition::Variable { is_exported, .. }
            | Definition::Constant { is_exported, .. }
            | Definition::Import { is_exported, .. }
            | Definition::TypeAlias { is_exported, .. } => *is_exported,
        }
    }

    pub fn kind(&self) -> DefinitionKind {
        match self {
            Definition::Function { .. } => DefinitionKind::Function,
            Definition::Method { .. } => DefinitionKind::Method,
            Definition::Constructor { .. } => DefinitionKind::Constructor,
            Definition::Class { .. } => DefinitionKind::Class,
            Definition::Interface { .. } => DefinitionKind::Interface,
            Definition::Enum { .. } => DefinitionKind::Enum,
            Definition::Variable { .. } => DefinitionKind::Variable,
            Definition::Constant { .. } => DefinitionKind::Constant,
            Definition::Import { .. } => DefinitionKind::Import,
            Definition::TypeAlias { .. } => DefinitionKind::TypeAlias,
        }
    }

    /// Parent type names for Class/Interface/Enum definitions.
    pub fn extends(&self) -> &[String] {
        match self {
            Definition::Class { extends, .. }
            | Definition::Interface { extends, .. }
            | Definition::Enum { extends, .. } => extends,
            _ => &[],
        }
    }

    /// Declared member method names for type definitions.
    pub fn methods(&self) -> &[String] {
        match self {
            Definition::Class { methods, .. }
            | Definition::Interface { methods, .. }
            | Definition::Enum { methods, .. } => methods,
            _ => &[],
        }
    }

    /// Declared property names for type definitions.
    pub fn properties(&self) -> &[String] {
        match self {
            Definition::Class { properties, .. }
            | Definition::Interface { properties, .. }
            | Definition::Enum { properties, .. } => properties,
            _ => &[],
        }
    }

    /// The initializer shape for Variable/Constant definitions.
    pub fn initializer(&self) -> Option<&Initializer> {
        match self {
            Definition::Variable { initializer, .. }
            | Definition::Constant { initializer, .. } => initializer.as_ref(),
            _ => None,
        }
    }

    /// Declared type annotation for Variable/Constant definitions.
    pub fn type_annotation(&self) -> Option<&str> {
        match self {
            Definition::Variable {
                type_annotation, ..
            }
            | Definition::Constant {
                type_annotation, ..
            } => type_annotation.as_deref(),
            _ => None,
        }
    }

    /// Declared return type for Function/Method definitions.
    pub fn return_type(&self) -> Option<&str> {
        match self {
            Definition::Function { return_type, .. }
            | Definition::Method { return_type, .. } => return_type.as_deref(),
            _ => None,
        }
    }

    /// True for types a value can dispatch through polymorphically:
    /// interfaces and abstract classes.
    pub fn is_abstract_type(&self) -> bool {
        match self {
            Definition::Interface { .. } => true,
            Definition::Class { is_abstract, .. } => *is_abstract,
            _ => false,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Definition::Function { is_anonymous: true, .. })
    }
}
