use crate::core::Location;

use super::scope::ScopeId;

/// Whether a variable or property use reads or writes the binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessType {
    Read,
    Write,
}

/// Where a type name appeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeContext {
    /// Variable/parameter/return annotation (`x: Foo`).
    Annotation,
    /// Parent list of a type declaration (`extends Foo`, `implements Bar`).
    Inheritance,
    /// Generic argument position (`List<Foo>`).
    GenericArgument,
    /// Cast or type assertion (`x as Foo`, `Foo(x)` type coercion).
    Cast,
}

/// A use-site of a name, tagged by its syntactic shape.
///
/// One variant per call-site shape; fields a shape requires are plain
/// fields on its variant, never options. Every variant carries the
/// referenced `name`, the `location` of that name, and the `scope_id` of
/// the lexical scope the reference appears in.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolReference {
    /// `this.handle()`, `self.run()`, `cls.make()`, `super.init()`.
    SelfReferenceCall {
        name: String,
        location: Location,
        scope_id: ScopeId,
        /// The keyword as written: `this`, `self`, `cls`, or `super`.
        keyword: String,
        /// Full dotted chain including the keyword and the final method
        /// name, e.g. `["this", "engine", "start"]`.
        property_chain: Vec<String>,
    },
    /// `receiver.method()` where the receiver is an expression other than
    /// a self keyword.
    MethodCall {
        name: String,
        location: Location,
        scope_id: ScopeId,
        /// Location of the receiver expression, for type-binding lookup.
        receiver_location: Location,
        /// Dotted chain from the receiver name to the method name.
        property_chain: Vec<String>,
    },
    /// Bare call: `handler()`.
    FunctionCall {
        name: String,
        location: Location,
        scope_id: ScopeId,
    },
    /// `new Foo()` / Python `Foo()` in construction position.
    ConstructorCall {
        name: String,
        location: Location,
        scope_id: ScopeId,
        /// Location of the binding the instance is assigned to, if the
        /// construction is the right-hand side of an assignment.
        construct_target: Option<Location>,
    },
    /// A plain read or write of a variable name.
    VariableRef {
        name: String,
        location: Location,
        scope_id: ScopeId,
        access: AccessType,
    },
    /// `obj.field` (not in call position).
    PropertyAccess {
        name: String,
        location: Location,
        scope_id: ScopeId,
        receiver_location: Location,
        property_chain: Vec<String>,
        access: AccessType,
        is_optional_chain: bool,
    },
    /// A type name in annotation/inheritance/generic position.
    TypeRef {
        name: String,
        location: Location,
        scope_id: ScopeId,
        type_context: TypeContext,
    },
    /// The target side of an assignment (`x = ...`).
    Assignment {
        name: String,
        location: Location,
        scope_id: ScopeId,
        /// Location of the assigned value's expression.
        target_location: Location,
    },
}

impl SymbolReference {
    pub fn name(&self) -> &str {
        match self {
            SymbolReference::SelfReferenceCall { name, .. }
            | SymbolReference::MethodCall { name, .. }
            | SymbolReference::FunctionCall { name, .. }
            | SymbolReference::ConstructorCall { name, .. }
            | SymbolReference::VariableRef { name, .. }
            | SymbolReference::PropertyAccess { name, .. }
            | SymbolReference::TypeRef { name, .. }
            | SymbolReference::Assignment { name, .. } => name,
        }
    }

    pub fn location(&self) -> Location {
        match self {
            SymbolReference::SelfReferenceCall { location, .. }
            | SymbolReference::MethodCall { location, .. }
            | SymbolReference::FunctionCall { location, .. }
            | SymbolReference::ConstructorCall { location, .. }
            | SymbolReference::VariableRef { location, .. }
            | SymbolReference::PropertyAccess { location, .. }
            | SymbolReference::TypeRef { location, .. }
            | SymbolReference::Assignment { location, .. } => *location,
        }
    }

    pub fn scope_id(&self) -> ScopeId {
        match self {
            SymbolReference::SelfReferenceCall { scope_id, .. }
            | SymbolReference::MethodCall { scope_id, .. }
            | SymbolReference::FunctionCall { scope_id, .. }
            | SymbolReference::ConstructorCall { scope_id, .. }
            | SymbolReference::VariableRef { scope_id, .. }
            | SymbolReference::PropertyAccess { scope_id, .. }
            | SymbolReference::TypeRef { scope_id, .. }
            | SymbolReference::Assignment { scope_id, .. } => *scope_id,
        }
    }

    /// Call-shaped references contribute edges to the call graph.
    pub fn is_call(&self) -> bool {
        matches!(
            self,
            SymbolReference::SelfReferenceCall { .. }
                | SymbolReference::MethodCall { .. }
                | SymbolReference::FunctionCall { .. }
                | SymbolReference::ConstructorCall { .. }
        )
    }
}
