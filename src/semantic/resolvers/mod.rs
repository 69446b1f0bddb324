//! One resolver per reference shape, dispatched exhaustively on the
//! variant. Resolution is total: an unresolvable reference yields an
//! empty candidate list, never an error.

mod calls;
mod collection;
mod context;
mod method_call;
mod self_call;
mod values;

pub use context::ResolveCtx;

use crate::core::FilePath;
use crate::index::SymbolReference;
use crate::semantic::types::ResolutionCandidate;

pub fn resolve_reference(
    ctx: &ResolveCtx<'_>,
    file: &FilePath,
    reference: &SymbolReference,
) -> Vec<ResolutionCandidate> {
    match reference {
        SymbolReference::SelfReferenceCall {
            name,
            scope_id,
            keyword,
            property_chain,
            ..
        } => self_call::resolve_self_call(ctx, file, *scope_id, keyword, property_chain, name),
        SymbolReference::MethodCall {
            name,
            scope_id,
            receiver_location,
            property_chain,
            ..
        } => method_call::resolve_method_call(
            ctx,
            file,
            *scope_id,
            name,
            *receiver_location,
            property_chain,
        ),
        SymbolReference::FunctionCall { name, scope_id, .. } => {
            calls::resolve_function_call(ctx, file, *scope_id, name)
        }
        SymbolReference::ConstructorCall { name, scope_id, .. } => {
            calls::resolve_constructor_call(ctx, file, *scope_id, name)
        }
        SymbolReference::VariableRef { name, scope_id, .. }
        | SymbolReference::Assignment { name, scope_id, .. } => {
            values::resolve_value_ref(ctx, file, *scope_id, name)
        }
        SymbolReference::PropertyAccess {
            name,
            scope_id,
            receiver_location,
            property_chain,
            ..
        } => values::resolve_property_access(
            ctx,
            file,
            *scope_id,
            name,
            *receiver_location,
            property_chain,
        ),
        SymbolReference::TypeRef { name, scope_id, .. } => {
            values::resolve_type_ref(ctx, file, *scope_id, name)
        }
    }
}

#[cfg(test)]
mod tests;
