use tracing::trace;

use crate::core::{FilePath, Location};
use crate::index::ScopeId;
use crate::semantic::types::ResolutionCandidate;

use super::context::ResolveCtx;

/// Plain variable reads/writes and assignment targets resolve by scope
/// lookup alone.
pub fn resolve_value_ref(
    ctx: &ResolveCtx<'_>,
    file: &FilePath,
    scope: ScopeId,
    name: &str,
) -> Vec<ResolutionCandidate> {
    match ctx.resolve_name(file, scope, name) {
        Some(id) => vec![ResolutionCandidate::certain(id, "lexical scope")],
        None => Vec::new(),
    }
}

/// A type name in annotation, inheritance, generic or cast position.
/// Aliases are transparent.
pub fn resolve_type_ref(
    ctx: &ResolveCtx<'_>,
    file: &FilePath,
    scope: ScopeId,
    name: &str,
) -> Vec<ResolutionCandidate> {
    match ctx.resolve_type_name(file, scope, name) {
        Some(id) => vec![ResolutionCandidate::certain(id, "type in scope")],
        None => Vec::new(),
    }
}

/// `obj.field` outside call position. The interior chain walks member
/// types exactly like a method call; the final name resolves as a member
/// of the last type reached. Falls back to plain scope lookup for
/// single-name chains.
pub fn resolve_property_access(
    ctx: &ResolveCtx<'_>,
    file: &FilePath,
    scope: ScopeId,
    name: &str,
    receiver_location: Location,
    property_chain: &[String],
) -> Vec<ResolutionCandidate> {
    let Some(receiver_name) = property_chain.first() else {
        return resolve_value_ref(ctx, file, scope, name);
    };

    let receiver_type = if let Some(id) = ctx
        .resolve_name(file, scope, receiver_name)
        .filter(|id| ctx.definition(id).is_some_and(|def| def.kind().is_type()))
    {
        // Static access through the type name itself.
        Some(id)
    } else {
        ctx.value_type_id(file, scope, receiver_name, receiver_location)
            .map(|(type_id, _)| type_id)
    };
    let Some(receiver_type) = receiver_type else {
        trace!(receiver = %receiver_name, file = %file, "untyped property receiver");
        return Vec::new();
    };

    let interior = property_chain
        .get(1..property_chain.len().saturating_sub(1))
        .unwrap_or(&[]);
    let Some(target_type) = ctx.walk_member_chain(file, scope, receiver_type, interior) else {
        return Vec::new();
    };

    match ctx.types.resolve_member(ctx.defs, &target_type, name) {
        Some(member) => vec![ResolutionCandidate::certain(member, "member of receiver type")],
        None => Vec::new(),
    }
}
