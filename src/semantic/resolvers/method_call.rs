use tracing::trace;

use crate::core::{FilePath, Location};
use crate::index::{Definition, ScopeId, SymbolId};
use crate::semantic::types::{Confidence, ResolutionCandidate};

use super::context::ResolveCtx;

/// Resolve `receiver.method()` where the receiver is not a self keyword.
///
/// The receiver's static type comes from explicit bindings, constructor
/// tracking, or return-type inference; the method is then a member of
/// that type (inherited members included). An interface or abstract
/// class receiver switches to polymorphic resolution: one certain
/// candidate per concrete implementation that defines the method.
pub fn resolve_method_call(
    ctx: &ResolveCtx<'_>,
    file: &FilePath,
    scope: ScopeId,
    name: &str,
    receiver_location: Location,
    property_chain: &[String],
) -> Vec<ResolutionCandidate> {
    let Some(receiver_name) = property_chain.first() else {
        return Vec::new();
    };

    // `Foo.create()` with Foo a type: static member lookup, no value
    // typing involved.
    if let Some(type_id) = receiver_as_type(ctx, file, scope, receiver_name) {
        return resolve_on_type(ctx, file, scope, &type_id, property_chain, name, Confidence::Certain);
    }

    let Some((type_id, confidence)) =
        ctx.value_type_id(file, scope, receiver_name, receiver_location)
    else {
        trace!(receiver = %receiver_name, file = %file, "untyped receiver");
        return Vec::new();
    };

    resolve_on_type(ctx, file, scope, &type_id, property_chain, name, confidence)
}

fn resolve_on_type(
    ctx: &ResolveCtx<'_>,
    file: &FilePath,
    scope: ScopeId,
    type_id: &SymbolId,
    property_chain: &[String],
    name: &str,
    confidence: Confidence,
) -> Vec<ResolutionCandidate> {
    // Interior links of `a.b.c()` narrow the receiver type first.
    let interior = property_chain
        .get(1..property_chain.len().saturating_sub(1))
        .unwrap_or(&[]);
    let Some(target_type) = ctx.walk_member_chain(file, scope, type_id.clone(), interior) else {
        return Vec::new();
    };

    if ctx
        .definition(&target_type)
        .is_some_and(Definition::is_abstract_type)
    {
        return resolve_polymorphic(ctx, &target_type, name);
    }

    match ctx.types.resolve_member(ctx.defs, &target_type, name) {
        Some(member) => vec![ResolutionCandidate {
            symbol_id: member,
            confidence,
            reason: "member of receiver type",
        }],
        None => Vec::new(),
    }
}

/// Every concrete type transitively implementing `abstract_type` that
/// defines `name` contributes one certain candidate. Distinct call
/// edges, not a merged one.
fn resolve_polymorphic(
    ctx: &ResolveCtx<'_>,
    abstract_type: &SymbolId,
    name: &str,
) -> Vec<ResolutionCandidate> {
    let mut candidates = Vec::new();
    let mut seen: Vec<SymbolId> = Vec::new();

    for subtype in ctx.defs.inheritance().transitive_subtypes(abstract_type) {
        let concrete = ctx
            .definition(&subtype)
            .is_some_and(|def| def.kind().is_type() && !def.is_abstract_type());
        if !concrete {
            continue;
        }
        let Some((member, origin)) = ctx.types.resolve_member_with_origin(ctx.defs, &subtype, name)
        else {
            continue;
        };
        // Inheriting only the abstract declaration does not make the
        // subtype an implementation of the method.
        if ctx
            .definition(&origin)
            .is_some_and(Definition::is_abstract_type)
        {
            continue;
        }
        if seen.contains(&member) {
            continue;
        }
        seen.push(member.clone());
        candidates.push(ResolutionCandidate::certain(
            member,
            "interface implementation",
        ));
    }

    trace!(
        name,
        implementations = candidates.len(),
        "polymorphic method resolution"
    );
    candidates
}

fn receiver_as_type(
    ctx: &ResolveCtx<'_>,
    file: &FilePath,
    scope: ScopeId,
    receiver_name: &str,
) -> Option<SymbolId> {
    let id = ctx.resolve_name(file, scope, receiver_name)?;
    ctx.definition(&id)?.kind().is_type().then_some(id)
}
