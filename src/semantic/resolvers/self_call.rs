use tracing::trace;

use crate::core::FilePath;
use crate::index::{ScopeId, SymbolId};
use crate::semantic::types::ResolutionCandidate;

use super::context::ResolveCtx;

/// Resolve `this.x()` / `self.x()` / `cls.x()` / `super.x()`.
///
/// The keyword names the type whose body lexically encloses the call;
/// `super` then follows exactly one parent edge. Interior chain links
/// (`this.engine.start()`) walk member types; the final name resolves as
/// a member, inherited members included. One certain candidate or none.
pub fn resolve_self_call(
    ctx: &ResolveCtx<'_>,
    file: &FilePath,
    scope: ScopeId,
    keyword: &str,
    property_chain: &[String],
    name: &str,
) -> Vec<ResolutionCandidate> {
    let Some(receiver) = keyword_type(ctx, file, scope, keyword) else {
        trace!(keyword, file = %file, "no enclosing type for self keyword");
        return Vec::new();
    };

    // Chain minus the keyword and the final member name.
    let interior = property_chain
        .get(1..property_chain.len().saturating_sub(1))
        .unwrap_or(&[]);
    let Some(target_type) = ctx.walk_member_chain(file, scope, receiver, interior) else {
        return Vec::new();
    };

    match ctx.types.resolve_member(ctx.defs, &target_type, name) {
        Some(member) => vec![ResolutionCandidate::certain(member, "self member")],
        None => Vec::new(),
    }
}

fn keyword_type(
    ctx: &ResolveCtx<'_>,
    file: &FilePath,
    scope: ScopeId,
    keyword: &str,
) -> Option<SymbolId> {
    let enclosing = ctx.enclosing_type(file, scope)?;
    if keyword == "super" {
        // First declared parent; `super` with no parent stays unresolved.
        return ctx
            .defs
            .inheritance()
            .parents_of(&enclosing)
            .first()
            .cloned();
    }
    Some(enclosing)
}
