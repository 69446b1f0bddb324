use tracing::trace;

use crate::core::FilePath;
use crate::index::{Definition, ScopeId};
use crate::semantic::types::ResolutionCandidate;

use super::collection::dispatch_through_collection;
use super::context::ResolveCtx;

/// Resolve a bare call `handler()`.
///
/// Plain scope lookup; imports resolve through export maps inside the
/// scope resolver. A hit on a collection-derived variable reroutes to
/// collection dispatch, a hit on a lambda-holding variable resolves to
/// the lambda itself.
pub fn resolve_function_call(
    ctx: &ResolveCtx<'_>,
    file: &FilePath,
    scope: ScopeId,
    name: &str,
) -> Vec<ResolutionCandidate> {
    let Some(id) = ctx.resolve_name(file, scope, name) else {
        trace!(name, file = %file, "call target not in scope");
        return Vec::new();
    };

    if let Some(def) = ctx.definition(&id) {
        if matches!(def, Definition::Variable { .. } | Definition::Constant { .. }) {
            if let Some(candidates) = dispatch_through_collection(ctx, file, scope, &id) {
                return candidates;
            }
            if let Some(lambda) = ctx.types.lambda_binding(ctx.defs, &id) {
                return vec![ResolutionCandidate::certain(
                    lambda.clone(),
                    "lambda binding",
                )];
            }
        }
    }

    vec![ResolutionCandidate::certain(id, "lexical scope")]
}

/// Resolve `new Foo()` (or a language's construction call).
///
/// Resolves the class through scope lookup and aliases, then prefers
/// the declared constructor over the class itself. The constructed type
/// was already recorded against the assignment target during type
/// extraction.
pub fn resolve_constructor_call(
    ctx: &ResolveCtx<'_>,
    file: &FilePath,
    scope: ScopeId,
    name: &str,
) -> Vec<ResolutionCandidate> {
    let Some(type_id) = ctx.resolve_type_name(file, scope, name) else {
        trace!(name, file = %file, "constructed type not in scope");
        return Vec::new();
    };

    if let Some(ctor) = ctx.types.resolve_constructor(ctx.defs, &type_id) {
        return vec![ResolutionCandidate::certain(ctor, "declared constructor")];
    }
    // No explicit constructor: the class definition stands in for the
    // implicit one.
    vec![ResolutionCandidate::certain(type_id, "implicit constructor")]
}
