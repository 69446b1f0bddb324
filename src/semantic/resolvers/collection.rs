use tracing::trace;

use crate::core::FilePath;
use crate::index::{ScopeId, SymbolId};
use crate::semantic::types::ResolutionCandidate;

use super::context::ResolveCtx;

/// Resolve a call through a variable that came out of a function
/// collection (`handler = CONFIG.get(kind); handler()`).
///
/// Every function stored in the source collection is a possible
/// candidate, never a certain one: exactly one runs and which one is not
/// statically known.
pub fn dispatch_through_collection(
    ctx: &ResolveCtx<'_>,
    file: &FilePath,
    scope: ScopeId,
    derived_id: &SymbolId,
) -> Option<Vec<ResolutionCandidate>> {
    let collection_name = ctx.types.derived_from(ctx.defs, derived_id)?;
    let collection_id = ctx.resolve_name(file, scope, collection_name)?;
    let collection = ctx.types.collection_of(ctx.defs, &collection_id)?;

    trace!(
        collection = collection_name,
        stored = collection.stored_functions.len(),
        "collection dispatch"
    );
    Some(
        collection
            .stored_functions
            .iter()
            .cloned()
            .map(|id| ResolutionCandidate::possible(id, "stored in collection"))
            .collect(),
    )
}
