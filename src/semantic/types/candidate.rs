use crate::index::SymbolId;

/// How sure the resolver is that a candidate is the actual target.
///
/// Ordering matters: `Certain > Likely > Possible`, so candidate lists can
/// be ranked by confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Confidence {
    /// Exactly one will run if this reference executes at all. Collection
    /// dispatch candidates are never more than `Possible`.
    Possible,
    /// The binding is right but the callable behind it is inferred.
    Likely,
    /// Statically unambiguous (single binding, or one concrete
    /// implementation of a polymorphic call).
    Certain,
}

/// A possible target definition for a reference.
///
/// A fully resolved reference is the special case of a single `Certain`
/// candidate; polymorphic calls yield several `Certain` candidates (one
/// per implementation); collection dispatch yields several `Possible`
/// ones; an unresolvable reference yields none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionCandidate {
    pub symbol_id: SymbolId,
    pub confidence: Confidence,
    /// Short human-readable note on how this candidate was found
    /// (`"lexical scope"`, `"interface implementation"`, ...).
    pub reason: &'static str,
}

impl ResolutionCandidate {
    pub fn certain(symbol_id: SymbolId, reason: &'static str) -> Self {
        Self {
            symbol_id,
            confidence: Confidence::Certain,
            reason,
        }
    }

    pub fn possible(symbol_id: SymbolId, reason: &'static str) -> Self {
        Self {
            symbol_id,
            confidence: Confidence::Possible,
            reason,
        }
    }
}
