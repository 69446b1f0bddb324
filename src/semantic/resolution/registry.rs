use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::core::{FilePath, Location};
use crate::index::SymbolReference;
use crate::semantic::resolvers::{ResolveCtx, resolve_reference};
use crate::semantic::types::ResolutionCandidate;

/// One reference together with everything it may point at. An empty
/// candidate list is a recorded fact, not a missing entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedReference {
    pub reference: SymbolReference,
    pub candidates: Vec<ResolutionCandidate>,
}

#[derive(Debug, Default)]
struct FileResolutions {
    /// Extraction order, which keeps iteration deterministic.
    entries: Vec<ResolvedReference>,
    by_location: FxHashMap<Location, usize>,
}

/// Candidate lists for every reference in the project, keyed by file and
/// reference location.
///
/// The registry is always fully populated: the project re-resolves
/// eagerly after each mutation, so readers never observe a pending or
/// partially resolved state.
#[derive(Debug, Default)]
pub struct ResolutionRegistry {
    files: IndexMap<FilePath, FileResolutions>,
}

impl ResolutionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidate_file(&mut self, file: &FilePath) {
        self.files.shift_remove(file);
    }

    /// Resolve every reference of every given file against the current
    /// registries, replacing whatever was cached for them.
    pub fn resolve_files<'a>(
        &mut self,
        files: impl Iterator<Item = &'a FilePath>,
        ctx: &ResolveCtx<'_>,
    ) {
        for file in files {
            let Some(index) = ctx.indices.get(file) else {
                self.invalidate_file(file);
                continue;
            };

            let mut resolutions = FileResolutions::default();
            for reference in &index.references {
                let candidates = resolve_reference(ctx, file, reference);
                resolutions
                    .by_location
                    .insert(reference.location(), resolutions.entries.len());
                resolutions.entries.push(ResolvedReference {
                    reference: reference.clone(),
                    candidates,
                });
            }
            trace!(
                file = %file,
                references = resolutions.entries.len(),
                "file resolved"
            );
            self.files.insert(file.clone(), resolutions);
        }
        self.files.sort_keys();
    }

    pub fn candidates_at(&self, file: &FilePath, location: Location) -> Option<&[ResolutionCandidate]> {
        let resolutions = self.files.get(file)?;
        let entry = &resolutions.entries[*resolutions.by_location.get(&location)?];
        Some(&entry.candidates)
    }

    /// All resolutions, file order then extraction order.
    pub fn iter(&self) -> impl Iterator<Item = (&FilePath, &ResolvedReference)> {
        self.files
            .iter()
            .flat_map(|(file, res)| res.entries.iter().map(move |entry| (file, entry)))
    }

    /// References nothing could be found for.
    pub fn unresolved(&self) -> impl Iterator<Item = (&FilePath, &SymbolReference)> {
        self.iter()
            .filter(|(_, entry)| entry.candidates.is_empty())
            .map(|(file, entry)| (file, &entry.reference))
    }

    pub fn len(&self) -> usize {
        self.files.values().map(|res| res.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
