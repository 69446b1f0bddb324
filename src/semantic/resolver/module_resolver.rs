use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::core::{FilePath, normalize_path};

/// Extensions recognized when matching specifiers against project files.
/// `.d.ts` must come before `.ts` so the `.d` stem never survives.
const KNOWN_EXTENSIONS: &[&str] = &[
    ".d.ts", ".ts", ".tsx", ".js", ".jsx", ".mjs", ".cjs", ".py", ".rs",
];

/// Strip a known source extension, or return the path unchanged.
fn strip_extension(path: &str) -> &str {
    for ext in KNOWN_EXTENSIONS {
        if let Some(stripped) = path.strip_suffix(ext) {
            return stripped;
        }
    }
    path
}

/// Rank of a file as its directory's module entry point, lower wins.
/// `mod` is an entry for Rust only; a stray `mod.py` next to an
/// `__init__.py` must never shadow the package entry.
fn dir_entry_rank(file_name: &str) -> Option<u8> {
    match strip_extension(file_name) {
        "index" => Some(0),
        "__init__" if file_name.ends_with(".py") => Some(0),
        "mod" if file_name.ends_with(".rs") => Some(1),
        _ => None,
    }
}

/// Resolves module specifiers to project files.
///
/// Built from the set of files currently in the project; purely textual,
/// no file-system access. Handles relative specifiers (`./m`, `../m`),
/// project-root paths (`src/m`), and Python dotted paths (`pkg.mod`),
/// all extension-insensitively, with `index.*`/`__init__.py`/`mod.rs`
/// directory entries. Specifiers naming external packages resolve to
/// `None`; an unresolvable import is simply an unresolved name, never
/// an error.
#[derive(Debug, Default)]
pub struct ModuleResolver {
    files: FxHashSet<FilePath>,
    /// Path-minus-extension → file.
    stems: FxHashMap<String, FilePath>,
    /// Directory → its entry-point file and that file's rank.
    dir_entries: FxHashMap<String, (FilePath, u8)>,
}

impl ModuleResolver {
    /// Build the resolver from the known project files, in a
    /// deterministic order (first file wins on stem collisions).
    pub fn new<'a>(known_files: impl Iterator<Item = &'a FilePath>) -> Self {
        let mut resolver = Self::default();
        for file in known_files {
            resolver.files.insert(file.clone());
            resolver
                .stems
                .entry(strip_extension(file.as_str()).to_string())
                .or_insert_with(|| file.clone());
            if let Some(rank) = dir_entry_rank(file.file_name()) {
                let entry = resolver
                    .dir_entries
                    .entry(file.parent_dir().to_string())
                    .or_insert_with(|| (file.clone(), rank));
                if rank < entry.1 {
                    *entry = (file.clone(), rank);
                }
            }
        }
        resolver
    }

    /// Resolve `specifier` as written in `from`, to a project file.
    pub fn resolve(&self, from: &FilePath, specifier: &str) -> Option<FilePath> {
        let candidates = self.candidate_paths(from, specifier);
        for candidate in &candidates {
            if let Some(file) = self.lookup(candidate) {
                trace!(from = %from, specifier, resolved = %file, "module resolved");
                return Some(file);
            }
        }
        trace!(from = %from, specifier, "module specifier did not resolve");
        None
    }

    fn candidate_paths(&self, from: &FilePath, specifier: &str) -> Vec<String> {
        let dir = from.parent_dir();
        // Files at the project root have an empty parent; joining must
        // not produce a leading slash there.
        let joined = |rest: &str| {
            if dir.is_empty() {
                normalize_path(rest)
            } else {
                normalize_path(&format!("{dir}/{rest}"))
            }
        };

        if specifier.starts_with("./") || specifier.starts_with("../") {
            return vec![joined(specifier)];
        }

        // Python dotted path: `pkg.mod` → `pkg/mod`, tried relative to the
        // importing file's package first, then the project root.
        if !specifier.contains('/') && specifier.contains('.') {
            let slashed = specifier.replace('.', "/");
            return vec![joined(&slashed), slashed];
        }

        // Bare name or project-root path: root first, then sibling.
        vec![specifier.to_string(), joined(specifier)]
    }

    fn lookup(&self, candidate: &str) -> Option<FilePath> {
        let exact = FilePath::new(candidate);
        if self.files.contains(&exact) {
            return Some(exact);
        }
        if let Some(file) = self.stems.get(strip_extension(candidate)) {
            return Some(file.clone());
        }
        self.dir_entries
            .get(candidate)
            .map(|(file, _)| file.clone())
    }
}
