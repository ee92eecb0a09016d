use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::dependencies::{Dependency, DependencyMap};
use super::paths::{normalize_path, resolve_include};
use crate::parsers::{parse_includes, IncludeKind};

/// Where the resolver gets file contents from.
pub trait SourceLoader {
    fn load(&self, path: &Path) -> io::Result<String>;
}

/// Reads UTF-8 source text straight from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    fn load(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of one include walk.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub dependencies: DependencyMap,
    pub failures: Vec<ReadFailure>,
    pub files_read: usize,
}

/// Follows quoted `#include` directives depth-first from one or more start
/// files.
///
/// Each path is loaded at most once per walk, which is all it takes to stop
/// on cycles and to share work on diamonds. A file that cannot be loaded is
/// reported and skipped; the walk carries on with everything else.
#[derive(Debug, Clone, Default)]
pub struct IncludeResolver<L = FsLoader> {
    loader: L,
}

impl IncludeResolver<FsLoader> {
    pub fn new() -> Self {
        Self { loader: FsLoader }
    }
}

impl<L: SourceLoader> IncludeResolver<L> {
    pub fn with_loader(loader: L) -> Self {
        Self { loader }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn resolve(&self, start: &Path) -> Resolution {
        self.resolve_all(std::slice::from_ref(&start.to_path_buf()))
    }

    /// Walk from every root in turn, sharing one visited set and one map.
    pub fn resolve_all(&self, roots: &[PathBuf]) -> Resolution {
        let mut visited: HashSet<PathBuf> = HashSet::new();
        let mut resolution = Resolution::default();

        for root in roots {
            let mut stack = vec![normalize_path(root)];

            while let Some(path) = stack.pop() {
                if !visited.insert(path.clone()) {
                    continue;
                }

                let source = match self.loader.load(&path) {
                    Ok(source) => source,
                    Err(err) => {
                        warn!(path = %path.display(), error = %err, "failed to read file");
                        resolution.failures.push(ReadFailure {
                            path,
                            reason: err.to_string(),
                        });
                        continue;
                    }
                };
                resolution.files_read += 1;

                let mut dependencies = BTreeSet::new();
                let mut children = Vec::new();
                for directive in parse_includes(&source) {
                    match directive.kind {
                        IncludeKind::Local => {
                            let target = resolve_include(&path, &directive.target);
                            dependencies.insert(Dependency::local(target.clone()));
                            children.push(target);
                        }
                        IncludeKind::System => {
                            dependencies.insert(Dependency::system(directive.target));
                        }
                    }
                }

                debug!(
                    path = %path.display(),
                    includes = dependencies.len(),
                    "resolved includes"
                );
                resolution.dependencies.insert(path, dependencies);

                // Reversed so the first include in the file is walked first.
                stack.extend(children.into_iter().rev());
            }
        }

        resolution
    }
}
