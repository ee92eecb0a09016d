use std::collections::{btree_map, BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::parsers::IncludeKind;

/// One edge out of a source file.
///
/// Local targets are normalized absolute paths. System targets keep the raw
/// token written between the angle brackets and are never read.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dependency {
    pub path: PathBuf,
    pub kind: IncludeKind,
}

impl Dependency {
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: IncludeKind::Local,
        }
    }

    pub fn system(name: impl Into<PathBuf>) -> Self {
        Self {
            path: name.into(),
            kind: IncludeKind::System,
        }
    }

    pub fn is_local(&self) -> bool {
        self.kind == IncludeKind::Local
    }
}

/// Every file read during one analysis, keyed by normalized path, with the
/// includes it declares. Files that failed to load have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMap {
    entries: BTreeMap<PathBuf, BTreeSet<Dependency>>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file: PathBuf, dependencies: BTreeSet<Dependency>) {
        self.entries.insert(file, dependencies);
    }

    pub fn contains(&self, file: &Path) -> bool {
        self.entries.contains_key(file)
    }

    pub fn get(&self, file: &Path) -> Option<&BTreeSet<Dependency>> {
        self.entries.get(file)
    }

    /// The files `file` pulls in through quoted includes.
    pub fn local_dependencies(&self, file: &Path) -> Option<BTreeSet<PathBuf>> {
        self.entries.get(file).map(|deps| {
            deps.iter()
                .filter(|dep| dep.is_local())
                .map(|dep| dep.path.clone())
                .collect()
        })
    }

    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.entries.keys().map(PathBuf::as_path)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, PathBuf, BTreeSet<Dependency>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }
}

impl<'a> IntoIterator for &'a DependencyMap {
    type Item = (&'a PathBuf, &'a BTreeSet<Dependency>);
    type IntoIter = btree_map::Iter<'a, PathBuf, BTreeSet<Dependency>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
