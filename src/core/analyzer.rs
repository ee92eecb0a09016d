use std::path::{Path, PathBuf};

use tracing::info;

use super::graph::{dangling_nodes, GraphBuilder, IncludeGraph};
use super::paths::{normalize_path, PathDisplay};
use super::resolver::{FsLoader, IncludeResolver, Resolution, SourceLoader};
use super::scanner::FileScanner;
use crate::error::AnalyzeError;

/// Result of analyzing one input, ready for any formatter.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub roots: Vec<PathBuf>,
    pub resolution: Resolution,
    /// Prefix replaced by `.` in rendered labels.
    pub base_dir: PathBuf,
}

impl Analysis {
    pub fn display(&self) -> PathDisplay {
        PathDisplay::new(&self.base_dir)
    }

    pub fn graph(&self) -> IncludeGraph {
        GraphBuilder::from_dependencies(&self.resolution.dependencies, &self.display()).build()
    }
}

pub struct IncludeAnalyzer<L = FsLoader> {
    file_scanner: FileScanner,
    resolver: IncludeResolver<L>,
}

impl IncludeAnalyzer<FsLoader> {
    pub fn new() -> Self {
        Self::with_resolver(IncludeResolver::new())
    }
}

impl Default for IncludeAnalyzer<FsLoader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: SourceLoader> IncludeAnalyzer<L> {
    pub fn with_resolver(resolver: IncludeResolver<L>) -> Self {
        Self {
            file_scanner: FileScanner::new(),
            resolver,
        }
    }

    /// Analyze a single source file, or every C/C++ file below a directory.
    pub fn analyze(&self, input: &Path) -> Result<Analysis, AnalyzeError> {
        if !input.exists() {
            return Err(AnalyzeError::InputNotFound(input.to_path_buf()));
        }

        let input = normalize_path(input);
        let (roots, base_dir) = if input.is_dir() {
            let roots = self.file_scanner.scan_directory(&input)?;
            info!(root = %input.display(), files = roots.len(), "scanned directory");
            (roots, input)
        } else {
            let base_dir = input
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| input.clone());
            (vec![input], base_dir)
        };

        let resolution = self.resolver.resolve_all(&roots);
        let analysis = Analysis {
            roots,
            resolution,
            base_dir,
        };

        let graph = analysis.graph();
        info!(
            files = analysis.resolution.dependencies.len(),
            edges = analysis.resolution.dependencies.edge_count(),
            failures = analysis.resolution.failures.len(),
            dangling = dangling_nodes(&graph).len(),
            "include analysis complete"
        );

        Ok(analysis)
    }
}
