pub mod analyzer;
pub mod dependencies;
pub mod graph;
pub mod headers;
pub mod paths;
pub mod resolver;
pub mod scanner;

pub use analyzer::{Analysis, IncludeAnalyzer};
pub use dependencies::{Dependency, DependencyMap};
pub use graph::{dangling_nodes, FileNode, GraphBuilder, IncludeGraph};
pub use headers::{is_standard_header, STANDARD_HEADERS};
pub use paths::{normalize_path, PathDisplay};
pub use resolver::{FsLoader, IncludeResolver, ReadFailure, Resolution, SourceLoader};
pub use scanner::FileScanner;
