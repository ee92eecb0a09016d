use std::path::PathBuf;

/// Errors that stop an analysis before any graph is produced.
///
/// Unreadable files met during the include walk are not errors; they are
/// logged and reported in the resolution instead.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    /// The file to analyze does not exist. This is the command-line stand-in
    /// for "no active file".
    #[error("no file to analyze: {0} does not exist")]
    InputNotFound(PathBuf),
    /// Walking an input directory failed.
    #[error("failed to scan {root}: {source}")]
    Scan {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    /// The rendered graph could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
