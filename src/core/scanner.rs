use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::AnalyzeError;

/// Extensions treated as C or C++ sources and headers.
pub const SOURCE_EXTENSIONS: &[&str] = &[
    "c", "cc", "cpp", "cxx", "c++", "h", "hh", "hpp", "hxx", "h++", "ipp", "inl", "tpp",
];

pub struct FileScanner;

impl FileScanner {
    pub fn new() -> Self {
        Self
    }

    /// Every C/C++ file below `root_path`, sorted by path.
    pub fn scan_directory(&self, root_path: &Path) -> Result<Vec<PathBuf>, AnalyzeError> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(root_path).follow_links(false) {
            let entry = entry.map_err(|source| AnalyzeError::Scan {
                root: root_path.to_path_buf(),
                source,
            })?;
            if entry.file_type().is_file() {
                entries.push(entry.into_path());
            }
        }

        let mut files: Vec<PathBuf> = entries
            .into_par_iter()
            .filter(|path| is_source_file(path))
            .collect();
        files.sort();

        Ok(files)
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}
