use std::borrow::Cow;
use std::env;
use std::path::{Component, Path, PathBuf};

use super::headers::is_standard_header;

/// Turn `path` into an absolute path with `.` and `..` collapsed.
///
/// Purely lexical: symlinks are left alone and the file does not need to
/// exist, so includes that point at missing files still get a stable key.
pub fn normalize_path(path: &Path) -> PathBuf {
    let absolute: Cow<'_, Path> = if path.is_absolute() {
        Cow::Borrowed(path)
    } else {
        match env::current_dir() {
            Ok(cwd) => Cow::Owned(cwd.join(path)),
            Err(_) => Cow::Borrowed(path),
        }
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` above the root stays at the root
                if !matches!(
                    normalized.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                ) {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Resolve an include token relative to the directory of the including file.
pub fn resolve_include(including_file: &Path, target: &str) -> PathBuf {
    let dir = including_file.parent().unwrap_or_else(|| Path::new(""));
    normalize_path(&dir.join(target))
}

/// Replace backslashes with forward slashes.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Maps file paths to the labels shown in rendered graphs.
#[derive(Debug, Clone)]
pub struct PathDisplay {
    base: String,
}

impl PathDisplay {
    pub fn new(base_dir: &Path) -> Self {
        let mut base = to_forward_slashes(base_dir);
        while base.len() > 1 && base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Label for a node that appears on the left of an edge.
    pub fn source_label(&self, path: &Path) -> String {
        let normalized = to_forward_slashes(path);
        self.relativize(normalized)
    }

    /// Label for a dependency target. Standard headers collapse to their
    /// basename no matter where they were found.
    pub fn target_label(&self, path: &Path) -> String {
        let label = self.source_label(path);
        let basename = label.rsplit('/').next().unwrap_or(&label);
        if is_standard_header(basename) {
            basename.to_string()
        } else {
            label
        }
    }

    fn relativize(&self, path: String) -> String {
        if self.base.is_empty() {
            return path;
        }
        match path.strip_prefix(self.base.as_str()) {
            Some("") => ".".to_string(),
            Some(rest) if rest.starts_with('/') => format!(".{rest}"),
            // `/` as base: every absolute path is under it
            Some(rest) if self.base.ends_with('/') => format!("./{rest}"),
            _ => path,
        }
    }
}
