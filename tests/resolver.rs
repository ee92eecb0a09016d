use incgraph::core::{Dependency, IncludeResolver, SourceLoader};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory sources that count how often each file is loaded.
#[derive(Default)]
struct MemoryLoader {
    files: HashMap<PathBuf, String>,
    loads: RefCell<HashMap<PathBuf, usize>>,
}

impl MemoryLoader {
    fn with(mut self, path: &str, source: &str) -> Self {
        self.files.insert(PathBuf::from(path), source.to_string());
        self
    }

    fn loads_of(&self, path: &str) -> usize {
        self.loads
            .borrow()
            .get(Path::new(path))
            .copied()
            .unwrap_or(0)
    }

    fn total_loads(&self) -> usize {
        self.loads.borrow().values().sum()
    }
}

impl SourceLoader for MemoryLoader {
    fn load(&self, path: &Path) -> io::Result<String> {
        *self.loads.borrow_mut().entry(path.to_path_buf()).or_default() += 1;
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}

fn set(paths: &[&str]) -> BTreeSet<PathBuf> {
    paths.iter().map(PathBuf::from).collect()
}

#[test]
fn cycle_with_system_include_terminates() {
    let loader = MemoryLoader::default()
        .with("/proj/a.cpp", "#include \"b.h\"\n#include <vector>\n")
        .with("/proj/b.h", "#include \"a.cpp\"\n");
    let resolver = IncludeResolver::with_loader(loader);

    let resolution = resolver.resolve(Path::new("/proj/a.cpp"));
    let deps = &resolution.dependencies;

    assert_eq!(deps.len(), 2);
    assert_eq!(deps.local_dependencies(Path::new("/proj/a.cpp")), Some(set(&["/proj/b.h"])));
    assert_eq!(deps.local_dependencies(Path::new("/proj/b.h")), Some(set(&["/proj/a.cpp"])));
    assert!(deps
        .get(Path::new("/proj/a.cpp"))
        .unwrap()
        .contains(&Dependency::system("vector")));

    assert!(!deps.contains(Path::new("vector")));
    assert!(!deps.contains(Path::new("/proj/vector")));
    assert_eq!(resolver.loader().total_loads(), 2);
    assert!(resolution.failures.is_empty());
}

#[test]
fn diamond_reads_shared_header_once() {
    let loader = MemoryLoader::default()
        .with("/p/main.cpp", "#include \"left.h\"\n#include \"right.h\"\n")
        .with("/p/left.h", "#include \"common.h\"\n")
        .with("/p/right.h", "#include \"common.h\"\n")
        .with("/p/common.h", "#include \"common.h\"\n");
    let resolver = IncludeResolver::with_loader(loader);

    let resolution = resolver.resolve(Path::new("/p/main.cpp"));

    assert_eq!(resolver.loader().loads_of("/p/common.h"), 1);
    assert_eq!(resolution.files_read, 4);
    let deps = &resolution.dependencies;
    assert_eq!(deps.local_dependencies(Path::new("/p/left.h")), Some(set(&["/p/common.h"])));
    assert_eq!(deps.local_dependencies(Path::new("/p/right.h")), Some(set(&["/p/common.h"])));
    // Self-include is recorded but not re-read.
    assert_eq!(
        deps.local_dependencies(Path::new("/p/common.h")),
        Some(set(&["/p/common.h"]))
    );
}

#[test]
fn keys_are_exactly_the_reachable_files() {
    let loader = MemoryLoader::default()
        .with("/r/start.c", "#include \"lib/x.h\"\n")
        .with("/r/lib/x.h", "#include \"../util/y.h\"\n#include \"./z.h\"\n")
        .with("/r/util/y.h", "")
        .with("/r/lib/z.h", "")
        .with("/r/unrelated.h", "#include \"start.c\"\n");
    let resolver = IncludeResolver::with_loader(loader);

    let resolution = resolver.resolve(Path::new("/r/start.c"));
    let keys: BTreeSet<PathBuf> = resolution
        .dependencies
        .files()
        .map(Path::to_path_buf)
        .collect();

    assert_eq!(
        keys,
        set(&["/r/start.c", "/r/lib/x.h", "/r/util/y.h", "/r/lib/z.h"])
    );
    assert_eq!(resolver.loader().loads_of("/r/unrelated.h"), 0);
}

#[test]
fn start_file_without_includes_gets_an_empty_entry() {
    let loader = MemoryLoader::default().with("/solo.cpp", "int main() { return 0; }\n");
    let resolution = IncludeResolver::with_loader(loader).resolve(Path::new("/solo.cpp"));

    assert_eq!(
        resolution.dependencies.get(Path::new("/solo.cpp")),
        Some(&BTreeSet::new())
    );
}

#[test]
fn missing_include_is_reported_and_left_dangling() {
    let loader = MemoryLoader::default().with("/m/main.cpp", "#include \"missing.h\"\n");
    let resolver = IncludeResolver::with_loader(loader);

    let resolution = resolver.resolve(Path::new("/m/main.cpp"));

    assert_eq!(
        resolution.dependencies.local_dependencies(Path::new("/m/main.cpp")),
        Some(set(&["/m/missing.h"]))
    );
    assert!(!resolution.dependencies.contains(Path::new("/m/missing.h")));
    assert_eq!(resolution.failures.len(), 1);
    assert_eq!(resolution.failures[0].path, PathBuf::from("/m/missing.h"));
}

#[test]
fn unreadable_start_file_yields_empty_map() {
    let resolver = IncludeResolver::with_loader(MemoryLoader::default());
    let resolution = resolver.resolve(Path::new("/nowhere/start.cpp"));

    assert!(resolution.dependencies.is_empty());
    assert_eq!(resolution.failures.len(), 1);
}

#[test]
fn resolve_all_shares_visited_files_between_roots() {
    let loader = MemoryLoader::default()
        .with("/w/a.cpp", "#include \"shared.h\"\n")
        .with("/w/b.cpp", "#include \"shared.h\"\n")
        .with("/w/shared.h", "");
    let resolver = IncludeResolver::with_loader(loader);

    let resolution =
        resolver.resolve_all(&[PathBuf::from("/w/a.cpp"), PathBuf::from("/w/b.cpp")]);

    assert_eq!(resolution.dependencies.len(), 3);
    assert_eq!(resolver.loader().loads_of("/w/shared.h"), 1);
}

#[test]
fn deep_include_chain_does_not_overflow() {
    let mut loader = MemoryLoader::default();
    let depth = 20_000;
    for i in 0..depth {
        let path = format!("/deep/f{i}.h");
        let source = format!("#include \"f{}.h\"\n", i + 1);
        loader = loader.with(&path, &source);
    }
    let resolver = IncludeResolver::with_loader(loader);

    let resolution = resolver.resolve(Path::new("/deep/f0.h"));

    assert_eq!(resolution.dependencies.len(), depth);
    // The last header points at a file that does not exist.
    assert_eq!(resolution.failures.len(), 1);
}

#[test]
fn relative_spellings_collapse_to_one_node_on_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("inc")).unwrap();
    fs::write(
        root.join("main.cpp"),
        "#include \"inc/a.h\"\n#include \"./inc/../inc/a.h\"\n",
    )
    .unwrap();
    fs::write(root.join("inc/a.h"), "#include <string>\n").unwrap();

    let resolution = IncludeResolver::new().resolve(&root.join("main.cpp"));

    assert_eq!(resolution.dependencies.len(), 2);
    assert_eq!(resolution.files_read, 2);
}

/// Collects formatted log output so tests can assert on emitted events.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn missing_include_logs_a_warning_naming_the_file() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    let loader = MemoryLoader::default().with("/m/main.cpp", "#include \"missing.h\"\n");
    let resolver = IncludeResolver::with_loader(loader);
    let resolution = tracing::subscriber::with_default(subscriber, || {
        resolver.resolve(Path::new("/m/main.cpp"))
    });

    assert_eq!(resolution.failures.len(), 1);
    let output = logs.contents();
    assert!(output.contains("WARN"), "no warning in: {output}");
    assert!(output.contains("failed to read file"), "unexpected log: {output}");
    assert!(output.contains("/m/missing.h"), "path not logged: {output}");
    assert!(!output.contains("/m/main.cpp"), "readable file reported: {output}");
}
