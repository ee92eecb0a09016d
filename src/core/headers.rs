use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Basenames of the C++ standard library headers.
///
/// Dependency targets whose basename appears here are displayed by that bare
/// name, so every resolved spelling of e.g. `vector` collapses into one node.
pub static STANDARD_HEADERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "algorithm",
        "any",
        "array",
        "atomic",
        "bitset",
        "cassert",
        "ccomplex",
        "cctype",
        "cerrno",
        "cfenv",
        "cfloat",
        "charconv",
        "chrono",
        "cinttypes",
        "ciso646",
        "climits",
        "clocale",
        "cmath",
        "codecvt",
        "complex",
        "condition_variable",
        "csetjmp",
        "csignal",
        "cstdalign",
        "cstdarg",
        "cstdbool",
        "cstddef",
        "cstdint",
        "cstdio",
        "cstdlib",
        "cstring",
        "ctgmath",
        "ctime",
        "cuchar",
        "cwchar",
        "cwctype",
        "deque",
        "exception",
        "filesystem",
        "forward_list",
        "fstream",
        "functional",
        "future",
        "initializer_list",
        "iomanip",
        "ios",
        "iosfwd",
        "iostream",
        "istream",
        "iterator",
        "limits",
        "list",
        "locale",
        "map",
        "memory_resource",
        "memory",
        "mutex",
        "new",
        "numeric",
        "optional",
        "ostream",
        "queue",
        "random",
        "ratio",
        "regex",
        "scoped_allocator",
        "set",
        "shared_mutex",
        "sstream",
        "stack",
        "stdexcept",
        "streambuf",
        "string_view",
        "string",
        "system_error",
        "thread",
        "tuple",
        "type_traits",
        "typeindex",
        "typeinfo",
        "unordered_map",
        "unordered_set",
        "utility",
        "valarray",
        "variant",
        "vector",
    ]
    .into_iter()
    .collect()
});

pub fn is_standard_header(name: &str) -> bool {
    STANDARD_HEADERS.contains(name)
}
