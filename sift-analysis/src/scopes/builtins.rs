//! Per-language builtin name tables.
//!
//! Lookup falls through to these after the scope chain is exhausted, so an
//! unresolved `print` in Python classifies as a builtin, not a mystery.
//! Tables cover the names rules actually collide with; they are not
//! exhaustive standard libraries.

use crate::scanner::Language;

pub fn builtins(language: Language) -> &'static [&'static str] {
    match language {
        Language::Python => PYTHON_BUILTINS,
        Language::TypeScript | Language::JavaScript => JS_BUILTINS,
        Language::Rust => RUST_BUILTINS,
        Language::Go => GO_BUILTINS,
        Language::Java => JAVA_BUILTINS,
    }
}

/// Builtin entry matching `name`, if any.
pub fn lookup_builtin(language: Language, name: &str) -> Option<&'static str> {
    builtins(language).iter().copied().find(|&b| b == name)
}

static PYTHON_BUILTINS: &[&str] = &[
    "abs", "all", "any", "bool", "bytes", "callable", "chr", "dict", "dir", "enumerate",
    "filter", "float", "format", "frozenset", "getattr", "hasattr", "hash", "id", "input",
    "int", "isinstance", "issubclass", "iter", "len", "list", "map", "max", "min", "next",
    "object", "open", "ord", "print", "range", "repr", "reversed", "round", "set", "setattr",
    "sorted", "str", "sum", "super", "tuple", "type", "vars", "zip",
    "Exception", "ValueError", "TypeError", "KeyError", "IndexError", "RuntimeError",
];

static JS_BUILTINS: &[&str] = &[
    "Array", "Boolean", "Date", "Error", "Infinity", "JSON", "Map", "Math", "NaN", "Number",
    "Object", "Promise", "Proxy", "RangeError", "Reflect", "RegExp", "Set", "String", "Symbol",
    "TypeError", "WeakMap", "WeakSet", "clearInterval", "clearTimeout", "console", "decodeURI",
    "encodeURI", "fetch", "globalThis", "isFinite", "isNaN", "parseFloat", "parseInt",
    "process", "queueMicrotask", "require", "setInterval", "setTimeout", "structuredClone",
    "undefined",
];

static RUST_BUILTINS: &[&str] = &[
    "Box", "Clone", "Copy", "Default", "Drop", "Err", "Iterator", "None", "Ok", "Option",
    "Result", "Send", "Some", "String", "Sync", "Vec", "drop",
];

static GO_BUILTINS: &[&str] = &[
    "append", "bool", "byte", "cap", "close", "complex", "copy", "delete", "error", "false",
    "float32", "float64", "imag", "int", "int32", "int64", "iota", "len", "make", "new", "nil",
    "panic", "print", "println", "real", "recover", "rune", "string", "true", "uint",
];

static JAVA_BUILTINS: &[&str] = &[
    "Boolean", "Character", "Class", "Double", "Exception", "Float", "Integer", "Long", "Math",
    "Object", "Runnable", "RuntimeException", "String", "StringBuilder", "System", "Thread",
    "Throwable",
];
