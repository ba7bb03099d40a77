//! Test utilities for eslintrc-gen integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Create an empty catalog directory with `sources/` and `profiles/`
pub fn catalog_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("sources")).unwrap();
    fs::create_dir_all(dir.path().join("profiles")).unwrap();
    dir
}

/// Write `sources/<file>` in a catalog directory
pub fn write_source(catalog: &Path, file: &str, content: &str) {
    fs::write(catalog.join("sources").join(file), content).unwrap();
}

/// Write `profiles/<file>` in a catalog directory
pub fn write_profile(catalog: &Path, file: &str, content: &str) {
    fs::write(catalog.join("profiles").join(file), content).unwrap();
}

/// A source that is consistent on its own
pub const HTML_SOURCE: &str = r#"
[source]
name = "html"
prefix = "html"
version = "1.0.0"
from_js = ["indent", "require-closing-tags"]
from_js_deprecated = ["no-multi-spaces"]

[rules]
"indent" = ["warn", 2]
"require-closing-tags" = "error"
"#;

/// A profile selecting the core ESLint rules plus `html`
pub const HTML_PROFILE: &str = r#"
[profile]
name = "html"
description = "Inline scripts in HTML"
sources = ["eslint", "html"]

[base]
plugins = ["html"]
root = true
"#;
