//! Hygiene: enforces coding standards at test time.
//!
//! These tests scan `src/` for antipatterns. Each has a budget (ideally
//! zero). If you must add one, fix an existing one first; budgets never grow.
//!
//! Besides panics and silent discards, the session slot has a single owner:
//! only `session/store.rs` may touch browser storage.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().replace('\\', "/");
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits<'a>(files: &'a [SourceFile], pattern: &str) -> Vec<(&'a str, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then_some((file.path.as_str(), count))
        })
        .collect()
}

fn assert_budget(pattern: &str, max: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let found = hits(&files, pattern);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let detail = found
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded: found {count}, max {max}.\n{detail}");
}

// =============================================================================
// PANICS
// =============================================================================

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", 0);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", 0);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", 0);
    assert_budget("unreachable!(", 0);
    assert_budget("todo!(", 0);
    assert_budget("unimplemented!(", 0);
}

// =============================================================================
// SILENT LOSS
// =============================================================================

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", 0);
    assert_budget("let _unused", 0);
    assert_budget(".ok()", 0);
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", 0);
}

#[test]
fn print_budget() {
    assert_budget("println!(", 0);
    assert_budget("eprintln!(", 0);
}

// =============================================================================
// SESSION SLOT OWNERSHIP
// =============================================================================

#[test]
fn only_the_session_store_touches_browser_storage() {
    let files = source_files();
    for pattern in ["local_storage()", "session_storage()", "TOKEN_STORAGE_KEY"] {
        let outside: Vec<_> = hits(&files, pattern)
            .into_iter()
            .filter(|(path, _)| !path.ends_with("session/store.rs"))
            .collect();
        assert!(outside.is_empty(), "`{pattern}` used outside session/store.rs: {outside:?}");
    }
}
