//! Hygiene: enforces coding standards at test time
//!
//! Scans the page behavior sources for antipatterns. Every budget is zero: a
//! panic in the wasm instance kills every behavior on the page, and a silently
//! discarded browser error leaves the DOM out of step with the core.
//! Browser side effects are also confined to the modules that own them.

use std::fs;
use std::path::Path;

/// `(pattern, what it is)` pairs that must not appear in production code.
const FORBIDDEN: &[(&str, &str)] = &[
    (".unwrap()", "unwrap"),
    (".expect(", "expect"),
    ("panic!(", "panic"),
    ("unreachable!(", "unreachable"),
    ("todo!(", "todo"),
    ("unimplemented!(", "unimplemented"),
    ("let _ =", "silent discard"),
    (".ok()", "error-to-option discard"),
    ("#[allow(dead_code)]", "dead code allowance"),
];

/// `(pattern, only file allowed to contain it)`.
const CONFINED: &[(&str, &str)] = &[
    ("local_storage(", "store.rs"),
    ("Interval::new(", "page.rs"),
    ("Timeout::new(", "page.rs"),
    ("add_event_listener", "page.rs"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`; `*_test.rs` files are skipped.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|line| line.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("engine.rs")), "hygiene scan found no sources");
}

#[test]
fn forbidden_patterns_budget_is_zero() {
    let files = source_files();
    let mut report = Vec::new();
    for (pattern, name) in FORBIDDEN {
        let found = hits(&files, pattern);
        if !found.is_empty() {
            report.push(format!("{name} ({pattern}):\n{}", format_hits(&found)));
        }
    }
    assert!(report.is_empty(), "hygiene budget exceeded:\n{}", report.join("\n"));
}

#[test]
fn browser_side_effects_stay_in_their_modules() {
    let files = source_files();
    let mut report = Vec::new();
    for (pattern, home) in CONFINED {
        let stray: Vec<_> = hits(&files, pattern)
            .into_iter()
            .filter(|(path, _)| !path.ends_with(home))
            .collect();
        if !stray.is_empty() {
            report.push(format!("{pattern} outside {home}:\n{}", format_hits(&stray)));
        }
    }
    assert!(report.is_empty(), "{}", report.join("\n"));
}
