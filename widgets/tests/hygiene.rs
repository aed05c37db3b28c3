//! Hygiene: source-level budgets for patterns that panic or swallow errors.
//!
//! Scans the widget state machines under `src/`, skipping `*_test.rs` files.
//! Every budget is zero.

use std::fs;
use std::path::Path;

const SOURCE_ROOT: &str = "src";

/// `(pattern, budget, why it is banned)`
const BUDGETS: [(&str, usize, &str); 9] = [
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "unwinds out of a state transition"),
    ("unreachable!(", 0, "unwinds out of a state transition"),
    ("todo!(", 0, "unfinished code path"),
    ("unimplemented!(", 0, "unfinished code path"),
    ("let _ =", 0, "discards a Result without looking at it"),
    (".ok()", 0, "turns an error into a silent None"),
    ("#[allow(dead_code)]", 0, "hides unused code instead of deleting it"),
];

fn production_sources() -> Vec<(String, String)> {
    let mut files = Vec::new();
    walk(Path::new(SOURCE_ROOT), &mut files);
    files
}

fn walk(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn sources_were_found() {
    let files = production_sources();
    assert!(files.iter().any(|(name, _)| name.ends_with("carousel.rs")), "hygiene scan found no sources");
}

#[test]
fn pattern_budgets() {
    let files = production_sources();
    let mut report = Vec::new();
    for (pattern, budget, why) in BUDGETS {
        let hits: Vec<(String, usize)> = files
            .iter()
            .map(|(name, content)| (name.clone(), content.lines().filter(|l| l.contains(pattern)).count()))
            .filter(|(_, count)| *count > 0)
            .collect();
        let total: usize = hits.iter().map(|(_, count)| count).sum();
        if total > budget {
            report.push(format!("`{pattern}` ({why}): found {total}, max {budget}"));
            report.extend(hits.iter().map(|(name, count)| format!("  {name}: {count}")));
        }
    }
    assert!(report.is_empty(), "hygiene budgets exceeded:\n{}", report.join("\n"));
}
