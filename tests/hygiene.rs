//! Hygiene — enforces coding standards at test time
//!
//! Scans the crate's production sources for constructs that violate project
//! standards. Every pattern has a budget of zero: panicking escape hatches
//! and silent error discards have no place in a widget that runs inside the
//! host page's event loop.

use std::fs;
use std::path::Path;

/// A banned source pattern and why it is banned.
struct Budget {
    pattern: &'static str,
    reason: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics crash the whole wasm instance.
    Budget { pattern: ".unwrap()", reason: "panics abort the widget" },
    Budget { pattern: ".expect(", reason: "panics abort the widget" },
    Budget { pattern: "panic!(", reason: "panics abort the widget" },
    Budget { pattern: "unreachable!(", reason: "panics abort the widget" },
    Budget { pattern: "todo!(", reason: "stubs must not ship" },
    Budget { pattern: "unimplemented!(", reason: "stubs must not ship" },
    // Silent loss discards errors without inspecting them.
    Budget { pattern: "let _ =", reason: "discards a result unseen" },
    Budget { pattern: ".ok()", reason: "discards an error unseen" },
    // Structure.
    Budget { pattern: "#[allow(dead_code)]", reason: "delete dead code instead" },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding sibling test files.
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
            continue;
        }
        if path.extension().is_none_or(|e| e != "rs") {
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

#[test]
fn source_budgets() {
    let files = source_files();
    assert!(!files.is_empty(), "no production sources found under src/");

    let mut violations = Vec::new();
    for budget in BUDGETS {
        for file in &files {
            for (lineno, line) in file.content.lines().enumerate() {
                if line.contains(budget.pattern) {
                    violations.push(format!(
                        "  {}:{}: `{}` ({})",
                        file.path,
                        lineno + 1,
                        budget.pattern,
                        budget.reason
                    ));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "banned constructs in production sources:\n{}",
        violations.join("\n")
    );
}
