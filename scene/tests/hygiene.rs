//! Hygiene: source-level checks on the scene crate.
//!
//! The engine runs inside the browser where a panic takes the whole view down,
//! so non-test sources under `src/` are scanned for panicking calls, silently
//! discarded errors, and stray console output. Every pattern has a budget.
//! Budgets only ever go down.

use std::fs;
use std::path::{Path, PathBuf};

struct Rule {
    pattern: &'static str,
    budget: usize,
    hint: &'static str,
}

const RULES: &[Rule] = &[
    Rule { pattern: ".unwrap()", budget: 0, hint: "propagate with `?` or fall back with `unwrap_or`" },
    Rule { pattern: ".expect(", budget: 0, hint: "propagate with `?`" },
    Rule { pattern: "panic!(", budget: 0, hint: "return an error" },
    Rule { pattern: "unreachable!(", budget: 0, hint: "make the match exhaustive" },
    Rule { pattern: "todo!(", budget: 0, hint: "finish the stub" },
    Rule { pattern: "unimplemented!(", budget: 0, hint: "finish the stub" },
    Rule { pattern: "let _ =", budget: 0, hint: "log or propagate the error" },
    Rule { pattern: ".ok()", budget: 0, hint: "match on the error and log it" },
    Rule { pattern: "#[allow(dead_code)]", budget: 0, hint: "delete the dead code" },
    Rule { pattern: "println!(", budget: 0, hint: "use the `log` macros" },
    Rule { pattern: "eprintln!(", budget: 0, hint: "use the `log` macros" },
    Rule { pattern: "dbg!(", budget: 0, hint: "remove debugging output" },
];

/// Production `.rs` files under `src/`; `*_test.rs` files are excluded.
fn source_files() -> Vec<(PathBuf, String)> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files.sort_by(|a, b| a.0.cmp(&b.0));
    files
}

fn collect(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.file_name().is_some_and(|n| n.to_string_lossy().ends_with("_test.rs"));
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

/// `(path:line, text)` for every line containing `pattern`, skipping `//` comments.
fn offenders(files: &[(PathBuf, String)], pattern: &str) -> Vec<String> {
    files
        .iter()
        .flat_map(|(path, content)| {
            content.lines().enumerate().filter_map(move |(i, line)| {
                let code = line.trim_start();
                (!code.starts_with("//") && code.contains(pattern))
                    .then(|| format!("  {}:{}: {}", path.display(), i + 1, code))
            })
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|(p, _)| p.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut report = Vec::new();
    for rule in RULES {
        let hits = offenders(&files, rule.pattern);
        if hits.len() > rule.budget {
            report.push(format!(
                "`{}`: found {}, budget {} ({})\n{}",
                rule.pattern,
                hits.len(),
                rule.budget,
                rule.hint,
                hits.join("\n")
            ));
        }
    }
    assert!(report.is_empty(), "hygiene budgets exceeded:\n{}", report.join("\n"));
}
