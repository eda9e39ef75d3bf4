//! Static complexity metrics for supported script languages.
//!
//! Cyclomatic complexity is approximated by counting decision-point
//! keywords (`if`, loops, boolean operators, …) line by line and
//! attributing them to the most recently opened function. Lines are
//! scanned textually; strings containing keywords are over-counted.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::script::ScriptKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StaticMetrics {
    /// Sum of per-function cyclomatic complexity.
    pub total_complexity: u64,

    /// Complexity of the most complex single function.
    pub max_function_complexity: u64,

    pub function_count: u64,

    /// Lines that are neither blank nor comment-only.
    pub effective_lines: u64,
}

/// Read and analyze one source file.
pub fn analyze_source(path: &Path, kind: ScriptKind) -> Result<StaticMetrics> {
    let bytes = fs::read(path).map_err(|err| Error::Analysis {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    let source = String::from_utf8_lossy(&bytes);
    Ok(metrics_from_source(&source, kind))
}

/// Pure per-source reduction, separated from I/O for testability.
#[must_use]
pub fn metrics_from_source(source: &str, kind: ScriptKind) -> StaticMetrics {
    let mut effective_lines = 0u64;
    let mut functions: Vec<u64> = Vec::new();
    let mut in_block_comment = false;

    for raw in source.lines() {
        let line = raw.trim();

        if kind == ScriptKind::Node {
            if in_block_comment {
                if line.contains("*/") {
                    in_block_comment = false;
                }
                continue;
            }
            if line.starts_with("/*") {
                in_block_comment = !line.contains("*/");
                continue;
            }
        }

        if line.is_empty() || is_comment(line, kind) {
            continue;
        }
        effective_lines += 1;

        if is_function_def(line, kind) {
            // Base complexity of a straight-line function is 1.
            functions.push(1);
        }

        let decisions = decision_points(line, kind);
        if let Some(current) = functions.last_mut() {
            *current += decisions;
        }
    }

    StaticMetrics {
        total_complexity: functions.iter().sum(),
        max_function_complexity: functions.iter().copied().max().unwrap_or(0),
        function_count: functions.len() as u64,
        effective_lines,
    }
}

fn is_comment(line: &str, kind: ScriptKind) -> bool {
    match kind {
        ScriptKind::Python | ScriptKind::Shell => line.starts_with('#'),
        ScriptKind::Node => line.starts_with("//"),
    }
}

fn is_function_def(line: &str, kind: ScriptKind) -> bool {
    match kind {
        ScriptKind::Python => line.starts_with("def ") || line.starts_with("async def "),
        ScriptKind::Node => {
            line.starts_with("function ")
                || line.contains(" function ")
                || line.contains("function(")
                || line.contains("=>")
        }
        ScriptKind::Shell => line.starts_with("function ") || is_shell_function_header(line),
    }
}

/// `name() {` and `name ()` headers, the POSIX function form.
fn is_shell_function_header(line: &str) -> bool {
    let Some(paren) = line.find("()") else {
        return false;
    };
    let name = line[..paren].trim_end();
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !name.chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn decision_points(line: &str, kind: ScriptKind) -> u64 {
    let keywords: &[&str] = match kind {
        ScriptKind::Python => &["if", "elif", "for", "while", "except", "and", "or"],
        ScriptKind::Node => &["if", "for", "while", "case", "catch"],
        ScriptKind::Shell => &["if", "elif", "for", "while", "until", "case"],
    };

    let mut count = line
        .split(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .filter(|word| keywords.contains(word))
        .count() as u64;

    if matches!(kind, ScriptKind::Node | ScriptKind::Shell) {
        count += line.matches("&&").count() as u64;
        count += line.matches("||").count() as u64;
    }
    if kind == ScriptKind::Node {
        count += ternary_marks(line);
    }

    count
}

/// Conditional `?` marks, skipping `?.` (optional chaining) and `??`
/// (nullish coalescing).
fn ternary_marks(line: &str) -> u64 {
    let bytes = line.as_bytes();
    let mut count = 0u64;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'?' {
            match bytes.get(i + 1) {
                Some(b'.') | Some(b'?') => {
                    i += 2;
                    continue;
                }
                _ => count += 1,
            }
        }
        i += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_functions_and_branches() {
        let source = "\
#!/usr/bin/env python3
# partition-based sort

def quick_sort(xs):
    if len(xs) <= 1:
        return xs
    pivot = xs[0]
    rest = xs[1:]
    return quick_sort([x for x in rest if x < pivot]) + [pivot]

def main():
    print(quick_sort([3, 1, 2]))
";
        let metrics = metrics_from_source(source, ScriptKind::Python);
        assert_eq!(metrics.function_count, 2);
        // quick_sort: 1 + if + for + if(comprehension filter) = 4
        assert_eq!(metrics.max_function_complexity, 4);
        assert_eq!(metrics.total_complexity, 5);
        assert_eq!(metrics.effective_lines, 8);
    }

    #[test]
    fn javascript_block_comments_and_operators() {
        let source = "\
/* merge sort
 * demo file
 */
function merge(a, b) {
  const out = [];
  while (a.length && b.length) {
    out.push(a[0] < b[0] ? a.shift() : b.shift());
  }
  return out.concat(a).concat(b);
}

// entry
const run = () => merge([1, 3], [2, 4]);
";
        let metrics = metrics_from_source(source, ScriptKind::Node);
        assert_eq!(metrics.function_count, 2);
        // merge: 1 + while + && + ternary = 4; arrow: 1
        assert_eq!(metrics.max_function_complexity, 4);
        assert_eq!(metrics.total_complexity, 5);
        assert_eq!(metrics.effective_lines, 7);
    }

    #[test]
    fn ternary_counts_exclude_chaining_and_coalescing() {
        assert_eq!(ternary_marks("a ? b : c"), 1);
        assert_eq!(ternary_marks("x ? y : z ? w : v"), 2);
        assert_eq!(ternary_marks("obj?.field"), 0);
        assert_eq!(ternary_marks("a ?? fallback"), 0);
        assert_eq!(ternary_marks("obj?.field ?? alt ? yes : no"), 1);
    }

    #[test]
    fn shell_function_headers() {
        let source = "\
#!/bin/bash

greet() {
    if [ -n \"$1\" ]; then
        echo \"hello $1\"
    fi
}

greet world
";
        let metrics = metrics_from_source(source, ScriptKind::Shell);
        assert_eq!(metrics.function_count, 1);
        assert_eq!(metrics.total_complexity, 2);
        assert_eq!(metrics.max_function_complexity, 2);
        assert_eq!(metrics.effective_lines, 6);
    }

    #[test]
    fn file_with_no_functions_has_zero_complexity() {
        let source = "x = 1\ny = 2\nprint(x + y)\n";
        let metrics = metrics_from_source(source, ScriptKind::Python);
        assert_eq!(metrics.function_count, 0);
        assert_eq!(metrics.total_complexity, 0);
        assert_eq!(metrics.max_function_complexity, 0);
        assert_eq!(metrics.effective_lines, 3);
    }

    #[test]
    fn empty_source_is_all_zero() {
        assert_eq!(
            metrics_from_source("", ScriptKind::Shell),
            StaticMetrics::default()
        );
    }

    #[test]
    fn unreadable_file_is_a_per_file_analysis_error() {
        let result = analyze_source(Path::new("/no/such/file.py"), ScriptKind::Python);
        assert!(matches!(result, Err(Error::Analysis { .. })));
    }
}
