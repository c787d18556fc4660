//! Controller scanner, a forward-only pass over raw source lines.
//!
//! No grammar is built. A class declaration anchors the file, routing
//! annotations above it supply base paths, and every routing annotation
//! below it becomes one or more routes.

pub mod annotation;
pub mod handler;

use crate::model::{ClassRoutes, MappingType, Route, ScanWarning};
use crate::path;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static RE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bclass\s+([A-Za-z_$][A-Za-z0-9_$]*)").unwrap());

/// Name of the class declared on this line, if any. Comment lines never
/// declare a class.
pub fn class_name(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
        return None;
    }
    RE_CLASS
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn declares_class(line: &str) -> bool {
    class_name(line).is_some()
}

/// Locate the primary class: the first line declaring one.
fn find_class(lines: &[&str]) -> Option<(String, usize)> {
    lines
        .iter()
        .enumerate()
        .find_map(|(idx, line)| class_name(line).map(|name| (name.to_string(), idx)))
}

/// Base paths from every `@RequestMapping` before the class declaration.
///
/// Deduplicated and sorted; a single empty path when there are none.
fn base_paths(lines: &[&str], class_line: usize, warnings: &mut Vec<ScanWarning>) -> Vec<String> {
    let mut found = BTreeSet::new();
    let mut index = 0;

    while index < class_line {
        let Some(occ) = annotation::collect(lines, index) else {
            index += 1;
            continue;
        };
        if !occ.balanced {
            warnings.push(unbalanced(occ.start_line));
        }
        if occ.mapping == MappingType::Generic {
            found.extend(annotation::literals(&occ.text));
        }
        index = occ.end_line + 1;
    }

    if found.is_empty() {
        vec![String::new()]
    } else {
        found.into_iter().collect()
    }
}

fn unbalanced(line: usize) -> ScanWarning {
    ScanWarning {
        line,
        message: "routing annotation has unbalanced parentheses; using text up to end of file"
            .to_string(),
    }
}

/// Scan one source unit. Returns `None` when no class declaration is found.
pub fn scan(source: &str) -> Option<ClassRoutes> {
    let lines: Vec<&str> = source.lines().collect();
    let (name, class_line) = find_class(&lines)?;

    let mut warnings = Vec::new();
    let base_paths = base_paths(&lines, class_line, &mut warnings);

    let mut routes = BTreeSet::new();
    let mut index = 0;

    while index < lines.len() {
        let Some(occ) = annotation::collect(&lines, index) else {
            index += 1;
            continue;
        };
        let next = occ.end_line + 1;

        // Anything above the class line is class-level, shorthand included
        if occ.start_line < class_line {
            index = next;
            continue;
        }

        if !occ.balanced {
            warnings.push(unbalanced(occ.start_line));
        }

        let methods = annotation::http_methods(occ.mapping, &occ.text);
        let method_paths = annotation::paths(&occ.text);
        let handler = handler::recover(&lines, next);

        for base in &base_paths {
            for fragment in &method_paths {
                let full = path::join(base, fragment);
                for method in &methods {
                    routes.insert(Route::new(method.as_str(), full.as_str(), handler.as_str()));
                }
            }
        }

        index = next;
    }

    Some(ClassRoutes {
        name,
        file: None,
        base_paths,
        routes: routes.into_iter().collect(),
        warnings,
    })
}
