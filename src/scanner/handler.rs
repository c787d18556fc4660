//! Handler name lookahead.
//!
//! There is no symbol table here: the handler is whatever public member is
//! declared next, as long as nothing route-shaped or class-shaped comes first.
//! Unusual layouts (package-private handlers, annotations and declarations on
//! one line) therefore produce an empty name.

use super::annotation;
use super::declares_class;
use regex::Regex;
use std::sync::LazyLock;

static RE_CALLABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z0-9_]+)\s*\(").unwrap());

/// Find the name of the member decorated by the annotation ending just before
/// `start`. Returns an empty string when none is visible.
pub fn recover(lines: &[&str], start: usize) -> String {
    for line in lines.iter().skip(start) {
        let stripped = line.trim();

        if stripped.is_empty() {
            continue;
        }
        if stripped.starts_with('@') {
            if annotation::is_routing(stripped) {
                break;
            }
            continue;
        }
        if declares_class(stripped) {
            break;
        }
        if stripped.starts_with("public ") {
            return RE_CALLABLE
                .captures(stripped)
                .map(|caps| caps[1].to_string())
                .unwrap_or_default();
        }
    }

    String::new()
}
