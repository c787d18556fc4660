//! Routing annotation recognition: block collection, HTTP method
//! classification and path literal extraction.

use crate::model::{AnnotationOccurrence, MappingType, UNSPECIFIED_METHOD};
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_MAPPING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@(Get|Post|Put|Delete|Patch|Request)Mapping\b").unwrap());

static RE_REQUEST_METHOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"RequestMethod\.([A-Z]+)").unwrap());

static RE_QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]*)""#).unwrap());

// -- Recognition --------------------------------------------------------------

/// Return the mapping type if the trimmed line opens a routing annotation.
pub fn mapping_type(line: &str) -> Option<MappingType> {
    RE_MAPPING
        .captures(line.trim())
        .and_then(|caps| MappingType::from_prefix(&caps[1]))
}

/// Whether a line starts a routing annotation of any kind.
pub fn is_routing(line: &str) -> bool {
    mapping_type(line).is_some()
}

// -- Block collection ---------------------------------------------------------

/// Collect the annotation starting at `start`, following its argument list
/// across lines until the parentheses balance.
///
/// Returns `None` if `start` is out of range or the line is not a routing
/// annotation. On an unbalanced list the block runs to the last line and is
/// marked as such.
pub fn collect(lines: &[&str], start: usize) -> Option<AnnotationOccurrence> {
    let mapping = mapping_type(lines.get(start)?)?;
    let (text, end_line, balanced) = collect_block(lines, start);
    Some(AnnotationOccurrence {
        mapping,
        text,
        start_line: start,
        end_line,
        balanced,
    })
}

/// Paren-balanced line accumulation, independent of annotation kind.
///
/// Returns `(joined_text, last_line_index, balanced)`.
pub fn collect_block(lines: &[&str], start: usize) -> (String, usize, bool) {
    let mut collected = Vec::new();
    let mut depth: i64 = 0;
    let mut index = start;

    while index < lines.len() {
        let text = lines[index].trim();
        collected.push(text);
        depth += text.matches('(').count() as i64 - text.matches(')').count() as i64;
        if depth <= 0 {
            return (collected.join(" "), index, true);
        }
        index += 1;
    }

    (collected.join(" "), lines.len().saturating_sub(1), false)
}

// -- Classification -----------------------------------------------------------

/// HTTP methods an annotation applies to, in source order.
///
/// Shorthand forms yield their single verb. The generic form yields each
/// `RequestMethod.X` reference (duplicates kept), or the unspecified sentinel
/// when there are none.
pub fn http_methods(mapping: MappingType, text: &str) -> Vec<String> {
    if let Some(method) = mapping.shorthand_method() {
        return vec![method.to_string()];
    }

    let methods: Vec<String> = RE_REQUEST_METHOD
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect();

    if methods.is_empty() {
        vec![UNSPECIFIED_METHOD.to_string()]
    } else {
        methods
    }
}

// -- Path extraction ----------------------------------------------------------

/// Every quoted literal inside the annotation's argument list.
///
/// Zero literals yield a single empty path, meaning "the base path itself".
pub fn paths(text: &str) -> Vec<String> {
    let found = literals(text);
    if found.is_empty() {
        vec![String::new()]
    } else {
        found
    }
}

/// Quoted literals inside the argument list, with no default.
pub fn literals(text: &str) -> Vec<String> {
    RE_QUOTED
        .captures_iter(arguments(text))
        .map(|caps| caps[1].to_string())
        .collect()
}

/// The text between the first `(` and the last `)`, or everything after the
/// first `(` when the list never closes.
fn arguments(text: &str) -> &str {
    let Some(open) = text.find('(') else {
        return "";
    };
    let rest = &text[open + 1..];
    match rest.rfind(')') {
        Some(close) => &rest[..close],
        None => rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_all_mapping_forms() {
        assert_eq!(mapping_type("@GetMapping(\"/a\")"), Some(MappingType::Get));
        assert_eq!(mapping_type("  @PostMapping"), Some(MappingType::Post));
        assert_eq!(mapping_type("@PutMapping(\"/a\")"), Some(MappingType::Put));
        assert_eq!(mapping_type("@DeleteMapping(\"/a\")"), Some(MappingType::Delete));
        assert_eq!(mapping_type("@PatchMapping(\"/a\")"), Some(MappingType::Patch));
        assert_eq!(mapping_type("\t@RequestMapping(\"/a\")"), Some(MappingType::Generic));
    }

    #[test]
    fn ignores_non_routing_lines() {
        assert_eq!(mapping_type("@PathVariable"), None);
        assert_eq!(mapping_type("@GetMappingExtra"), None);
        assert_eq!(mapping_type("// @GetMapping(\"/a\")"), None);
        assert_eq!(mapping_type("public void get() {"), None);
    }

    #[test]
    fn collect_single_line() {
        let lines = ["@GetMapping(\"/users\")", "public List<User> list() {"];
        let occ = collect(&lines, 0).unwrap();
        assert_eq!(occ.mapping, MappingType::Get);
        assert_eq!(occ.text, "@GetMapping(\"/users\")");
        assert_eq!(occ.start_line, 0);
        assert_eq!(occ.end_line, 0);
        assert!(occ.balanced);
    }

    #[test]
    fn collect_without_arguments_consumes_one_line() {
        let lines = ["    @PostMapping", "    public void create() {"];
        let occ = collect(&lines, 0).unwrap();
        assert_eq!(occ.text, "@PostMapping");
        assert_eq!(occ.end_line, 0);
        assert!(occ.balanced);
    }

    #[test]
    fn collect_spans_wrapped_arguments() {
        let lines = [
            "    @RequestMapping(",
            "        value = {\"/a\", \"/b\"},",
            "        method = {RequestMethod.GET, RequestMethod.POST})",
            "    public String both() {",
        ];
        let occ = collect(&lines, 0).unwrap();
        assert_eq!(occ.end_line, 2);
        assert_eq!(
            occ.text,
            "@RequestMapping( value = {\"/a\", \"/b\"}, method = {RequestMethod.GET, RequestMethod.POST})"
        );
    }

    #[test]
    fn collect_unbalanced_runs_to_eof() {
        let lines = ["@GetMapping(", "  \"/broken\"", "public void x() {"];
        let occ = collect(&lines, 0).unwrap();
        assert_eq!(occ.end_line, 2);
        assert!(!occ.balanced);
    }

    #[test]
    fn collect_rejects_non_annotation() {
        let lines = ["public class Foo {"];
        assert!(collect(&lines, 0).is_none());
        assert!(collect(&lines, 5).is_none());
    }

    #[test]
    fn shorthand_methods() {
        assert_eq!(http_methods(MappingType::Get, ""), vec!["GET"]);
        assert_eq!(http_methods(MappingType::Delete, "RequestMethod.POST"), vec!["DELETE"]);
    }

    #[test]
    fn generic_methods_keep_source_order() {
        let text = "@RequestMapping(method = {RequestMethod.POST, RequestMethod.GET, RequestMethod.POST})";
        assert_eq!(http_methods(MappingType::Generic, text), vec!["POST", "GET", "POST"]);
    }

    #[test]
    fn generic_without_method_is_unspecified() {
        assert_eq!(
            http_methods(MappingType::Generic, "@RequestMapping(\"/x\")"),
            vec![UNSPECIFIED_METHOD]
        );
    }

    #[test]
    fn extracts_all_literals() {
        let text = "@GetMapping(value = {\"/a\", \"b/\"})";
        assert_eq!(paths(text), vec!["/a", "b/"]);
    }

    #[test]
    fn no_literal_means_empty_path() {
        assert_eq!(paths("@GetMapping"), vec![""]);
        assert_eq!(paths("@GetMapping()"), vec![""]);
        assert_eq!(paths("@RequestMapping(method = RequestMethod.GET)"), vec![""]);
    }

    #[test]
    fn literals_outside_parentheses_are_ignored() {
        let text = "@GetMapping(\"/in\") // \"/out\"";
        assert_eq!(paths(text), vec!["/in"]);
    }

    #[test]
    fn unclosed_argument_list_still_yields_literals() {
        assert_eq!(paths("@GetMapping( \"/partial\""), vec!["/partial"]);
    }
}
