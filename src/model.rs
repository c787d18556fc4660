//! Data model for extracted routes — format-agnostic.

use serde::Serialize;
use std::path::PathBuf;

/// Method label used when a generic mapping names no explicit verb.
pub const UNSPECIFIED_METHOD: &str = "REQUEST";

/// Which routing annotation introduced an occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingType {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    /// `@RequestMapping`
    Generic,
}

impl MappingType {
    /// Map the annotation prefix (`Get` in `@GetMapping`) to a mapping type.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "Get" => Some(Self::Get),
            "Post" => Some(Self::Post),
            "Put" => Some(Self::Put),
            "Delete" => Some(Self::Delete),
            "Patch" => Some(Self::Patch),
            "Request" => Some(Self::Generic),
            _ => None,
        }
    }

    /// The fixed HTTP method implied by a shorthand annotation.
    pub fn shorthand_method(self) -> Option<&'static str> {
        match self {
            Self::Get => Some("GET"),
            Self::Post => Some("POST"),
            Self::Put => Some("PUT"),
            Self::Delete => Some("DELETE"),
            Self::Patch => Some("PATCH"),
            Self::Generic => None,
        }
    }
}

/// A routing annotation collected from source, possibly spanning lines.
#[derive(Debug, Clone)]
pub struct AnnotationOccurrence {
    pub mapping: MappingType,
    /// Trimmed lines joined with a single space
    pub text: String,
    pub start_line: usize,
    pub end_line: usize,
    /// False when end of file was reached before the parentheses closed
    pub balanced: bool,
}

/// One resolved route.
///
/// Field order defines the sort order: path, then method, then handler.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Route {
    pub path: String,
    pub method: String,
    /// Empty when no handler declaration could be associated
    pub handler: String,
}

impl Route {
    pub fn new(method: impl Into<String>, path: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
            handler: handler.into(),
        }
    }
}

/// Something odd about the source that did not stop extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    /// Zero-based line index where the offending annotation starts
    pub line: usize,
    pub message: String,
}

/// Routes recovered from a single class.
#[derive(Debug, Clone, Default)]
pub struct ClassRoutes {
    pub name: String,
    /// Set by the catalog builder; `None` for stdin input
    pub file: Option<PathBuf>,
    pub base_paths: Vec<String>,
    /// Deduplicated, sorted
    pub routes: Vec<Route>,
    pub warnings: Vec<ScanWarning>,
}

/// All classes discovered in one run.
#[derive(Debug, Default)]
pub struct Catalog {
    pub title: String,
    pub classes: Vec<ClassRoutes>,
}
