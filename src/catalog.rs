//! Catalog builder: find candidate files, scan them, order the results.

use crate::model::{Catalog, ClassRoutes};
use crate::scanner;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default file name pattern used when an input is a directory.
pub const DEFAULT_INCLUDE: &str = "*Controller.java";

/// Expand inputs into a sorted, deduplicated list of files.
///
/// Each input may be a file, a directory (searched recursively for `include`),
/// or a glob pattern.
pub fn expand_inputs(inputs: &[String], include: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        let path = Path::new(input);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }

        let pattern = if path.is_dir() {
            let dir = glob::Pattern::escape(&path.to_string_lossy());
            format!("{}/**/{}", dir.trim_end_matches('/'), include)
        } else {
            input.clone()
        };

        let matches: Vec<_> = glob::glob(&pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!("no files matched: {}", input);
        }
        files.extend(matches);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Scan one in-memory source and report any warnings against `file`.
pub fn scan_source(source: &str, file: Option<&Path>) -> Option<ClassRoutes> {
    let origin = file
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());

    let Some(mut class) = scanner::scan(source) else {
        debug!("{}: no class declaration, skipping", origin);
        return None;
    };

    for w in &class.warnings {
        warn!("{}:{}: {}", origin, w.line + 1, w.message);
    }
    class.file = file.map(Path::to_path_buf);
    Some(class)
}

fn scan_file(path: &Path) -> Result<Option<ClassRoutes>> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let source = String::from_utf8_lossy(&bytes);
    Ok(scan_source(&source, Some(path)))
}

/// Scan every file in parallel and assemble the catalog.
///
/// Unreadable files are logged and skipped. Classes are ordered by name,
/// then by source file.
pub fn build(files: &[PathBuf], title: &str) -> Catalog {
    let mut classes: Vec<ClassRoutes> = files
        .par_iter()
        .filter_map(|path| match scan_file(path) {
            Ok(class) => class,
            Err(e) => {
                warn!("skipping {}: {:#}", path.display(), e);
                None
            }
        })
        .collect();

    classes.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.file.cmp(&b.file)));

    Catalog {
        title: title.to_string(),
        classes,
    }
}
