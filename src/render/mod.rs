//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;

use crate::model::Catalog;
use anyhow::{anyhow, Result};

/// Trait for rendering a Catalog into a specific output format.
pub trait Renderer {
    fn render(&self, catalog: &Catalog) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, toc: bool) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer { toc })),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use markdown or json", format)),
    }
}
