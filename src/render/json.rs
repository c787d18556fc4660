//! JSON renderer — structured output for tooling integration.

use crate::model::*;
use crate::render::Renderer;
use anyhow::{Context, Result};
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct CatalogView<'a> {
    title: &'a str,
    classes: Vec<ClassView<'a>>,
}

#[derive(Serialize)]
struct ClassView<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    base_paths: &'a [String],
    routes: &'a [Route],
}

impl Renderer for JsonRenderer {
    fn render(&self, catalog: &Catalog) -> Result<String> {
        let view = CatalogView {
            title: &catalog.title,
            classes: catalog
                .classes
                .iter()
                .map(|class| ClassView {
                    name: &class.name,
                    file: class.file.as_ref().map(|p| p.to_string_lossy().into_owned()),
                    base_paths: &class.base_paths,
                    routes: &class.routes,
                })
                .collect(),
        };
        let mut out = serde_json::to_string_pretty(&view).context("failed to serialize catalog")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
