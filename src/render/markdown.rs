//! Markdown report: one heading per class, one bullet per route.

use crate::model::*;
use crate::render::Renderer;
use crate::toc;
use anyhow::Result;

pub struct MarkdownRenderer {
    /// Emit an `## Index` of class links before the class sections
    pub toc: bool,
}

impl Renderer for MarkdownRenderer {
    fn render(&self, catalog: &Catalog) -> Result<String> {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("# {}", catalog.title));
        lines.push(String::new());

        if self.toc && !catalog.classes.is_empty() {
            lines.push("## Index".to_string());
            lines.push(String::new());
            for class in &catalog.classes {
                lines.push(toc::render_toc_item(&class.name));
            }
            lines.push(String::new());
        }

        for class in &catalog.classes {
            lines.push(format!("## {}", class.name));
            for route in &class.routes {
                lines.push(render_route(route));
            }
            lines.push(String::new());
        }

        Ok(lines.join("\n"))
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// `- GET `/path` - handler`, dropping the suffix when the handler is unknown.
fn render_route(route: &Route) -> String {
    if route.handler.is_empty() {
        format!("- {} `{}`", route.method, route.path)
    } else {
        format!("- {} `{}` - {}", route.method, route.path, route.handler)
    }
}
