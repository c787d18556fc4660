//! route-catalog — inventory the HTTP routes declared by annotated controller
//! classes.
//!
//! Two modes:
//!
//! - **stdin mode**: `route-catalog < UserController.java`
//! - **file mode**: `route-catalog -o docs/api-catalog.md backend/src/main/java`

mod catalog;
mod model;
mod path;
mod render;
mod scanner;
mod toc;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "route-catalog",
    about = "Generate an HTTP route catalog from annotated controller sources"
)]
struct Cli {
    /// Input files, directories, or glob patterns. If omitted, reads one source from stdin.
    inputs: Vec<String>,

    /// Output file, or directory to write api-catalog.<ext> into. Defaults to stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// File name pattern matched when an input is a directory
    #[arg(short = 'i', long, default_value = catalog::DEFAULT_INCLUDE)]
    include: String,

    /// Report title
    #[arg(long, default_value = "Backend API Catalog")]
    title: String,

    /// Add an index of class links to markdown output
    #[arg(long)]
    toc: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let renderer = render::create_renderer(&cli.format, cli.toc)?;

    let catalog = if cli.inputs.is_empty() {
        stdin_mode(&cli)?
    } else {
        file_mode(&cli)?
    };

    let rendered = renderer.render(&catalog)?;
    match cli.output {
        Some(ref out) => {
            let out_path = resolve_output(out, renderer.file_extension());
            write_report(&out_path, &rendered)?;
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// stdin mode: the whole of stdin is one source unit.
fn stdin_mode(cli: &Cli) -> Result<model::Catalog> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .context("failed to read stdin")?;
    let input = String::from_utf8_lossy(&bytes);

    Ok(model::Catalog {
        title: cli.title.clone(),
        classes: catalog::scan_source(&input, None).into_iter().collect(),
    })
}

/// file mode: expand inputs and scan every candidate file.
fn file_mode(cli: &Cli) -> Result<model::Catalog> {
    let files = catalog::expand_inputs(&cli.inputs, &cli.include)?;
    tracing::debug!("scanning {} files", files.len());
    Ok(catalog::build(&files, &cli.title))
}

/// An existing directory receives `api-catalog.<ext>`; anything else is
/// taken as the file path.
fn resolve_output(out: &Path, ext: &str) -> PathBuf {
    if out.is_dir() {
        out.join(format!("api-catalog.{}", ext))
    } else {
        out.to_path_buf()
    }
}

fn write_report(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}
