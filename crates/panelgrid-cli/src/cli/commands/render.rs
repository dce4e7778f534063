//! Render command handler.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use panelgrid_core::{Grid, PanelPrinter, RenderConfig};
use serde::Deserialize;

/// Supported grid file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// Array of rows, each an array of strings: `[["a", "b"], ["c"]]`
    Json,
    /// A `rows` key holding an array of string arrays: `rows = [["a", "b"], ["c"]]`
    Toml,
}

impl InputFormat {
    /// Picks the format from a file extension, defaulting to JSON.
    pub fn from_path(path: Option<&Path>) -> Self {
        match path.and_then(Path::extension).and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => InputFormat::Toml,
            _ => InputFormat::Json,
        }
    }
}

#[derive(Deserialize)]
struct GridDocument {
    rows: Grid,
}

pub struct RenderRunOptions<'a> {
    pub input: Option<&'a Path>,
    pub format: Option<InputFormat>,
    pub config: RenderConfig,
    pub padding: Option<usize>,
    pub bottom_padding: Option<i64>,
    pub same_column_width: Option<bool>,
}

pub fn run(options: &RenderRunOptions<'_>) -> Result<()> {
    let input = options.input.filter(|path| *path != Path::new("-"));
    let format = options
        .format
        .unwrap_or_else(|| InputFormat::from_path(input));

    let (source, label) = read_input(input)?;
    let grid = parse_grid(&source, format)
        .with_context(|| format!("parse grid from {label}"))?;

    // Apply overrides if provided
    let config = {
        let mut c = options.config;
        if let Some(padding) = options.padding {
            c = c.with_padding(padding);
        }
        if let Some(bottom_padding) = options.bottom_padding {
            c = c.with_bottom_padding(bottom_padding);
        }
        if let Some(enabled) = options.same_column_width {
            c = c.with_same_column_width_enabled(enabled);
        }
        c
    };

    tracing::debug!(source = %label, ?format, ?config, "rendering grid");

    PanelPrinter::new(grid, config)
        .render_to(&mut io::stdout().lock())
        .context("write rendered grid")
}

fn read_input(path: Option<&Path>) -> Result<(String, String)> {
    match path {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("read grid file {}", path.display()))?;
            Ok((source, path.display().to_string()))
        }
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("read grid from stdin")?;
            Ok((source, "stdin".to_string()))
        }
    }
}

fn parse_grid(source: &str, format: InputFormat) -> Result<Grid> {
    match format {
        InputFormat::Json => Ok(serde_json::from_str(source)?),
        InputFormat::Toml => {
            let document: GridDocument = toml::from_str(source)?;
            Ok(document.rows)
        }
    }
}
