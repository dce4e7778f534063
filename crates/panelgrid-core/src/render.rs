//! Grid renderer.
//!
//! Lays out a [`Grid`] of multi-line panels into one block of text:
//! - every row is as tall as its tallest panel
//! - every cell is left-justified to its target width, then followed by
//!   `padding` spaces
//! - `bottom_padding` blank lines separate consecutive rows (never after
//!   the last one)
//!
//! Target widths are either per panel (the panel's own widest line) or, in
//! same-column-width mode, shared by every panel at the same column index
//! across the whole grid.

use std::io::{self, Write};

use anyhow::Result;

use crate::config::RenderConfig;
use crate::grid::{Grid, Panel};
use crate::width::{UnicodeWidth, VisualWidth, pad_to_width};

/// Renders `grid` with `config` using standard terminal display widths.
///
/// Total over all inputs: the `Result` is kept for symmetry with other
/// renderers and is never `Err`.
pub fn render(grid: &Grid, config: &RenderConfig) -> Result<String> {
    Ok(layout(grid, config, &UnicodeWidth))
}

/// A grid together with the options used to render it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelPrinter {
    pub panels: Grid,
    pub config: RenderConfig,
}

impl PanelPrinter {
    pub fn new(panels: impl Into<Grid>, config: RenderConfig) -> Self {
        Self {
            panels: panels.into(),
            config,
        }
    }

    #[must_use]
    pub fn with_panels(mut self, panels: impl Into<Grid>) -> Self {
        self.panels = panels.into();
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.config = self.config.with_padding(padding);
        self
    }

    /// Negative values clamp to 0.
    #[must_use]
    pub fn with_bottom_padding(mut self, bottom_padding: i64) -> Self {
        self.config = self.config.with_bottom_padding(bottom_padding);
        self
    }

    #[must_use]
    pub fn with_same_column_width(mut self) -> Self {
        self.config = self.config.with_same_column_width();
        self
    }

    #[must_use]
    pub fn with_same_column_width_enabled(mut self, enabled: bool) -> Self {
        self.config = self.config.with_same_column_width_enabled(enabled);
        self
    }

    /// Renders the grid to a string.
    pub fn srender(&self) -> Result<String> {
        render(&self.panels, &self.config)
    }

    /// Renders the grid to a string, measuring text with `measurer`.
    pub fn srender_with(&self, measurer: &impl VisualWidth) -> Result<String> {
        Ok(layout(&self.panels, &self.config, measurer))
    }

    /// Writes the rendered grid plus a final newline to `out`.
    ///
    /// Only I/O errors from `out` are returned.
    pub fn render_to(&self, out: &mut impl Write) -> io::Result<()> {
        let rendered = self.srender().unwrap_or_default();
        writeln!(out, "{rendered}")
    }

    /// Writes the rendered grid plus a final newline to stdout.
    pub fn render(&self) -> io::Result<()> {
        self.render_to(&mut io::stdout().lock())
    }
}

/// A panel resolved for one row: its lines and the width it is padded to.
struct Cell<'a> {
    lines: Vec<&'a str>,
    width: usize,
}

fn layout(grid: &Grid, config: &RenderConfig, measurer: &impl VisualWidth) -> String {
    tracing::debug!(
        rows = grid.row_count(),
        columns = grid.column_count(),
        padding = config.padding,
        bottom_padding = config.bottom_padding,
        same_column_width = config.same_column_width,
        "rendering panel grid"
    );

    let shared_widths = config
        .same_column_width
        .then(|| column_widths(grid, measurer));
    let cell_width = |column: usize, panel: &Panel| match &shared_widths {
        Some(widths) => widths[column],
        None => measurer.max_line_width(panel.content()),
    };

    let mut out = String::new();
    let last_row = grid.row_count().saturating_sub(1);

    for (row_index, row) in grid.rows().iter().enumerate() {
        let cells: Vec<Cell<'_>> = row
            .iter()
            .enumerate()
            .map(|(column, panel)| Cell {
                lines: panel.lines().collect(),
                width: cell_width(column, panel),
            })
            .collect();
        let row_height = row.iter().map(Panel::line_count).max().unwrap_or(0);
        tracing::trace!(row = row_index, height = row_height, "row laid out");

        for line_index in 0..row_height {
            for cell in &cells {
                let line = cell.lines.get(line_index).copied().unwrap_or("");
                out.push_str(&pad_to_width(line, cell.width, measurer));
                out.extend(std::iter::repeat_n(' ', config.padding));
            }
            out.push('\n');
        }

        if row_index != last_row {
            out.extend(std::iter::repeat_n('\n', config.bottom_padding));
        }
    }

    out
}

/// Widest line at each column index, across every row of the grid.
fn column_widths(grid: &Grid, measurer: &impl VisualWidth) -> Vec<usize> {
    let mut widths = vec![0; grid.column_count()];
    for row in grid.rows() {
        for (column, panel) in row.iter().enumerate() {
            widths[column] = widths[column].max(measurer.max_line_width(panel.content()));
        }
    }
    widths
}
