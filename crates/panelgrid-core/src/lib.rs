//! Core panelgrid library (grid model, width measurement, renderer, config).

pub mod config;
pub mod grid;
pub mod render;
pub mod width;

pub use config::RenderConfig;
pub use grid::{Grid, Panel};
pub use render::{PanelPrinter, render};
pub use width::{UnicodeWidth, VisualWidth};
