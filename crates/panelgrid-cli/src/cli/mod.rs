//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use panelgrid_core::RenderConfig;
use panelgrid_core::config::paths;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::render::InputFormat;

#[derive(Parser)]
#[command(name = "panelgrid")]
#[command(version)]
#[command(about = "Render grids of multi-line text panels as aligned terminal output")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the config file (default: $PANELGRID_HOME/config.toml)
    #[arg(long, global = true, value_name = "PATH", env = "PANELGRID_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Render a grid of panels to stdout
    Render {
        /// Grid file to read ("-" or omitted reads stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Input format (default: from file extension, else json)
        #[arg(short, long, value_enum)]
        format: Option<InputFormat>,

        /// Spaces appended after every cell
        #[arg(short, long)]
        padding: Option<usize>,

        /// Blank lines between rows (negative values count as 0)
        #[arg(short, long, allow_negative_numbers = true)]
        bottom_padding: Option<i64>,

        /// Pad every cell in a column to the column's widest panel
        #[arg(long, conflicts_with = "no_same_column_width")]
        same_column_width: bool,

        /// Size every cell by its own content (overrides config)
        #[arg(long)]
        no_same_column_width: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Generate a fresh config from Rust defaults (for xtask)
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging();

    let config_path = cli.config.unwrap_or_else(paths::config_path);

    match cli.command {
        Commands::Render {
            input,
            format,
            padding,
            bottom_padding,
            same_column_width,
            no_same_column_width,
        } => {
            let config = RenderConfig::load_from(&config_path).context("load config")?;
            let same_column_width = match (same_column_width, no_same_column_width) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            commands::render::run(&commands::render::RenderRunOptions {
                input: input.as_deref(),
                format,
                config,
                padding,
                bottom_padding,
                same_column_width,
            })
        }

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path(&config_path);
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(&config_path),
            ConfigCommands::Generate => commands::config::generate(),
        },
    }
}

/// Logs go to stderr so stdout carries only rendered output.
fn init_logging() {
    let filter = EnvFilter::try_from_env("PANELGRID_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
