//! The `gridbind` command line.
//!
//! [`execute`] returns the text to print instead of printing it, so
//! commands can be driven in-process from tests.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use gridbind_columns::{parse_columns_value, resolve_columns, ColumnDefaults};
use gridbind_schema::fixtures;
use gridbind_theme::{BaseTheme, GridTheme, ThemeParams, ThemeSelection};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::content::GridContent;
use crate::load::{load_document, locate};
use crate::output::{render, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "gridbind", version, about = "Resolve data-grid component configuration")]
pub struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve theme parameter overrides (library defaults when no file is given)
    Theme {
        file: Option<PathBuf>,
        #[arg(long, default_value_t = BaseTheme::Quartz)]
        base: BaseTheme,
        /// Fail on reference cycles instead of falling back
        #[arg(long)]
        strict: bool,
    },
    /// Resolve a list of column descriptors
    Columns { file: PathBuf },
    /// Resolve full component content
    Grid {
        file: PathBuf,
        /// Fail on malformed advanced-mode JSON instead of ignoring it
        #[arg(long)]
        strict: bool,
        /// Print only the CSS variable overrides as a stylesheet rule
        #[arg(long)]
        css: bool,
    },
    /// Print the component manifest
    Manifest,
    /// Print sample fixtures
    #[command(subcommand)]
    Sample(Sample),
}

#[derive(Debug, Subcommand)]
pub enum Sample {
    Columns,
    Rows,
    Tree,
    Filters,
    /// Render the master-detail cell for a sample row
    Detail {
        #[arg(long, default_value_t = 1)]
        id: u64,
    },
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v`.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Runs a command and returns its output.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = cli.output;
    match &cli.command {
        Command::Theme { file, base, strict } => {
            let overrides = match file {
                Some(path) => {
                    let resolved = locate(path).unwrap_or_else(|| path.clone());
                    ThemeParams::from_file(&resolved).with_context(|| {
                        format!("loading theme overrides from {}", path.display())
                    })?
                }
                None => ThemeParams::new(),
            };
            let theme = if *strict {
                GridTheme::try_new(*base, &overrides)?
            } else {
                GridTheme::new(*base, &overrides)
            };
            Ok(render(&theme, format)?)
        }
        Command::Columns { file } => {
            let document = load_document(file)?;
            let descriptors = parse_columns_value(document)
                .with_context(|| format!("reading columns from {}", file.display()))?;
            let columns = resolve_columns(&descriptors, &ColumnDefaults::default());
            Ok(render(&columns, format)?)
        }
        Command::Grid { file, strict, css } => {
            let content = GridContent::from_file(file)?;
            let grid = if *strict {
                content.resolve_with(content.parse_advanced()?)
            } else {
                content.resolve()
            };
            if *css {
                let selector = match &grid.theme {
                    ThemeSelection::Parameters(theme) => format!(".{}", theme.base.css_class()),
                    ThemeSelection::Custom { .. } => ".ag-root-wrapper".to_string(),
                };
                return Ok(grid.css_overrides.to_css(&selector));
            }
            Ok(render(&grid, format)?)
        }
        Command::Manifest => Ok(render(gridbind_schema::manifest(), format)?),
        Command::Sample(sample) => match sample {
            Sample::Columns => Ok(render(&fixtures::sample_column_defs(), format)?),
            Sample::Rows => Ok(render(&fixtures::sample_row_data(), format)?),
            Sample::Tree => Ok(render(&fixtures::sample_tree_data(), format)?),
            Sample::Filters => Ok(render(&fixtures::sample_preset_filters(), format)?),
            Sample::Detail { id } => Ok(fixtures::render_sample_detail(*id)?),
        },
    }
}

