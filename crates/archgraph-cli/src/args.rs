//! Command-line argument definitions for the archgraph CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, output format,
//! configuration file selection, layout strategy and logging verbosity.

use clap::{Parser, ValueEnum};

use archgraph::strategy::LayoutStrategy;

/// Output formats supported by the CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Render model with node positions and edges
    #[default]
    Json,
    /// Standalone SVG preview
    Svg,
}

impl OutputFormat {
    /// File extension used for the default output path
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Svg => "svg",
        }
    }
}

/// Command-line arguments for the archgraph tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the architecture description (JSON)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file, defaults to `out.<format>`
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Layout strategy (circular, grid), overrides the configuration file
    #[arg(short, long)]
    pub strategy: Option<LayoutStrategy>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Returns the output path, falling back to `out.<format>`
    pub fn output_path(&self) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| format!("out.{}", self.format.extension()))
    }
}
