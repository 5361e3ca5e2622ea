//! CLI logic for the archgraph tool.
//!
//! Reads an architecture description, builds and lays out its dependency
//! graph, and writes the render model or an SVG preview.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, OutputFormat};

use std::fs;

use log::info;

use archgraph::{ArchGraphError, ArchitectureRenderer};

/// Run the archgraph CLI application
///
/// # Errors
///
/// Returns `ArchGraphError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Decoding errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), ArchGraphError> {
    let output = args.output_path();
    info!(
        input_path = args.input,
        output_path = output,
        format:? = args.format;
        "Processing architecture"
    );

    let app_config = config::load_config(args)?;

    let source = fs::read_to_string(&args.input)?;

    let renderer = ArchitectureRenderer::new(app_config);
    let architecture = renderer.parse(&source)?;
    let rendered = match args.format {
        OutputFormat::Json => renderer.render_json(&architecture)?,
        OutputFormat::Svg => renderer.render_svg(&architecture)?,
    };

    fs::write(&output, rendered)?;

    info!(output_file = output; "Output written successfully");

    Ok(())
}
