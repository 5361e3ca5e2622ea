//! Archgraph - dependency graphs for generated architecture descriptions.
//!
//! An architecture generation service describes an application as a flat
//! list of components, each naming the components it uses. This crate turns
//! such a description into a directed graph ([`structure::Graph`]), places the
//! nodes on a canvas ([`layout::Engine`]), and exports the result as a render
//! model ([`export::json`]) or an SVG preview ([`export::svg`]).
//!
//! Graph construction and layout are pure and cannot fail. Errors only come
//! from decoding input, configuration, and export.

pub mod config;
pub mod export;
pub mod layout;
pub mod structure;

mod error;

pub use archgraph_core::{architecture, color, geometry, strategy};

pub use error::ArchGraphError;

use log::{debug, info, trace};

use architecture::Architecture;
use config::AppConfig;
use export::{json::RenderGraph, svg::SvgExporter};
use layout::PositionedNode;
use structure::Graph;

/// Facade running the decode, build, layout and export pipeline.
///
/// The renderer holds configuration only. Each call builds a fresh graph, so
/// a new architecture description simply replaces the previous result.
///
/// # Examples
///
/// ```
/// use archgraph::{ArchitectureRenderer, config::AppConfig};
///
/// let source = r#"{
///     "architecture": [
///         {"type": "router", "name": "A", "purpose": "", "uses": ["B"], "pypi_packages": [], "is_endpoint": true},
///         {"type": "service", "name": "B", "purpose": "", "uses": [], "pypi_packages": [], "is_endpoint": false}
///     ],
///     "external_infrastructure": [],
///     "app_name": "demo"
/// }"#;
///
/// let renderer = ArchitectureRenderer::new(AppConfig::default());
/// let architecture = renderer.parse(source).expect("Failed to parse");
///
/// let json = renderer.render_json(&architecture).expect("Failed to export");
/// assert!(json.contains(r#""id": "A-B""#));
///
/// let svg = renderer.render_svg(&architecture).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct ArchitectureRenderer {
    config: AppConfig,
}

impl ArchitectureRenderer {
    /// Create a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Decode an architecture description from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ArchGraphError::Decode`] if the source is not a valid
    /// architecture description.
    pub fn parse(&self, source: &str) -> Result<Architecture, ArchGraphError> {
        info!("Parsing architecture description");

        let architecture = Architecture::from_json(source)
            .map_err(|err| ArchGraphError::new_decode_error(err, source))?;

        debug!(
            app_name = architecture.app_name(),
            components_count = architecture.components().len();
            "Architecture parsed successfully"
        );
        trace!(architecture:?; "Parsed architecture");

        Ok(architecture)
    }

    /// Lay out a graph with the configured strategy and canvas.
    pub fn layout<'a>(&self, graph: &Graph<'a>) -> Vec<PositionedNode<'a>> {
        let layout = self.config.layout();
        layout
            .engine()
            .calculate(layout.strategy(), graph.nodes(), layout.canvas())
    }

    /// Build, lay out and export the render model as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ArchGraphError::Export`] if serialization fails.
    pub fn render_json(&self, architecture: &Architecture) -> Result<String, ArchGraphError> {
        let graph = Graph::build(architecture.components());
        let positioned = self.layout(&graph);

        let json = RenderGraph::new(&positioned, &graph).to_json()?;

        info!("Render model exported successfully");
        Ok(json)
    }

    /// Build, lay out and render an SVG preview.
    ///
    /// # Errors
    ///
    /// Returns [`ArchGraphError::Config`] for invalid style colors.
    pub fn render_svg(&self, architecture: &Architecture) -> Result<String, ArchGraphError> {
        let exporter = SvgExporter::new(self.config.style())?;

        let graph = Graph::build(architecture.components());
        let positioned = self.layout(&graph);

        let document = exporter.render(&positioned, &graph, self.config.layout().canvas());

        info!("SVG rendered successfully");
        Ok(document.to_string())
    }
}
