//! SVG preview of a positioned graph.
//!
//! Draws a rounded background, one straight line per edge, and one circle
//! per node with the component name and a package caption below it.
//! Endpoints get a larger circle and a brighter outline.

use std::collections::HashMap;

use log::debug;
use svg::{
    Document,
    node::element::{Circle, Group, Line, Rectangle, Text},
};

use archgraph_core::{
    color::Color,
    geometry::{Point, Size},
};

use crate::{
    config::StyleConfig, error::ArchGraphError, layout::PositionedNode, structure::Graph,
};

const NODE_RADIUS: f32 = 20.0;
const ENDPOINT_RADIUS: f32 = 24.0;
const LABEL_OFFSET: f32 = 30.0;
const CAPTION_OFFSET: f32 = 46.0;
const CAPTION_PACKAGES: usize = 2;
const CORNER_RADIUS: f32 = 14.0;
const STROKE_WIDTH: f32 = 1.5;

/// Renders positioned graphs as SVG documents.
#[derive(Debug, Clone)]
pub struct SvgExporter {
    background: Color,
    node_fill: Color,
    edge: Color,
    text: Color,
}

impl SvgExporter {
    /// Creates an exporter using the colors from `style`.
    ///
    /// # Errors
    ///
    /// Returns [`ArchGraphError::Config`] if a configured color is invalid.
    pub fn new(style: &StyleConfig) -> Result<Self, ArchGraphError> {
        Ok(Self {
            background: style.background_color().map_err(ArchGraphError::Config)?,
            node_fill: style.node_color().map_err(ArchGraphError::Config)?,
            edge: style.edge_color().map_err(ArchGraphError::Config)?,
            text: style.text_color().map_err(ArchGraphError::Config)?,
        })
    }

    /// Builds the SVG document for a positioned graph on a `canvas` sized surface.
    ///
    /// Edges whose endpoints have no position are not drawn.
    pub fn render(
        &self,
        positioned: &[PositionedNode<'_>],
        graph: &Graph<'_>,
        canvas: Size,
    ) -> Document {
        let positions: HashMap<&str, Point> = positioned
            .iter()
            .map(|positioned| (positioned.node().id(), positioned.position()))
            .collect();

        let background = Rectangle::new()
            .set("width", canvas.width())
            .set("height", canvas.height())
            .set("rx", CORNER_RADIUS)
            .set("fill", &self.background);

        let mut edges = Group::new().set("class", "edges");
        let mut drawn_edges = 0;
        for edge in graph.edges() {
            let (Some(source), Some(target)) =
                (positions.get(edge.source()), positions.get(edge.target()))
            else {
                continue;
            };

            edges = edges.add(
                Line::new()
                    .set("x1", source.x())
                    .set("y1", source.y())
                    .set("x2", target.x())
                    .set("y2", target.y())
                    .set("stroke", self.edge.with_alpha(0.2))
                    .set("stroke-width", STROKE_WIDTH),
            );
            drawn_edges += 1;
        }

        let nodes = positioned
            .iter()
            .fold(Group::new().set("class", "nodes"), |group, positioned| {
                group.add(self.render_node(positioned))
            });

        debug!(nodes_count = positioned.len(), edges_count = drawn_edges; "SVG rendered");

        Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", canvas.width(), canvas.height()),
            )
            .set("width", canvas.width())
            .set("height", canvas.height())
            .add(background)
            .add(edges)
            .add(nodes)
    }

    fn render_node(&self, positioned: &PositionedNode<'_>) -> Group {
        let component = positioned.node().component();
        let center = positioned.position();

        let (radius, outline_alpha) = if component.is_endpoint() {
            (ENDPOINT_RADIUS, 0.5)
        } else {
            (NODE_RADIUS, 0.2)
        };

        let circle = Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", radius)
            .set("fill", &self.node_fill)
            .set("stroke", self.edge.with_alpha(outline_alpha))
            .set("stroke-width", STROKE_WIDTH);

        let mut group = Group::new()
            .set("class", if component.is_endpoint() { "node endpoint" } else { "node" })
            .add(circle)
            .add(self.label(component.name(), center, LABEL_OFFSET, 12));

        if let Some(summary) = component.package_summary(CAPTION_PACKAGES) {
            group = group.add(self.label(summary, center, CAPTION_OFFSET, 9));
        }

        group
    }

    fn label(
        &self,
        content: impl Into<String>,
        center: Point,
        offset: f32,
        font_size: u32,
    ) -> Text {
        Text::new(content)
            .set("x", center.x())
            .set("y", center.y() + offset)
            .set("text-anchor", "middle")
            .set("fill", &self.text)
            .set("font-size", font_size)
            .set("font-family", "monospace")
    }
}

#[cfg(test)]
mod tests {
    use archgraph_core::{architecture::Component, strategy::LayoutStrategy};

    use super::*;
    use crate::layout::Engine;

    fn render(components: &[Component], canvas: Size) -> String {
        let graph = Graph::build(components);
        let positioned = Engine::new().calculate(LayoutStrategy::Circular, graph.nodes(), canvas);
        let exporter = SvgExporter::new(&StyleConfig::default()).unwrap();
        exporter.render(&positioned, &graph, canvas).to_string()
    }

    #[test]
    fn test_one_circle_per_node_one_line_per_edge() {
        let components = [
            Component::new("api").with_uses(["service", "cache"]).with_endpoint(true),
            Component::new("service").with_uses(["db"]),
            Component::new("db"),
        ];

        let svg = render(&components, Size::new(800.0, 800.0));

        assert!(svg.contains("<svg"));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert_eq!(svg.matches("<line").count(), 2);
        assert!(svg.contains(">api<") || svg.contains(">\napi\n<"));
    }

    #[test]
    fn test_endpoint_uses_larger_radius() {
        let components = [
            Component::new("route").with_endpoint(true),
            Component::new("worker"),
        ];

        let svg = render(&components, Size::new(400.0, 400.0));

        assert!(svg.contains("r=\"24\""));
        assert!(svg.contains("r=\"20\""));
        assert!(svg.contains("node endpoint"));
    }

    #[test]
    fn test_package_caption() {
        let components =
            [Component::new("api").with_packages(["fastapi==0.110.0", "httpx", "pydantic"])];

        let svg = render(&components, Size::new(400.0, 400.0));

        assert!(svg.contains("fastapi, httpx +1 more"));
        assert!(!svg.contains("0.110.0"));
    }

    #[test]
    fn test_degenerate_canvas_draws_no_nodes() {
        let components = [Component::new("a").with_uses(["b"]), Component::new("b")];

        let svg = render(&components, Size::new(0.0, 0.0));

        assert_eq!(svg.matches("<circle").count(), 0);
        assert_eq!(svg.matches("<line").count(), 0);
    }

    #[test]
    fn test_invalid_style_color() {
        let style: StyleConfig = toml::from_str(r#"node_color = "bogus""#).unwrap();
        let result = SvgExporter::new(&style);
        assert!(matches!(result, Err(ArchGraphError::Config(_))));
    }
}
