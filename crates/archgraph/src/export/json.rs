//! Render model for rendering surfaces.
//!
//! The model is a node list and an edge list:
//!
//! ```json
//! {
//!   "nodes": [{"id": "A", "position": {"x": 100.0, "y": 100.0}, "data": {"type": "", "name": "A", ...}}],
//!   "edges": [{"id": "A-B", "source": "A", "target": "B"}]
//! }
//! ```
//!
//! Node `data` carries the original component fields unchanged. Edge ids are
//! `"<source>-<target>"`, stable for identical input.

use std::collections::HashSet;

use log::debug;
use serde::Serialize;

use archgraph_core::{architecture::Component, geometry::Point};

use crate::{error::ArchGraphError, layout::PositionedNode, structure::Graph};

/// A positioned node as seen by a rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode<'a> {
    id: &'a str,
    position: Point,
    data: &'a Component,
}

impl<'a> RenderNode<'a> {
    pub fn id(&self) -> &'a str {
        self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn data(&self) -> &'a Component {
        self.data
    }
}

/// An edge as seen by a rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderEdge<'a> {
    id: String,
    source: &'a str,
    target: &'a str,
}

impl<'a> RenderEdge<'a> {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn target(&self) -> &'a str {
        self.target
    }
}

/// Nodes and edges ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderGraph<'a> {
    nodes: Vec<RenderNode<'a>>,
    edges: Vec<RenderEdge<'a>>,
}

impl<'a> RenderGraph<'a> {
    /// Combines the layout result with the graph edges.
    ///
    /// Nodes come from `positioned`, in layout order. Edges come from
    /// `graph`, in materialization order, parallel edges included. Edges
    /// with an endpoint that has no position are left out, so every edge
    /// refers to a node of the model.
    pub fn new(positioned: &[PositionedNode<'a>], graph: &Graph<'a>) -> Self {
        let nodes: Vec<RenderNode<'a>> = positioned
            .iter()
            .map(|positioned| RenderNode {
                id: positioned.node().id(),
                position: positioned.position(),
                data: positioned.node().component(),
            })
            .collect();

        let ids: HashSet<&str> = nodes.iter().map(|node| node.id).collect();

        let edges: Vec<RenderEdge<'a>> = graph
            .edges()
            .iter()
            .filter(|edge| ids.contains(edge.source()) && ids.contains(edge.target()))
            .map(|edge| RenderEdge {
                id: edge.id(),
                source: edge.source(),
                target: edge.target(),
            })
            .collect();

        if edges.len() < graph.edges_count() {
            debug!(
                skipped_count = graph.edges_count() - edges.len();
                "Skipped edges without positioned endpoints"
            );
        }

        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[RenderNode<'a>] {
        &self.nodes
    }

    pub fn edges(&self) -> &[RenderEdge<'a>] {
        &self.edges
    }

    /// Serializes the model as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ArchGraphError::Export`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ArchGraphError> {
        serde_json::to_string_pretty(self).map_err(|err| ArchGraphError::Export(err.to_string()))
    }
}
