//! Layout engine
//!
//! This module assigns canvas coordinates to graph nodes. The strategy is
//! chosen by the caller through [`LayoutStrategy`] and dispatched to one of
//! two pure functions:
//!
//! - [`circular::positions`] - evenly spaced on a circle around the canvas center
//! - [`grid::positions`] - row-major placement with constant spacing
//!
//! Both are deterministic functions of node index and count. The [`Engine`]
//! only carries their parameters, so a single engine can lay out the same
//! nodes with different strategies any number of times.

pub mod circular;
pub mod grid;

use log::{debug, info};

use archgraph_core::{
    geometry::{Point, Size},
    strategy::LayoutStrategy,
};

pub use grid::GridOptions;

use crate::structure::Node;

/// A node with its assigned canvas position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedNode<'a> {
    node: Node<'a>,
    position: Point,
}

impl<'a> PositionedNode<'a> {
    pub fn new(node: Node<'a>, position: Point) -> Self {
        Self { node, position }
    }

    pub fn node(&self) -> Node<'a> {
        self.node
    }

    /// Returns the center of the node on the canvas.
    pub fn position(&self) -> Point {
        self.position
    }
}

/// Configured layout engine.
///
/// # Examples
///
/// ```
/// use archgraph::{
///     architecture::Component,
///     geometry::{Point, Size},
///     layout::Engine,
///     strategy::LayoutStrategy,
///     structure::Graph,
/// };
///
/// let components = [Component::new("A").with_uses(["B"]), Component::new("B")];
/// let graph = Graph::build(&components);
///
/// let engine = Engine::new().with_origin(Point::new(0.0, 0.0));
/// let positioned = engine.calculate(LayoutStrategy::Grid, graph.nodes(), Size::new(800.0, 800.0));
///
/// assert_eq!(positioned[0].position(), Point::new(0.0, 0.0));
/// assert_eq!(positioned[1].position(), Point::new(300.0, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    radius_factor: f32,
    grid: GridOptions,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create a new engine with the default parameters for both strategies
    pub fn new() -> Self {
        Self {
            radius_factor: circular::DEFAULT_RADIUS_FACTOR,
            grid: GridOptions::default(),
        }
    }

    /// Set the circle radius as a fraction of the smaller canvas dimension
    pub fn with_radius_factor(mut self, radius_factor: f32) -> Self {
        self.radius_factor = radius_factor;
        self
    }

    /// Set the number of grid columns per row
    pub fn with_columns_per_row(mut self, columns_per_row: usize) -> Self {
        self.grid.columns_per_row = columns_per_row;
        self
    }

    /// Set the distance between grid columns
    pub fn with_horizontal_spacing(mut self, spacing: f32) -> Self {
        self.grid.horizontal_spacing = spacing;
        self
    }

    /// Set the distance between grid rows
    pub fn with_vertical_spacing(mut self, spacing: f32) -> Self {
        self.grid.vertical_spacing = spacing;
        self
    }

    /// Set the position of the first grid cell
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.grid.origin = origin;
        self
    }

    pub fn radius_factor(&self) -> f32 {
        self.radius_factor
    }

    pub fn grid(&self) -> &GridOptions {
        &self.grid
    }

    /// Position `nodes` with the given strategy.
    ///
    /// The result keeps the node order. Degenerate input (no nodes, a zero
    /// sized canvas for the circular strategy, zero grid columns) yields no
    /// positioned nodes.
    pub fn calculate<'a>(
        &self,
        strategy: LayoutStrategy,
        nodes: &[Node<'a>],
        canvas: Size,
    ) -> Vec<PositionedNode<'a>> {
        info!(strategy:%, nodes_count = nodes.len(); "Calculating layout");

        let positions = match strategy {
            LayoutStrategy::Circular => {
                circular::positions(nodes.len(), canvas, self.radius_factor)
            }
            LayoutStrategy::Grid => grid::positions(nodes.len(), &self.grid),
        };

        debug!(positions_count = positions.len(); "Layout calculated");

        nodes
            .iter()
            .zip(positions)
            .map(|(node, position)| PositionedNode::new(*node, position))
            .collect()
    }
}
