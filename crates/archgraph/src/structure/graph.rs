//! Directed dependency graph built from components.
//!
//! # Architecture
//!
//! The module provides:
//! - [`Node`]: A borrowed view of one input component
//! - [`Edge`]: A `uses` relation between two resolved components
//! - [`Graph`]: The node list, edge list, and lookup indices
//!
//! Capabilities:
//! - Name lookup through an insertion-ordered index
//! - Tracking of both incoming and outgoing edges per node
//! - Root detection (nodes with no incoming edges)
//!
//! The graph is directed and allows cycles, self-loops and multiple edges
//! between the same pair of nodes.

use std::collections::HashMap;

use indexmap::IndexMap;
use log::{debug, info, trace, warn};

use archgraph_core::architecture::Component;

/// A graph node, derived 1:1 from a component.
///
/// The node borrows its component so every piece of metadata stays available
/// to renderers without copying.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node<'a> {
    component: &'a Component,
}

impl<'a> Node<'a> {
    fn new(component: &'a Component) -> Self {
        Self { component }
    }

    /// Returns the node identifier, which is the component name.
    pub fn id(&self) -> &'a str {
        self.component.name()
    }

    /// Returns the component this node was derived from.
    pub fn component(&self) -> &'a Component {
        self.component
    }
}

/// A directed edge from a component to a component it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<'a> {
    source: &'a str,
    target: &'a str,
}

impl<'a> Edge<'a> {
    fn new(source: &'a str, target: &'a str) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn target(&self) -> &'a str {
        self.target
    }

    /// Returns the display identifier `"<source>-<target>"`.
    ///
    /// Parallel edges share the same identifier.
    pub fn id(&self) -> String {
        format!("{}-{}", self.source, self.target)
    }
}

/// Nodes and edges derived from one architecture description.
///
/// A graph is immutable once built. Rebuilding from a new description
/// produces a new graph.
#[derive(Debug)]
pub struct Graph<'a> {
    nodes: Vec<Node<'a>>,
    edges: Vec<Edge<'a>>,
    /// Name to position in `nodes`. A later duplicate replaces an earlier one.
    index: IndexMap<&'a str, usize>,
    incoming_edges: HashMap<&'a str, Vec<usize>>,
    outgoing_edges: HashMap<&'a str, Vec<usize>>,
}

impl<'a> Graph<'a> {
    /// Builds a graph from components.
    ///
    /// Nodes keep the input order. For each component, every `uses` entry
    /// that names a known component produces an edge, in declared order.
    /// Entries naming unknown components are skipped silently, since the
    /// generating service may refer to infrastructure outside the
    /// description. Repeated entries produce repeated edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use archgraph::{architecture::Component, structure::Graph};
    ///
    /// let components = [
    ///     Component::new("A").with_uses(["B", "Z"]),
    ///     Component::new("B"),
    /// ];
    ///
    /// let graph = Graph::build(&components);
    /// assert_eq!(graph.nodes_count(), 2);
    ///
    /// let edge_ids: Vec<String> = graph.edges().iter().map(|edge| edge.id()).collect();
    /// assert_eq!(edge_ids, ["A-B"]);
    /// ```
    pub fn build(components: &'a [Component]) -> Self {
        info!(components_count = components.len(); "Building graph");

        let mut index = IndexMap::with_capacity(components.len());
        for (position, component) in components.iter().enumerate() {
            if let Some(previous) = index.insert(component.name(), position) {
                warn!(
                    name = component.name(),
                    previous,
                    position;
                    "Duplicate component name, later entry replaces the earlier one"
                );
            }
        }

        let nodes: Vec<Node<'a>> = components.iter().map(Node::new).collect();

        let mut graph = Self {
            nodes,
            edges: Vec::new(),
            index,
            incoming_edges: HashMap::new(),
            outgoing_edges: HashMap::new(),
        };

        for component in components {
            for target in component.uses() {
                let resolved = graph.index.get(target.as_str()).copied();
                match resolved {
                    Some(target_position) => {
                        let target = components[target_position].name();
                        graph.add_edge(component.name(), target);
                    }
                    None => {
                        debug!(
                            source = component.name(),
                            target = target.as_str();
                            "Skipping unresolved reference"
                        );
                    }
                }
            }
        }

        debug!(
            nodes_count = graph.nodes_count(),
            edges_count = graph.edges_count();
            "Graph built"
        );
        trace!(graph:?; "Built graph");

        graph
    }

    fn add_edge(&mut self, source: &'a str, target: &'a str) {
        self.edges.push(Edge::new(source, target));

        let idx = self.edges.len() - 1;
        self.outgoing_edges.entry(source).or_default().push(idx);
        self.incoming_edges.entry(target).or_default().push(idx);
    }

    /// Returns all nodes in input order.
    pub fn nodes(&self) -> &[Node<'a>] {
        &self.nodes
    }

    /// Returns all edges in materialization order.
    pub fn edges(&self) -> &[Edge<'a>] {
        &self.edges
    }

    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edges_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node registered under `name`, if any.
    ///
    /// With duplicate names this is the last component carrying the name.
    pub fn node(&self, name: &str) -> Option<Node<'a>> {
        self.index.get(name).map(|&position| self.nodes[position])
    }

    /// Checks if a component with the given name exists in the graph.
    pub fn contains_node(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the nodes used by `name`, one entry per outgoing edge.
    ///
    /// Returns an empty iterator for unknown names or nodes without
    /// outgoing edges.
    pub fn outgoing_nodes(&self, name: &str) -> impl Iterator<Item = Node<'a>> + '_ {
        self.outgoing_edges
            .get(name)
            .into_iter()
            .flatten()
            .filter_map(|&idx| self.node(self.edges[idx].target))
    }

    /// Returns the nodes that use `name`, one entry per incoming edge.
    pub fn incoming_nodes(&self, name: &str) -> impl Iterator<Item = Node<'a>> + '_ {
        self.incoming_edges
            .get(name)
            .into_iter()
            .flatten()
            .filter_map(|&idx| self.node(self.edges[idx].source))
    }

    /// Returns nodes no other component uses, in input order.
    pub fn roots(&self) -> impl Iterator<Item = Node<'a>> + '_ {
        self.nodes
            .iter()
            .filter(|node| !self.incoming_edges.contains_key(node.id()))
            .copied()
    }
}
