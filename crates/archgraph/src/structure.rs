//! Graph construction from architecture descriptions.
//!
//! This module turns a flat list of [`Component`](archgraph_core::architecture::Component)s
//! into a directed [`Graph`]: one [`Node`] per component and one [`Edge`] per
//! resolvable `uses` entry.

mod graph;

pub use graph::{Edge, Graph, Node};
