//! Static graph of named locations used when the external provider is unavailable.
//!
//! Graphs are assembled with [`GraphBuilder`] and frozen into a [`GraphStore`],
//! which exposes read-only queries and can be shared across request handlers
//! without locking.

use std::collections::HashMap;

use crate::error::{RouteError, RouteResult};
use crate::models::{Coordinate, Edge, GraphNode};
use crate::spatial::haversine_km;

/// Directed adjacency map: node id to outgoing edges.
pub type Adjacency = HashMap<String, Vec<Edge>>;

/// Seed locations: (id, lat, lon).
const SEED_NODES: [(&str, f64, f64); 5] = [
    ("SP", -23.5505, -46.6333),      // Sao Paulo
    ("RJ", -22.9068, -43.1729),      // Rio de Janeiro
    ("BH", -19.9167, -43.9345),      // Belo Horizonte
    ("BSB", -15.793889, -47.882778), // Brasilia
    ("SSA", -12.9777, -38.5016),     // Salvador
];

const SEED_EDGES: [(&str, &str); 7] = [
    ("SP", "RJ"),
    ("SP", "BH"),
    ("BH", "RJ"),
    ("BH", "BSB"),
    ("RJ", "SSA"),
    ("BH", "SSA"),
    ("BSB", "SSA"),
];

#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<GraphNode>,
    index: HashMap<String, usize>,
    adjacency: Adjacency,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_node(&mut self, node: GraphNode) -> RouteResult<&mut Self> {
        if self.index.contains_key(&node.id) {
            return Err(RouteError::DuplicateNode(node.id));
        }
        self.adjacency.entry(node.id.clone()).or_default();
        self.index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
        Ok(self)
    }

    /// Insert `a -> b` and `b -> a` weighted by the haversine distance between them.
    pub fn connect_bidirectional(&mut self, a: &str, b: &str) -> RouteResult<&mut Self> {
        let from = self.coordinate_of(a)?;
        let to = self.coordinate_of(b)?;
        let cost = haversine_km(&from, &to);
        self.push_edge(a, b, cost);
        self.push_edge(b, a, cost);
        Ok(self)
    }

    pub fn build(self) -> GraphStore {
        GraphStore {
            nodes: self.nodes,
            index: self.index,
            adjacency: self.adjacency,
        }
    }

    fn coordinate_of(&self, id: &str) -> RouteResult<Coordinate> {
        self.index
            .get(id)
            .map(|&idx| self.nodes[idx].coordinate)
            .ok_or_else(|| RouteError::UnregisteredNode(id.to_string()))
    }

    fn push_edge(&mut self, from: &str, to: &str, cost: f64) {
        self.adjacency.entry(from.to_string()).or_default().push(Edge {
            target_id: to.to_string(),
            cost,
        });
    }
}

/// Immutable node registry plus adjacency.
#[derive(Debug, Clone)]
pub struct GraphStore {
    nodes: Vec<GraphNode>,
    index: HashMap<String, usize>,
    adjacency: Adjacency,
}

impl GraphStore {
    /// Build the fixed five-city mesh served as the offline fallback.
    pub fn seed() -> RouteResult<Self> {
        let mut builder = GraphBuilder::new();
        for (id, lat, lon) in SEED_NODES {
            builder.register_node(GraphNode::new(id, lat, lon))?;
        }
        for (a, b) in SEED_EDGES {
            builder.connect_bidirectional(a, b)?;
        }
        Ok(builder.build())
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Id of the registered node closest to `coordinate`.
    ///
    /// Ties resolve to the node registered first.
    pub fn nearest_node_id(&self, coordinate: &Coordinate) -> RouteResult<&str> {
        let mut best: Option<(&GraphNode, f64)> = None;
        for node in &self.nodes {
            let dist = haversine_km(&node.coordinate, coordinate);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((node, dist)),
            }
        }
        best.map(|(node, _)| node.id.as_str())
            .ok_or(RouteError::EmptyGraph)
    }
}
