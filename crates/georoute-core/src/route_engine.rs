//! Shortest-path search over the internal graph.
//!
//! Classic single-source Dijkstra with a binary-heap frontier. Decrease-key is
//! done by pushing a fresh entry and skipping stale ones when they are popped,
//! which keeps the heap logarithmic without an addressable queue.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{RouteError, RouteResult};
use crate::graph::Adjacency;

/// Ordered path of node ids and its cost in kilometers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathResult {
    pub path: Vec<String>,
    pub total_cost: f64,
}

impl ShortestPathResult {
    fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            total_cost: f64::INFINITY,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenNode<'a> {
    dist: FloatOrd,
    id: &'a str,
}

impl PartialOrd for OpenNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .cmp(&other.dist)
            .then_with(|| self.id.cmp(other.id))
    }
}

/// Every id mentioned by the graph, either as a key or as an edge target.
fn known_nodes(graph: &Adjacency) -> HashSet<&str> {
    let mut nodes: HashSet<&str> = graph.keys().map(String::as_str).collect();
    for edges in graph.values() {
        nodes.extend(edges.iter().map(|edge| edge.target_id.as_str()));
    }
    nodes
}

/// Find the cheapest path from `start_id` to `target_id`.
///
/// Returns an empty path with infinite cost when the target cannot be reached.
/// Edge costs must be non-negative.
pub fn shortest_path(
    start_id: &str,
    target_id: &str,
    graph: &Adjacency,
) -> RouteResult<ShortestPathResult> {
    let nodes = known_nodes(graph);
    for id in [start_id, target_id] {
        if !nodes.contains(id) {
            return Err(RouteError::UnknownNode(id.to_string()));
        }
    }

    let mut dist: HashMap<&str, f64> = nodes.iter().map(|&id| (id, f64::INFINITY)).collect();
    let mut previous: HashMap<&str, &str> = HashMap::new();
    dist.insert(start_id, 0.0);

    let mut open_set: BinaryHeap<Reverse<OpenNode>> = BinaryHeap::new();
    open_set.push(Reverse(OpenNode {
        dist: FloatOrd(0.0),
        id: start_id,
    }));

    while let Some(Reverse(current)) = open_set.pop() {
        let best = dist.get(current.id).copied().unwrap_or(f64::INFINITY);
        if current.dist.0 > best {
            continue;
        }
        if current.id == target_id {
            break;
        }

        let Some(edges) = graph.get(current.id) else {
            continue;
        };
        for edge in edges {
            let candidate = best + edge.cost;
            let known = dist
                .get(edge.target_id.as_str())
                .copied()
                .unwrap_or(f64::INFINITY);
            if candidate < known {
                dist.insert(edge.target_id.as_str(), candidate);
                previous.insert(edge.target_id.as_str(), current.id);
                open_set.push(Reverse(OpenNode {
                    dist: FloatOrd(candidate),
                    id: edge.target_id.as_str(),
                }));
            }
        }
    }

    let cost_to_target = dist.get(target_id).copied().unwrap_or(f64::INFINITY);
    if cost_to_target.is_infinite() {
        return Ok(ShortestPathResult::unreachable());
    }

    let mut path = vec![target_id.to_string()];
    let mut step = target_id;
    while let Some(&prev) = previous.get(step) {
        path.push(prev.to_string());
        step = prev;
    }
    path.reverse();

    Ok(ShortestPathResult {
        path,
        total_cost: cost_to_target,
    })
}
