use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::GraphResult;

/// Sentinel distance for unreachable nodes
pub const INFINITY: u64 = u64::MAX;

/// A weighted directed graph as an adjacency map.
///
/// Weights are unsigned, so the no-negative-weights invariant Dijkstra
/// relies on holds by construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph {
    adjacency: HashMap<String, Vec<(String, u64)>>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Graph::default()
    }

    /// Add a directed edge from `from` to `to` with the given weight
    pub fn add_edge(&mut self, from: &str, to: &str, weight: u64) -> &mut Self {
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .push((to.to_string(), weight));
        self
    }

    /// Load a graph from a JSON adjacency map, e.g.
    /// `{"A": [["B", 1], ["C", 4]], "B": [["D", 5]]}`
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> GraphResult<Self> {
        let file = File::open(path)?;
        let graph = serde_json::from_reader(BufReader::new(file))?;
        Ok(graph)
    }

    /// Outgoing edges of a node; nodes without entries have none
    pub fn neighbors(&self, node: &str) -> &[(String, u64)] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    /// Number of nodes with outgoing edges
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the graph has no edges at all
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Single-source shortest path between `start` and `end`.
///
/// Returns the minimum total weight and the node sequence from `start` to
/// `end` inclusive. If `end` is unreachable the distance is [`INFINITY`]
/// and the path degenerates to `[end]`, since no predecessor was ever set
/// for it.
pub fn shortest_path(graph: &Graph, start: &str, end: &str) -> (u64, Vec<String>) {
    let mut distances: HashMap<&str, u64> = HashMap::new();
    let mut predecessors: HashMap<&str, &str> = HashMap::new();
    let mut queue: BinaryHeap<Reverse<(u64, &str)>> = BinaryHeap::new();

    distances.insert(start, 0);
    queue.push(Reverse((0, start)));

    while let Some(Reverse((distance, node))) = queue.pop() {
        if node == end {
            break;
        }
        // Stale queue entry for a node already settled closer
        if distance > *distances.get(node).unwrap_or(&INFINITY) {
            continue;
        }

        for (neighbor, weight) in graph.neighbors(node) {
            let candidate = distance.saturating_add(*weight);
            if candidate < *distances.get(neighbor.as_str()).unwrap_or(&INFINITY) {
                distances.insert(neighbor.as_str(), candidate);
                predecessors.insert(neighbor.as_str(), node);
                queue.push(Reverse((candidate, neighbor.as_str())));
            }
        }
    }

    // Walk predecessors back from the destination; an unreachable end has
    // none, which leaves the degenerate single-node path.
    let mut path = vec![end.to_string()];
    let mut node = end;
    while let Some(&previous) = predecessors.get(node) {
        path.push(previous.to_string());
        node = previous;
    }
    path.reverse();

    (*distances.get(end).unwrap_or(&INFINITY), path)
}
