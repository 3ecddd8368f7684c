//! Graph representation
//!
//! Nodes and edges are kept as explicit lists; no adjacency map is built.
//! [`Graph::neighbors`] is a scan over the edge list, which is fine at the
//! sizes a step-by-step replay can show.
//!
//! Edges are stored as `from`/`to` pairs. Whether that direction matters for
//! traversal is decided by [`EdgeMode`]; every engine defaults to
//! [`EdgeMode::Undirected`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A graph vertex with an optional layout position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: usize,
    pub value: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
}

impl GraphNode {
    pub fn new(id: usize, value: i64) -> Self {
        GraphNode {
            id,
            value,
            x: None,
            y: None,
        }
    }
}

/// A stored edge. A missing weight counts as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

impl Edge {
    pub fn new(from: usize, to: usize) -> Self {
        Edge {
            from,
            to,
            weight: None,
        }
    }

    pub fn weighted(from: usize, to: usize, weight: u32) -> Self {
        Edge {
            from,
            to,
            weight: Some(weight),
        }
    }

    pub fn weight(&self) -> u32 {
        self.weight.unwrap_or(1)
    }

    /// Whether this edge joins `a` and `b`, in either direction
    pub fn connects(&self, a: usize, b: usize) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// How traversals read an edge's direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMode {
    /// `{from, to}` connects both ways
    #[default]
    Undirected,
    /// `{from, to}` can only be followed from `from`
    Directed,
}

/// Tentative shortest-path distance.
///
/// Variant order matters: every `Finite` value sorts before `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distance {
    Finite(u64),
    Infinite,
}

impl Distance {
    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "∞"),
        }
    }
}

/// An explicit node list plus edge list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<Edge>) -> Self {
        Graph { nodes, edges }
    }

    pub fn contains(&self, id: usize) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Neighbours of `id` in edge-list order, with the edge used to reach them.
    ///
    /// Self-loops are skipped. A neighbour reachable through several edges
    /// appears once per edge.
    pub fn neighbors(&self, id: usize, mode: EdgeMode) -> Vec<(usize, Edge)> {
        self.edges
            .iter()
            .filter_map(|edge| {
                if edge.from == id && edge.to != id {
                    Some((edge.to, *edge))
                } else if mode == EdgeMode::Undirected && edge.to == id && edge.from != id {
                    Some((edge.from, *edge))
                } else {
                    None
                }
            })
            .collect()
    }

    /// Next free node id: one past the largest id, or 0 for an empty graph
    pub fn next_id(&self) -> usize {
        self.nodes.iter().map(|n| n.id + 1).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Graph {
        Graph::new(
            (0..3).map(|i| GraphNode::new(i, i as i64)).collect(),
            vec![Edge::new(0, 1), Edge::weighted(1, 2, 5)],
        )
    }

    #[test]
    fn undirected_neighbors_follow_both_directions() {
        let g = line();
        let ids: Vec<usize> = g.neighbors(1, EdgeMode::Undirected).iter().map(|n| n.0).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn directed_neighbors_only_follow_from() {
        let g = line();
        let ids: Vec<usize> = g.neighbors(1, EdgeMode::Directed).iter().map(|n| n.0).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn distance_ordering() {
        assert!(Distance::Finite(u64::MAX) < Distance::Infinite);
        assert!(Distance::Finite(1) < Distance::Finite(2));
        assert_eq!(Distance::Infinite.to_string(), "∞");
    }

    #[test]
    fn default_weight_is_one() {
        assert_eq!(Edge::new(0, 1).weight(), 1);
        assert_eq!(line().next_id(), 3);
        assert_eq!(Graph::default().next_id(), 0);
    }
}
