//! Plain-value data model shared by all engines
//!
//! This module provides the containers the generators snapshot into steps:
//! - [`ListNode`] and [`TreeNode`]: index-addressed nodes stored in an
//!   append-only `Vec`, see [`arena`]
//! - [`graph`]: explicit node and edge lists plus the traversal edge policy
//! - [`HeapMode`]: the single comparator that selects min or max ordering
//!
//! # Index links
//!
//! A link (`next`, `left`, `right`) is an `Option<usize>` offset into the same
//! node vector. `None` means "no link". Links never point past the end of the
//! vector in any emitted step: a node is always appended before anything links
//! to it.
//!
//! # Implicit heap tree
//!
//! A heap is a flat `Vec` read as a complete binary tree:
//! ```text
//! parent(i) = (i - 1) / 2     left(i) = 2i + 1     right(i) = 2i + 2
//! ```

pub mod arena;
pub mod graph;

use serde::{Deserialize, Serialize};

pub use graph::{Distance, Edge, EdgeMode, Graph, GraphNode};

/// Node of a singly linked list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListNode {
    pub value: i64,
    pub next: Option<usize>,
}

impl ListNode {
    pub fn new(value: i64, next: Option<usize>) -> Self {
        ListNode { value, next }
    }
}

/// Node of a binary tree or binary search tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub value: i64,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl TreeNode {
    /// Create a node without children
    pub fn leaf(value: i64) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Ordering direction of a binary heap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeapMode {
    #[default]
    Min,
    Max,
}

impl HeapMode {
    /// Whether `a` belongs strictly closer to the root than `b`
    pub fn prefers(self, a: i64, b: i64) -> bool {
        match self {
            HeapMode::Min => a < b,
            HeapMode::Max => a > b,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HeapMode::Min => "min",
            HeapMode::Max => "max",
        }
    }

    /// "minimum" or "maximum", for narration
    pub fn extreme(self) -> &'static str {
        match self {
            HeapMode::Min => "minimum",
            HeapMode::Max => "maximum",
        }
    }
}

impl std::str::FromStr for HeapMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" => Ok(HeapMode::Min),
            "max" => Ok(HeapMode::Max),
            other => Err(format!("unknown heap mode: {}", other)),
        }
    }
}

/// Parent slot of heap index `i` (`i > 0`)
pub fn parent(i: usize) -> usize {
    (i - 1) / 2
}

pub fn left_child(i: usize) -> usize {
    2 * i + 1
}

pub fn right_child(i: usize) -> usize {
    2 * i + 2
}

/// Check the heap property over the whole array
pub fn is_heap(array: &[i64], mode: HeapMode) -> bool {
    (1..array.len()).all(|i| !mode.prefers(array[i], array[parent(i)]))
}

/// Collect the values of a linked list by walking from `head`.
///
/// Stops after `nodes.len()` hops so a malformed cycle cannot loop forever.
pub fn list_values(nodes: &[ListNode], head: Option<usize>) -> Vec<i64> {
    let mut values = Vec::new();
    let mut current = head;
    while let Some(index) = current {
        if values.len() >= nodes.len() {
            break;
        }
        let Some(node) = nodes.get(index) else {
            break;
        };
        values.push(node.value);
        current = node.next;
    }
    values
}

/// Values of a tree in inorder (left, node, right)
pub fn inorder_values(nodes: &[TreeNode], root: Option<usize>) -> Vec<i64> {
    fn walk(nodes: &[TreeNode], index: Option<usize>, out: &mut Vec<i64>) {
        let Some(node) = index.and_then(|i| nodes.get(i)) else {
            return;
        };
        walk(nodes, node.left, out);
        out.push(node.value);
        walk(nodes, node.right, out);
    }

    let mut out = Vec::with_capacity(nodes.len());
    walk(nodes, root, &mut out);
    out
}
