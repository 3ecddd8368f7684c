//! Per-structure step records
//!
//! One struct per structure family. Each owns a full copy of its container
//! plus the highlight metadata a renderer needs, and an operation tag from a
//! closed enum. Steps are built with `new` and a few chained setters so the
//! generators read as a list of frames.

use crate::structures::{Distance, Edge, GraphNode, HeapMode, ListNode, TreeNode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Declare an operation tag enum whose variants serialise as the given strings.
macro_rules! operation_tags {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $tag)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

operation_tags! {
    /// Phases of the sorting generators
    SortOp {
        Start => "start",
        Comparing => "comparing",
        Swapping => "swapping",
        Swapped => "swapped",
        Pivot => "pivot",
        PivotPlaced => "pivot-placed",
        Dividing => "dividing",
        Merging => "merging",
        Placed => "placed",
        Complete => "complete",
    }
}

operation_tags! {
    /// Phases of the searching generators
    SearchOp {
        Start => "start",
        SortedCopy => "sorted-copy",
        Checking => "checking",
        Narrowing => "narrowing",
        JumpSize => "jump-size",
        Jumping => "jumping",
        BlockFound => "block-found",
        Found => "found",
        NotFound => "not-found",
    }
}

operation_tags! {
    ArrayOp {
        Insert => "insert",
        Shifting => "shifting",
        Inserted => "inserted",
        Delete => "delete",
        Deleted => "deleted",
        Search => "search",
        Comparing => "comparing",
        Found => "found",
        NotFound => "not-found",
        InvalidPosition => "invalid-position",
    }
}

operation_tags! {
    StackOp {
        PushStart => "push-start",
        PushComplete => "push-complete",
        PopStart => "pop-start",
        PopComplete => "pop-complete",
        Peek => "peek",
        Overflow => "overflow",
        Underflow => "underflow",
        Empty => "empty",
    }
}

operation_tags! {
    QueueOp {
        EnqueueStart => "enqueue-start",
        EnqueueComplete => "enqueue-complete",
        DequeueStart => "dequeue-start",
        DequeueComplete => "dequeue-complete",
        PeekFront => "peek-front",
        Overflow => "overflow",
        Underflow => "underflow",
        Empty => "empty",
    }
}

operation_tags! {
    ListOp {
        InsertHeadStart => "insert-head-start",
        InsertHeadComplete => "insert-head-complete",
        InsertTailStart => "insert-tail-start",
        Traversing => "traversing",
        InsertTailComplete => "insert-tail-complete",
        DeleteStart => "delete-start",
        DeleteHead => "delete-head",
        Searching => "searching",
        Unlinking => "unlinking",
        DeleteComplete => "delete-complete",
        NotFound => "not-found",
        ReverseStart => "reverse-start",
        Reversing => "reversing",
        ReverseComplete => "reverse-complete",
        Empty => "empty",
    }
}

operation_tags! {
    /// Phases of binary-tree insertion, traversal and search
    TreeOp {
        Start => "start",
        InsertRoot => "insert-root",
        Searching => "searching",
        Inserted => "inserted",
        TraversingLeft => "traversing-left",
        TraversingRight => "traversing-right",
        Visiting => "visiting",
        Comparing => "comparing",
        Found => "found",
        NotFound => "not-found",
        Complete => "complete",
    }
}

operation_tags! {
    BstOp {
        Start => "start",
        InsertRoot => "insert-root",
        Comparing => "comparing",
        GoLeft => "go-left",
        GoRight => "go-right",
        Inserted => "inserted",
        Searching => "searching",
        Found => "found",
        NotFound => "not-found",
        DeleteLeaf => "delete-leaf",
        DeleteOneChild => "delete-one-child",
        FindingSuccessor => "finding-successor",
        Replacing => "replacing",
        Deleted => "deleted",
    }
}

operation_tags! {
    HeapOp {
        Start => "start",
        HeapifyDown => "heapify-down",
        Comparing => "comparing",
        Swapping => "swapping",
        Swapped => "swapped",
        Inserted => "inserted",
        BubblingUp => "bubbling-up",
        Replaced => "replaced",
        Built => "built",
        Complete => "complete",
        Peek => "peek",
        Empty => "empty",
    }
}

operation_tags! {
    GraphOp {
        Start => "start",
        Visiting => "visiting",
        Discovering => "discovering",
        Exploring => "exploring",
        Backtracking => "backtracking",
        Relaxing => "relaxing",
        Updated => "updated",
        PathFound => "path-found",
        NoPath => "no-path",
        InvalidStart => "invalid-start",
        NodeAdded => "node-added",
        EdgeAdded => "edge-added",
        InvalidEdge => "invalid-edge",
        DuplicateEdge => "duplicate-edge",
        Complete => "complete",
    }
}

/// One frame of a sorting run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStep<T = i64> {
    pub array: Vec<T>,
    pub comparing: Vec<usize>,
    pub swapping: Vec<usize>,
    /// Indices already in their final position, ascending
    pub sorted: Vec<usize>,
    pub operation: SortOp,
    pub description: String,
}

impl<T: Clone> SortStep<T> {
    pub fn new(array: &[T], operation: SortOp, description: impl Into<String>) -> Self {
        SortStep {
            array: array.to_vec(),
            comparing: Vec::new(),
            swapping: Vec::new(),
            sorted: Vec::new(),
            operation,
            description: description.into(),
        }
    }

    pub fn comparing(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.comparing = indices.into_iter().collect();
        self
    }

    pub fn swapping(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.swapping = indices.into_iter().collect();
        self
    }

    pub fn sorted(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.sorted = indices.into_iter().collect();
        self
    }
}

/// One frame of a search run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStep {
    pub array: Vec<i64>,
    pub checking: Option<usize>,
    pub found: Option<usize>,
    pub search_range: Vec<usize>,
    pub operation: SearchOp,
    pub description: String,
}

impl SearchStep {
    pub fn new(array: &[i64], operation: SearchOp, description: impl Into<String>) -> Self {
        SearchStep {
            array: array.to_vec(),
            checking: None,
            found: None,
            search_range: Vec::new(),
            operation,
            description: description.into(),
        }
    }

    pub fn checking(mut self, index: usize) -> Self {
        self.checking = Some(index);
        self
    }

    pub fn found(mut self, index: usize) -> Self {
        self.found = Some(index);
        self
    }

    /// Mark the half-open index range `start..end` as still under search
    pub fn range(mut self, start: usize, end: usize) -> Self {
        self.search_range = (start..end).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayStep {
    pub array: Vec<i64>,
    pub highlight: Vec<usize>,
    pub operation: ArrayOp,
    pub description: String,
}

impl ArrayStep {
    pub fn new(array: &[i64], operation: ArrayOp, description: impl Into<String>) -> Self {
        ArrayStep {
            array: array.to_vec(),
            highlight: Vec::new(),
            operation,
            description: description.into(),
        }
    }

    pub fn highlight(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.highlight = indices.into_iter().collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackStep {
    /// Bottom first; the top is the last element
    pub stack: Vec<i64>,
    pub highlight: Option<usize>,
    pub operation: StackOp,
    pub description: String,
}

impl StackStep {
    pub fn new(stack: &[i64], operation: StackOp, description: impl Into<String>) -> Self {
        StackStep {
            stack: stack.to_vec(),
            highlight: None,
            operation,
            description: description.into(),
        }
    }

    pub fn highlight(mut self, index: usize) -> Self {
        self.highlight = Some(index);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStep {
    /// Front first
    pub queue: Vec<i64>,
    pub highlight: Vec<usize>,
    pub front: Option<usize>,
    pub rear: Option<usize>,
    pub operation: QueueOp,
    pub description: String,
}

impl QueueStep {
    /// Build a step; `front`/`rear` are derived from the queue length.
    pub fn new(queue: &[i64], operation: QueueOp, description: impl Into<String>) -> Self {
        let (front, rear) = match queue.len() {
            0 => (None, None),
            n => (Some(0), Some(n - 1)),
        };
        QueueStep {
            queue: queue.to_vec(),
            highlight: Vec::new(),
            front,
            rear,
            operation,
            description: description.into(),
        }
    }

    pub fn highlight(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.highlight = indices.into_iter().collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStep {
    pub nodes: Vec<ListNode>,
    pub head: Option<usize>,
    pub highlight: Vec<usize>,
    pub operation: ListOp,
    pub description: String,
}

impl ListStep {
    pub fn new(
        nodes: &[ListNode],
        head: Option<usize>,
        operation: ListOp,
        description: impl Into<String>,
    ) -> Self {
        ListStep {
            nodes: nodes.to_vec(),
            head,
            highlight: Vec::new(),
            operation,
            description: description.into(),
        }
    }

    pub fn highlight(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.highlight = indices.into_iter().collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStep {
    pub nodes: Vec<TreeNode>,
    pub root: Option<usize>,
    pub highlighted: Vec<usize>,
    /// Node indices visited so far, in visit order
    pub traversal_order: Vec<usize>,
    pub operation: TreeOp,
    pub description: String,
}

impl TreeStep {
    pub fn new(
        nodes: &[TreeNode],
        root: Option<usize>,
        operation: TreeOp,
        description: impl Into<String>,
    ) -> Self {
        TreeStep {
            nodes: nodes.to_vec(),
            root,
            highlighted: Vec::new(),
            traversal_order: Vec::new(),
            operation,
            description: description.into(),
        }
    }

    pub fn highlight(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.highlighted = indices.into_iter().collect();
        self
    }

    pub fn order(mut self, order: &[usize]) -> Self {
        self.traversal_order = order.to_vec();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BstStep {
    pub nodes: Vec<TreeNode>,
    pub root: Option<usize>,
    pub highlighted: Vec<usize>,
    pub comparing: Vec<usize>,
    pub operation: BstOp,
    pub description: String,
}

impl BstStep {
    pub fn new(
        nodes: &[TreeNode],
        root: Option<usize>,
        operation: BstOp,
        description: impl Into<String>,
    ) -> Self {
        BstStep {
            nodes: nodes.to_vec(),
            root,
            highlighted: Vec::new(),
            comparing: Vec::new(),
            operation,
            description: description.into(),
        }
    }

    pub fn highlight(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.highlighted = indices.into_iter().collect();
        self
    }

    pub fn comparing(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.comparing = indices.into_iter().collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapStep {
    pub array: Vec<i64>,
    pub mode: HeapMode,
    pub highlighted: Vec<usize>,
    pub comparing: Vec<usize>,
    pub operation: HeapOp,
    pub description: String,
}

impl HeapStep {
    pub fn new(
        array: &[i64],
        mode: HeapMode,
        operation: HeapOp,
        description: impl Into<String>,
    ) -> Self {
        HeapStep {
            array: array.to_vec(),
            mode,
            highlighted: Vec::new(),
            comparing: Vec::new(),
            operation,
            description: description.into(),
        }
    }

    pub fn highlight(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.highlighted = indices.into_iter().collect();
        self
    }

    pub fn comparing(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.comparing = indices.into_iter().collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStep {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<Edge>,
    pub highlighted_nodes: Vec<usize>,
    pub highlighted_edges: Vec<(usize, usize)>,
    /// Visited node ids in visit order
    pub visited: Vec<usize>,
    pub current: Option<usize>,
    /// Tentative distances (Dijkstra only)
    pub distance: Option<BTreeMap<usize, Distance>>,
    /// Reconstructed shortest path, start first (Dijkstra with a target)
    pub path: Vec<usize>,
    pub operation: GraphOp,
    pub description: String,
}

impl GraphStep {
    pub fn new(
        nodes: &[GraphNode],
        edges: &[Edge],
        operation: GraphOp,
        description: impl Into<String>,
    ) -> Self {
        GraphStep {
            nodes: nodes.to_vec(),
            edges: edges.to_vec(),
            highlighted_nodes: Vec::new(),
            highlighted_edges: Vec::new(),
            visited: Vec::new(),
            current: None,
            distance: None,
            path: Vec::new(),
            operation,
            description: description.into(),
        }
    }

    pub fn highlight(mut self, ids: impl IntoIterator<Item = usize>) -> Self {
        self.highlighted_nodes = ids.into_iter().collect();
        self
    }

    pub fn edges(mut self, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        self.highlighted_edges = edges.into_iter().collect();
        self
    }

    pub fn visited(mut self, visited: &[usize]) -> Self {
        self.visited = visited.to_vec();
        self
    }

    pub fn current(mut self, id: usize) -> Self {
        self.current = Some(id);
        self
    }

    pub fn distance(mut self, distance: &BTreeMap<usize, Distance>) -> Self {
        self.distance = Some(distance.clone());
        self
    }

    pub fn path(mut self, path: Vec<usize>) -> Self {
        self.path = path;
        self
    }
}
