//! Algorithm catalogue and dispatcher
//!
//! Maps an algorithm id plus raw arguments to the matching generator. The
//! container an operation starts from is never passed in directly: it is
//! rebuilt from a value list by replaying the structure's own insert (or
//! build) operation and keeping the last frame, exactly the state a user
//! would have reached by entering those values one at a time.

pub mod args;
pub mod info;
pub mod input;

pub use info::{explain, AlgorithmInfo, ComplexityNote, InfoCard, Measure};

use crate::config::Config;
use crate::engine::{
    array, binary_tree, bst, graph, heap, linked_list, queue, searching, sorting, stack,
};
use crate::error::{Error, Result};
use crate::snapshot::{into_steps, Step};
use crate::structures::{Edge, EdgeMode, Graph, GraphNode, HeapMode, ListNode, TreeNode};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Structure family an algorithm belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Sorting,
    Searching,
    Array,
    Stack,
    Queue,
    LinkedList,
    BinaryTree,
    Bst,
    Heap,
    Graph,
}

impl Family {
    pub fn name(self) -> &'static str {
        match self {
            Family::Sorting => "Sorting",
            Family::Searching => "Searching",
            Family::Array => "Array",
            Family::Stack => "Stack",
            Family::Queue => "Queue",
            Family::LinkedList => "Linked list",
            Family::BinaryTree => "Binary tree",
            Family::Bst => "Binary search tree",
            Family::Heap => "Heap",
            Family::Graph => "Graph",
        }
    }
}

macro_rules! algorithms {
    ($(
        $variant:ident => $id:literal, $family:ident, $summary:literal {
            name: $name:literal,
            time: $time:literal,
            space: $space:literal,
            description: $description:literal,
            pseudocode: [$($line:literal),+ $(,)?],
        }
    )+) => {
        /// Every generator the dispatcher can run.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Algorithm {
            $($variant,)+
        }

        impl Algorithm {
            pub const ALL: &'static [Algorithm] = &[$(Algorithm::$variant,)+];

            /// Command-line id, e.g. `bubble-sort`
            pub fn id(self) -> &'static str {
                match self {
                    $(Algorithm::$variant => $id,)+
                }
            }

            pub fn family(self) -> Family {
                match self {
                    $(Algorithm::$variant => Family::$family,)+
                }
            }

            /// One-line usage hint for `--list`
            pub fn summary(self) -> &'static str {
                match self {
                    $(Algorithm::$variant => $summary,)+
                }
            }

            /// Display name, description, pseudocode and complexities
            pub fn info(self) -> AlgorithmInfo {
                match self {
                    $(Algorithm::$variant => AlgorithmInfo {
                        id: $id,
                        name: $name,
                        family: Family::$family.name(),
                        usage: $summary,
                        description: $description,
                        pseudocode: &[$($line),+],
                        time: $time,
                        space: $space,
                    },)+
                }
            }
        }
    };
}

algorithms! {
    BubbleSort => "bubble-sort", Sorting, "--values" {
        name: "Bubble Sort",
        time: "O(n²)",
        space: "O(1)",
        description: "A simple comparison-based sorting algorithm that repeatedly steps through \
            the list, compares adjacent elements, and swaps them if they are in the wrong \
            order. The pass through the list is repeated until the list is sorted.",
        pseudocode: [
            "function bubbleSort(array):",
            "  n = length(array)",
            "  for i = 0 to n-1:",
            "    for j = 0 to n-i-2:",
            "      if array[j] > array[j+1]:",
            "        swap(array[j], array[j+1])",
            "  return array",
        ],
    }
    QuickSort => "quick-sort", Sorting, "--values" {
        name: "Quick Sort",
        time: "O(n log n)",
        space: "O(log n)",
        description: "An efficient, in-place sorting algorithm that uses a divide-and-conquer \
            strategy. It selects a pivot element and partitions the array around it, so that \
            smaller elements come before the pivot and larger ones after it.",
        pseudocode: [
            "function quickSort(array, low, high):",
            "  if low < high:",
            "    pivot = partition(array, low, high)",
            "    quickSort(array, low, pivot-1)",
            "    quickSort(array, pivot+1, high)",
            "",
            "function partition(array, low, high):",
            "  pivot = array[high]",
            "  i = low - 1",
            "  for j = low to high-1:",
            "    if array[j] < pivot:",
            "      i++",
            "      swap(array[i], array[j])",
            "  swap(array[i+1], array[high])",
            "  return i+1",
        ],
    }
    MergeSort => "merge-sort", Sorting, "--values" {
        name: "Merge Sort",
        time: "O(n log n)",
        space: "O(n)",
        description: "A stable, divide-and-conquer sorting algorithm that divides the input \
            array into two halves, recursively sorts them, and then merges the two sorted \
            halves. It runs in O(n log n) time in all cases.",
        pseudocode: [
            "function mergeSort(array):",
            "  if length(array) <= 1:",
            "    return array",
            "  mid = length(array) / 2",
            "  left = mergeSort(array[0...mid])",
            "  right = mergeSort(array[mid...end])",
            "  return merge(left, right)",
            "",
            "function merge(left, right):",
            "  result = []",
            "  while left and right not empty:",
            "    if left[0] <= right[0]:",
            "      append left[0] to result",
            "    else:",
            "      append right[0] to result",
            "  append remaining elements",
            "  return result",
        ],
    }
    LinearSearch => "linear-search", Searching, "--values --value" {
        name: "Linear Search",
        time: "O(n)",
        space: "O(1)",
        description: "Checks every element from left to right until the target is found or \
            the array ends. Works on unsorted input.",
        pseudocode: [
            "function linearSearch(array, target):",
            "  for i = 0 to n-1:",
            "    if array[i] == target:",
            "      return i",
            "  return -1",
        ],
    }
    BinarySearch => "binary-search", Searching, "--values --value" {
        name: "Binary Search",
        time: "O(log n)",
        space: "O(1)",
        description: "Repeatedly compares the target with the middle element of a sorted \
            range and discards the half that cannot contain it. Unsorted input is sorted \
            first.",
        pseudocode: [
            "function binarySearch(array, target):",
            "  left = 0, right = n-1",
            "  while left <= right:",
            "    mid = (left + right) / 2",
            "    if array[mid] == target: return mid",
            "    if array[mid] < target: left = mid + 1",
            "    else: right = mid - 1",
            "  return -1",
        ],
    }
    JumpSearch => "jump-search", Searching, "--values --value" {
        name: "Jump Search",
        time: "O(√n)",
        space: "O(1)",
        description: "Jumps ahead through a sorted array in blocks of √n until it passes the \
            target, then scans the last block linearly. Unsorted input is sorted first.",
        pseudocode: [
            "function jumpSearch(array, target):",
            "  step = floor(sqrt(n)), prev = 0",
            "  while array[min(step, n)-1] < target:",
            "    prev = step",
            "    step += floor(sqrt(n))",
            "    if prev >= n: return -1",
            "  for i = prev to min(step, n)-1:",
            "    if array[i] == target: return i",
            "  return -1",
        ],
    }
    ArrayInsert => "array-insert", Array, "[--values] --value --position" {
        name: "Array Insert",
        time: "O(n)",
        space: "O(1)",
        description: "Inserts a value at a position by shifting every later element one slot \
            to the right.",
        pseudocode: [
            "function insert(array, value, position):",
            "  append empty slot",
            "  for i = n down to position+1:",
            "    array[i] = array[i-1]",
            "  array[position] = value",
        ],
    }
    ArrayDelete => "array-delete", Array, "[--values] --position" {
        name: "Array Delete",
        time: "O(n)",
        space: "O(1)",
        description: "Removes the element at a position by shifting every later element one \
            slot to the left.",
        pseudocode: [
            "function delete(array, position):",
            "  for i = position to n-2:",
            "    array[i] = array[i+1]",
            "  remove last slot",
        ],
    }
    ArraySearch => "array-search", Array, "[--values] --value" {
        name: "Array Search",
        time: "O(n)",
        space: "O(1)",
        description: "Scans the array element by element for a value.",
        pseudocode: [
            "function search(array, value):",
            "  for i = 0 to n-1:",
            "    if array[i] == value: return i",
            "  return -1",
        ],
    }
    StackPush => "stack-push", Stack, "[--values] --value" {
        name: "Stack Push",
        time: "O(1)",
        space: "O(1)",
        description: "Places a value on top of a last-in, first-out stack. A full stack \
            reports overflow.",
        pseudocode: [
            "function push(stack, value):",
            "  if size == capacity: overflow",
            "  stack[size] = value",
            "  size++",
        ],
    }
    StackPop => "stack-pop", Stack, "[--values]" {
        name: "Stack Pop",
        time: "O(1)",
        space: "O(1)",
        description: "Removes and returns the top value of the stack. An empty stack reports \
            underflow.",
        pseudocode: [
            "function pop(stack):",
            "  if size == 0: underflow",
            "  size--",
            "  return stack[size]",
        ],
    }
    StackPeek => "stack-peek", Stack, "[--values]" {
        name: "Stack Peek",
        time: "O(1)",
        space: "O(1)",
        description: "Reads the top value without removing it.",
        pseudocode: [
            "function peek(stack):",
            "  if size == 0: empty",
            "  return stack[size-1]",
        ],
    }
    QueueEnqueue => "queue-enqueue", Queue, "[--values] --value" {
        name: "Queue Enqueue",
        time: "O(1)",
        space: "O(1)",
        description: "Adds a value at the rear of a first-in, first-out queue. A full queue \
            reports overflow.",
        pseudocode: [
            "function enqueue(queue, value):",
            "  if size == capacity: overflow",
            "  queue[rear] = value",
            "  rear++",
        ],
    }
    QueueDequeue => "queue-dequeue", Queue, "[--values]" {
        name: "Queue Dequeue",
        time: "O(n)",
        space: "O(1)",
        description: "Removes the value at the front of the queue. The array-backed queue \
            shifts the remaining values forward; an empty queue reports underflow.",
        pseudocode: [
            "function dequeue(queue):",
            "  if size == 0: underflow",
            "  value = queue[0]",
            "  shift queue[1..] one slot left",
            "  return value",
        ],
    }
    QueuePeek => "queue-peek", Queue, "[--values]" {
        name: "Queue Peek",
        time: "O(1)",
        space: "O(1)",
        description: "Reads the front value without removing it.",
        pseudocode: [
            "function peek(queue):",
            "  if size == 0: empty",
            "  return queue[0]",
        ],
    }
    ListInsertHead => "list-insert-head", LinkedList, "[--values] --value" {
        name: "Linked List Insert at Head",
        time: "O(1)",
        space: "O(1)",
        description: "Creates a node pointing at the current head and makes it the new head.",
        pseudocode: [
            "function insertHead(list, value):",
            "  node = new Node(value)",
            "  node.next = head",
            "  head = node",
        ],
    }
    ListInsertTail => "list-insert-tail", LinkedList, "[--values] --value" {
        name: "Linked List Insert at Tail",
        time: "O(n)",
        space: "O(1)",
        description: "Walks from the head to the last node and links a new node after it. An \
            empty list gets the node as its head.",
        pseudocode: [
            "function insertTail(list, value):",
            "  if head == null: return insertHead(list, value)",
            "  current = head",
            "  while current.next != null:",
            "    current = current.next",
            "  current.next = new Node(value)",
        ],
    }
    ListDelete => "list-delete", LinkedList, "[--values] --value" {
        name: "Linked List Delete",
        time: "O(n)",
        space: "O(1)",
        description: "Finds the first node holding a value and unlinks it by pointing its \
            predecessor past it.",
        pseudocode: [
            "function delete(list, value):",
            "  if head.value == value:",
            "    head = head.next",
            "    return",
            "  prev = head",
            "  while prev.next != null:",
            "    if prev.next.value == value:",
            "      prev.next = prev.next.next",
            "      return",
            "    prev = prev.next",
        ],
    }
    ListReverse => "list-reverse", LinkedList, "[--values]" {
        name: "Linked List Reverse",
        time: "O(n)",
        space: "O(1)",
        description: "Walks the list once, turning every next pointer around with a trailing \
            pointer. The old tail becomes the head.",
        pseudocode: [
            "function reverse(list):",
            "  prev = null, current = head",
            "  while current != null:",
            "    next = current.next",
            "    current.next = prev",
            "    prev = current",
            "    current = next",
            "  head = prev",
        ],
    }
    TreeInsert => "tree-insert", BinaryTree, "[--values] --value" {
        name: "Binary Tree Insert",
        time: "O(n)",
        space: "O(n)",
        description: "Places a new node in the first free child slot in level order, which \
            keeps the tree complete regardless of the values.",
        pseudocode: [
            "function insert(root, value):",
            "  if root == null: root = new Node(value)",
            "  queue = [root]",
            "  while queue not empty:",
            "    node = queue.dequeue()",
            "    if node.left == null: node.left = new Node(value); return",
            "    if node.right == null: node.right = new Node(value); return",
            "    queue.enqueue(node.left, node.right)",
        ],
    }
    TreeInorder => "tree-inorder", BinaryTree, "[--values]" {
        name: "Inorder Traversal",
        time: "O(n)",
        space: "O(h)",
        description: "Visits the left subtree, then the node, then the right subtree.",
        pseudocode: [
            "function inorder(node):",
            "  if node == null: return",
            "  inorder(node.left)",
            "  visit(node)",
            "  inorder(node.right)",
        ],
    }
    TreePreorder => "tree-preorder", BinaryTree, "[--values]" {
        name: "Preorder Traversal",
        time: "O(n)",
        space: "O(h)",
        description: "Visits the node first, then its left and right subtrees.",
        pseudocode: [
            "function preorder(node):",
            "  if node == null: return",
            "  visit(node)",
            "  preorder(node.left)",
            "  preorder(node.right)",
        ],
    }
    TreePostorder => "tree-postorder", BinaryTree, "[--values]" {
        name: "Postorder Traversal",
        time: "O(n)",
        space: "O(h)",
        description: "Visits both subtrees before the node itself.",
        pseudocode: [
            "function postorder(node):",
            "  if node == null: return",
            "  postorder(node.left)",
            "  postorder(node.right)",
            "  visit(node)",
        ],
    }
    TreeSearch => "tree-search", BinaryTree, "[--values] --value" {
        name: "Binary Tree Search",
        time: "O(n)",
        space: "O(n)",
        description: "Searches level by level, since an unordered tree gives no hint which \
            subtree holds the value.",
        pseudocode: [
            "function search(root, value):",
            "  queue = [root]",
            "  while queue not empty:",
            "    node = queue.dequeue()",
            "    if node.value == value: return node",
            "    queue.enqueue(node.left, node.right)",
            "  return null",
        ],
    }
    BstInsert => "bst-insert", Bst, "[--values] --value" {
        name: "BST Insert",
        time: "O(h)",
        space: "O(1)",
        description: "Walks down from the root, going left for smaller values and right \
            otherwise, and attaches the new node at the empty slot it reaches.",
        pseudocode: [
            "function insert(root, value):",
            "  if root == null: return new Node(value)",
            "  current = root",
            "  loop:",
            "    if value < current.value:",
            "      if current.left == null: current.left = new Node(value); return",
            "      current = current.left",
            "    else:",
            "      if current.right == null: current.right = new Node(value); return",
            "      current = current.right",
        ],
    }
    BstSearch => "bst-search", Bst, "[--values] --value" {
        name: "BST Search",
        time: "O(h)",
        space: "O(1)",
        description: "Follows a single root-to-leaf path, discarding one subtree at every \
            comparison.",
        pseudocode: [
            "function search(root, value):",
            "  current = root",
            "  while current != null:",
            "    if value == current.value: return current",
            "    current = value < current.value ? current.left : current.right",
            "  return null",
        ],
    }
    BstDelete => "bst-delete", Bst, "[--values] --value" {
        name: "BST Delete",
        time: "O(h)",
        space: "O(1)",
        description: "Removes a leaf directly, splices out a node with one child, and \
            replaces a node with two children by its inorder successor.",
        pseudocode: [
            "function delete(root, value):",
            "  node = search(root, value)",
            "  if node is a leaf: unlink node",
            "  else if node has one child: replace node with child",
            "  else:",
            "    successor = leftmost(node.right)",
            "    node.value = successor.value",
            "    unlink successor (attach its right child)",
        ],
    }
    HeapBuild => "heap-build", Heap, "[--values] [--mode min|max]" {
        name: "Build Heap",
        time: "O(n)",
        space: "O(1)",
        description: "Turns an array into a heap by sifting every internal node down, from \
            the last parent back to the root.",
        pseudocode: [
            "function buildHeap(array):",
            "  for i = n/2 - 1 down to 0:",
            "    heapifyDown(array, i)",
            "",
            "function heapifyDown(array, i):",
            "  best = i among i, left(i), right(i)",
            "  if best != i:",
            "    swap(array[i], array[best])",
            "    heapifyDown(array, best)",
        ],
    }
    HeapInsert => "heap-insert", Heap, "[--values] --value [--mode min|max]" {
        name: "Heap Insert",
        time: "O(log n)",
        space: "O(1)",
        description: "Appends the value and bubbles it up while it beats its parent.",
        pseudocode: [
            "function insert(heap, value):",
            "  append value, i = n",
            "  while i > 0 and heap[i] beats heap[parent(i)]:",
            "    swap(heap[i], heap[parent(i)])",
            "    i = parent(i)",
        ],
    }
    HeapExtract => "heap-extract", Heap, "[--values] [--mode min|max]" {
        name: "Heap Extract",
        time: "O(log n)",
        space: "O(1)",
        description: "Removes the root, moves the last element into its place and sifts it \
            down.",
        pseudocode: [
            "function extract(heap):",
            "  root = heap[0]",
            "  heap[0] = heap[n-1], remove last",
            "  heapifyDown(heap, 0)",
            "  return root",
        ],
    }
    HeapPeek => "heap-peek", Heap, "[--values] [--mode min|max]" {
        name: "Heap Peek",
        time: "O(1)",
        space: "O(1)",
        description: "Reads the root, the minimum or maximum depending on the heap mode.",
        pseudocode: [
            "function peek(heap):",
            "  if n == 0: empty",
            "  return heap[0]",
        ],
    }
    GraphBfs => "graph-bfs", Graph, "[--values] --edges [--start] [--directed]" {
        name: "Breadth-First Search",
        time: "O(V + E)",
        space: "O(V)",
        description: "Explores the graph in rings around the start node using a FIFO queue. \
            Nodes are marked when first discovered.",
        pseudocode: [
            "function bfs(graph, start):",
            "  queue = [start], seen = {start}",
            "  while queue not empty:",
            "    node = queue.dequeue()",
            "    visit(node)",
            "    for each neighbor of node:",
            "      if neighbor not in seen:",
            "        seen.add(neighbor)",
            "        queue.enqueue(neighbor)",
        ],
    }
    GraphDfs => "graph-dfs", Graph, "[--values] --edges [--start] [--directed]" {
        name: "Depth-First Search",
        time: "O(V + E)",
        space: "O(V)",
        description: "Follows one path as deep as it goes before backtracking to try the \
            next unexplored edge.",
        pseudocode: [
            "function dfs(graph, node, seen):",
            "  seen.add(node)",
            "  visit(node)",
            "  for each neighbor of node:",
            "    if neighbor not in seen:",
            "      dfs(graph, neighbor, seen)",
        ],
    }
    GraphDijkstra => "graph-dijkstra", Graph,
        "[--values] --edges [--start] [--target] [--directed]" {
        name: "Dijkstra's Shortest Path",
        time: "O(V²)",
        space: "O(V)",
        description: "Repeatedly settles the unsettled node with the smallest known \
            distance and relaxes its edges. Weights must be non-negative.",
        pseudocode: [
            "function dijkstra(graph, start):",
            "  dist[*] = ∞, dist[start] = 0",
            "  while some unsettled node has finite dist:",
            "    u = unsettled node with smallest dist",
            "    settle(u)",
            "    for each edge (u, v, w):",
            "      if dist[u] + w < dist[v]:",
            "        dist[v] = dist[u] + w",
            "        parent[v] = u",
        ],
    }
    GraphAddNode => "graph-add-node", Graph, "[--values] [--edges] --value" {
        name: "Add Graph Node",
        time: "O(1)",
        space: "O(1)",
        description: "Adds a node with the next free id.",
        pseudocode: [
            "function addNode(graph, value):",
            "  id = max id + 1",
            "  nodes.append(Node(id, value))",
        ],
    }
    GraphAddEdge => "graph-add-edge", Graph, "[--values] [--edges] --edge" {
        name: "Add Graph Edge",
        time: "O(E)",
        space: "O(1)",
        description: "Connects two existing nodes, rejecting self-loops and edges that \
            already exist in either direction.",
        pseudocode: [
            "function addEdge(graph, from, to):",
            "  if from == to or a node is missing: invalid",
            "  if an edge joins from and to: duplicate",
            "  edges.append(Edge(from, to))",
        ],
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .iter()
            .copied()
            .find(|a| a.id() == s)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Everything a generator may need. Fields an algorithm does not use are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub algorithm: Algorithm,
    /// Initial contents; `None` starts from an empty structure
    pub values: Option<Vec<i64>>,
    /// Operand: the value to insert, push, delete or search for
    pub value: Option<i64>,
    pub position: Option<usize>,
    pub mode: HeapMode,
    pub edges: Vec<Edge>,
    /// Edge added by `graph-add-edge`
    pub edge: Option<Edge>,
    pub start: usize,
    pub target: Option<usize>,
    pub edge_mode: EdgeMode,
}

impl Request {
    pub fn new(algorithm: Algorithm) -> Self {
        Request {
            algorithm,
            values: None,
            value: None,
            position: None,
            mode: HeapMode::default(),
            edges: Vec::new(),
            edge: None,
            start: 0,
            target: None,
            edge_mode: EdgeMode::default(),
        }
    }

    fn missing(&self, flag: &'static str) -> Error {
        Error::MissingArgument {
            algorithm: self.algorithm.id(),
            flag,
        }
    }

    fn value(&self) -> Result<i64> {
        self.value.ok_or_else(|| self.missing("--value"))
    }

    fn position(&self) -> Result<usize> {
        self.position.ok_or_else(|| self.missing("--position"))
    }

    /// Required value list, for sorting and searching
    fn required_values(&self, config: &Config) -> Result<&[i64]> {
        let values = self.values.as_deref().ok_or_else(|| self.missing("--values"))?;
        if values.is_empty() {
            return Err(Error::EmptyInput);
        }
        check_len(values, config.max_values)?;
        Ok(values)
    }

    /// Optional value list for structure operations
    fn initial_values(&self, max: usize) -> Result<&[i64]> {
        let values = self.values.as_deref().unwrap_or_default();
        check_len(values, max)?;
        Ok(values)
    }
}

fn check_len(values: &[i64], max: usize) -> Result<()> {
    if values.len() > max {
        return Err(Error::TooManyValues {
            got: values.len(),
            max,
        });
    }
    Ok(())
}

/// Linked list reached by appending `values` in order.
pub fn list_from(values: &[i64]) -> (Vec<ListNode>, Option<usize>) {
    let mut nodes = Vec::new();
    let mut head = None;
    for &value in values {
        if let Some(last) = linked_list::insert_tail(&nodes, head, value).pop() {
            nodes = last.nodes;
            head = last.head;
        }
    }
    (nodes, head)
}

/// Complete binary tree reached by level-order inserts of `values`.
pub fn tree_from(values: &[i64]) -> (Vec<TreeNode>, Option<usize>) {
    let mut nodes = Vec::new();
    let mut root = None;
    for &value in values {
        if let Some(last) = binary_tree::insert(&nodes, root, value).pop() {
            nodes = last.nodes;
            root = last.root;
        }
    }
    (nodes, root)
}

/// Search tree reached by inserting `values` in order.
pub fn bst_from(values: &[i64]) -> (Vec<TreeNode>, Option<usize>) {
    let mut nodes = Vec::new();
    let mut root = None;
    for &value in values {
        if let Some(last) = bst::insert(&nodes, root, value).pop() {
            nodes = last.nodes;
            root = last.root;
        }
    }
    (nodes, root)
}

/// Heap array produced by building from `values`.
pub fn heap_from(values: &[i64], mode: HeapMode) -> Vec<i64> {
    heap::build(values, mode)
        .pop()
        .map(|last| last.array)
        .unwrap_or_default()
}

/// Graph with one node per value (ids in input order) and the given edges.
///
/// Without values, nodes `0..=max endpoint` are created with their id as
/// value. Either way the graph may hold at most `max` nodes, and every edge
/// must join two distinct existing nodes.
pub fn graph_from(values: Option<&[i64]>, edges: &[Edge], max: usize) -> Result<Graph> {
    let nodes: Vec<GraphNode> = match values {
        Some(values) => {
            check_len(values, max)?;
            values
                .iter()
                .enumerate()
                .map(|(id, &value)| GraphNode::new(id, value))
                .collect()
        }
        None => {
            let mut count = 0usize;
            for edge in edges {
                let needed = edge
                    .from
                    .max(edge.to)
                    .checked_add(1)
                    .ok_or(Error::TooManyValues {
                        got: usize::MAX,
                        max,
                    })?;
                count = count.max(needed);
            }
            if count > max {
                return Err(Error::TooManyValues { got: count, max });
            }
            (0..count).map(|id| GraphNode::new(id, id as i64)).collect()
        }
    };

    let graph = Graph::new(nodes, edges.to_vec());
    for edge in edges {
        if edge.from == edge.to || !graph.contains(edge.from) || !graph.contains(edge.to) {
            return Err(Error::InvalidEdge {
                entry: format!("{}-{}", edge.from, edge.to),
            });
        }
    }
    Ok(graph)
}

/// Run the requested generator and return its frames.
pub fn run(request: &Request, config: &Config) -> Result<Vec<Step>> {
    use Algorithm::*;

    let max = config.max_values;
    let steps = match request.algorithm {
        BubbleSort => into_steps(sorting::bubble_sort(request.required_values(config)?)),
        QuickSort => into_steps(sorting::quick_sort(request.required_values(config)?)),
        MergeSort => into_steps(sorting::merge_sort(request.required_values(config)?)),

        LinearSearch => into_steps(searching::linear_search(
            request.required_values(config)?,
            request.value()?,
        )),
        BinarySearch => into_steps(searching::binary_search(
            request.required_values(config)?,
            request.value()?,
        )),
        JumpSearch => into_steps(searching::jump_search(
            request.required_values(config)?,
            request.value()?,
        )),

        ArrayInsert => into_steps(array::insert(
            request.initial_values(max)?,
            request.value()?,
            request.position()?,
        )),
        ArrayDelete => into_steps(array::delete(
            request.initial_values(max)?,
            request.position()?,
        )),
        ArraySearch => into_steps(array::search(
            request.initial_values(max)?,
            request.value()?,
        )),

        StackPush => into_steps(stack::push(
            request.initial_values(config.stack_capacity)?,
            request.value()?,
            config.stack_capacity,
        )),
        StackPop => into_steps(stack::pop(request.initial_values(config.stack_capacity)?)),
        StackPeek => into_steps(stack::peek(request.initial_values(config.stack_capacity)?)),

        QueueEnqueue => into_steps(queue::enqueue(
            request.initial_values(config.queue_capacity)?,
            request.value()?,
            config.queue_capacity,
        )),
        QueueDequeue => into_steps(queue::dequeue(
            request.initial_values(config.queue_capacity)?,
        )),
        QueuePeek => into_steps(queue::peek(request.initial_values(config.queue_capacity)?)),

        ListInsertHead | ListInsertTail | ListDelete | ListReverse => {
            let (nodes, head) = list_from(request.initial_values(max)?);
            match request.algorithm {
                ListInsertHead => {
                    into_steps(linked_list::insert_head(&nodes, head, request.value()?))
                }
                ListInsertTail => {
                    into_steps(linked_list::insert_tail(&nodes, head, request.value()?))
                }
                ListDelete => into_steps(linked_list::delete(&nodes, head, request.value()?)),
                _ => into_steps(linked_list::reverse(&nodes, head)),
            }
        }

        TreeInsert | TreeInorder | TreePreorder | TreePostorder | TreeSearch => {
            let (nodes, root) = tree_from(request.initial_values(max)?);
            match request.algorithm {
                TreeInsert => into_steps(binary_tree::insert(&nodes, root, request.value()?)),
                TreeInorder => into_steps(binary_tree::inorder(&nodes, root)),
                TreePreorder => into_steps(binary_tree::preorder(&nodes, root)),
                TreePostorder => into_steps(binary_tree::postorder(&nodes, root)),
                _ => into_steps(binary_tree::search(&nodes, root, request.value()?)),
            }
        }

        BstInsert | BstSearch | BstDelete => {
            let (nodes, root) = bst_from(request.initial_values(max)?);
            match request.algorithm {
                BstInsert => into_steps(bst::insert(&nodes, root, request.value()?)),
                BstSearch => into_steps(bst::search(&nodes, root, request.value()?)),
                _ => into_steps(bst::delete(&nodes, root, request.value()?)),
            }
        }

        HeapBuild => into_steps(heap::build(request.initial_values(max)?, request.mode)),
        HeapInsert | HeapExtract | HeapPeek => {
            let array = heap_from(request.initial_values(max)?, request.mode);
            match request.algorithm {
                HeapInsert => into_steps(heap::insert(&array, request.value()?, request.mode)),
                HeapExtract => into_steps(heap::extract(&array, request.mode)),
                _ => into_steps(heap::peek(&array, request.mode)),
            }
        }

        GraphBfs | GraphDfs | GraphDijkstra | GraphAddNode | GraphAddEdge => {
            let g = graph_from(request.values.as_deref(), &request.edges, max)?;
            let mode = request.edge_mode;
            match request.algorithm {
                GraphBfs => into_steps(graph::bfs(&g, request.start, mode)),
                GraphDfs => into_steps(graph::dfs(&g, request.start, mode)),
                GraphDijkstra => {
                    into_steps(graph::dijkstra(&g, request.start, request.target, mode))
                }
                GraphAddNode => into_steps(graph::add_node(&g, request.value()?)),
                _ => {
                    let edge = request.edge.ok_or_else(|| request.missing("--edge"))?;
                    into_steps(graph::add_edge(&g, edge))
                }
            }
        }
    };

    info!(
        algorithm = request.algorithm.id(),
        steps = steps.len(),
        "dispatched request"
    );
    Ok(steps)
}
