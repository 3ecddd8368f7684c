//! Binary tree: level-order insert, the three depth-first traversals, and
//! breadth-first search
//!
//! The tree shape is decided by position only. Insertion fills the first free
//! child slot found in level order, so the tree stays complete regardless of
//! the values inserted.

use crate::snapshot::{StepLog, TreeOp, TreeStep};
use crate::structures::TreeNode;
use std::collections::VecDeque;

/// Insert `value` into the first free child slot in level order.
pub fn insert(nodes: &[TreeNode], root: Option<usize>, value: i64) -> Vec<TreeStep> {
    let mut log = StepLog::new("tree_insert");
    let mut working = nodes.to_vec();

    log.push(TreeStep::new(
        &working,
        root,
        TreeOp::Start,
        format!("Inserting value {} into binary tree", value),
    ));

    working.push(TreeNode::leaf(value));
    let new_index = working.len() - 1;

    let Some(root_index) = root else {
        log.push(
            TreeStep::new(
                &working,
                Some(new_index),
                TreeOp::InsertRoot,
                format!("Tree is empty. {} becomes the root", value),
            )
            .highlight([new_index]),
        );
        return log.finish();
    };

    let mut queue = VecDeque::from([root_index]);
    while let Some(current) = queue.pop_front() {
        let node = working[current];
        log.push(
            TreeStep::new(
                &working,
                root,
                TreeOp::Searching,
                format!("Checking node {} for empty position", node.value),
            )
            .highlight([current]),
        );

        let side = match (node.left, node.right) {
            (None, _) => {
                working[current].left = Some(new_index);
                "left"
            }
            (Some(_), None) => {
                working[current].right = Some(new_index);
                "right"
            }
            (Some(left), Some(right)) => {
                queue.push_back(left);
                queue.push_back(right);
                continue;
            }
        };

        log.push(
            TreeStep::new(
                &working,
                root,
                TreeOp::Inserted,
                format!("Inserted {} as {} child of {}", value, side, node.value),
            )
            .highlight([current, new_index]),
        );
        break;
    }

    log.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    In,
    Pre,
    Post,
}

impl Order {
    fn name(self) -> &'static str {
        match self {
            Order::In => "Inorder",
            Order::Pre => "Preorder",
            Order::Post => "Postorder",
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            Order::In => "Left → Root → Right",
            Order::Pre => "Root → Left → Right",
            Order::Post => "Left → Right → Root",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Order::In => "tree_inorder",
            Order::Pre => "tree_preorder",
            Order::Post => "tree_postorder",
        }
    }
}

struct Walk<'a> {
    nodes: &'a [TreeNode],
    root: Option<usize>,
    order: Order,
    visited: Vec<usize>,
    log: StepLog<TreeStep>,
}

impl Walk<'_> {
    fn visit(&mut self, index: usize) {
        self.visited.push(index);
        let step = TreeStep::new(
            self.nodes,
            self.root,
            TreeOp::Visiting,
            format!("Visiting node {}", self.nodes[index].value),
        )
        .highlight([index])
        .order(&self.visited);
        self.log.push(step);
    }

    fn descend(&mut self, index: usize, child: usize, op: TreeOp) {
        let side = if op == TreeOp::TraversingLeft { "left" } else { "right" };
        let step = TreeStep::new(
            self.nodes,
            self.root,
            op,
            format!("Going to {} subtree of {}", side, self.nodes[index].value),
        )
        .highlight([index, child])
        .order(&self.visited);
        self.log.push(step);
        self.walk(Some(child));
    }

    fn walk(&mut self, index: Option<usize>) {
        let Some(index) = index else {
            return;
        };
        let Some(&node) = self.nodes.get(index) else {
            return;
        };

        if self.order == Order::Pre {
            self.visit(index);
        }
        if let Some(left) = node.left {
            self.descend(index, left, TreeOp::TraversingLeft);
        }
        if self.order == Order::In {
            self.visit(index);
        }
        if let Some(right) = node.right {
            self.descend(index, right, TreeOp::TraversingRight);
        }
        if self.order == Order::Post {
            self.visit(index);
        }
    }
}

fn traverse(nodes: &[TreeNode], root: Option<usize>, order: Order) -> Vec<TreeStep> {
    let mut walk = Walk {
        nodes,
        root,
        order,
        visited: Vec::with_capacity(nodes.len()),
        log: StepLog::new(order.label()),
    };

    walk.log.push(TreeStep::new(
        nodes,
        root,
        TreeOp::Start,
        format!("Starting {} Traversal ({})", order.name(), order.pattern()),
    ));

    walk.walk(root);

    let sequence: Vec<String> = walk
        .visited
        .iter()
        .map(|&i| nodes[i].value.to_string())
        .collect();
    let done = TreeStep::new(
        nodes,
        root,
        TreeOp::Complete,
        format!(
            "{} traversal complete: {}",
            order.name(),
            sequence.join(" → ")
        ),
    )
    .order(&walk.visited);
    walk.log.push(done);

    walk.log.finish()
}

pub fn inorder(nodes: &[TreeNode], root: Option<usize>) -> Vec<TreeStep> {
    traverse(nodes, root, Order::In)
}

pub fn preorder(nodes: &[TreeNode], root: Option<usize>) -> Vec<TreeStep> {
    traverse(nodes, root, Order::Pre)
}

pub fn postorder(nodes: &[TreeNode], root: Option<usize>) -> Vec<TreeStep> {
    traverse(nodes, root, Order::Post)
}

/// Breadth-first search for the first node holding `value`.
pub fn search(nodes: &[TreeNode], root: Option<usize>, value: i64) -> Vec<TreeStep> {
    let mut log = StepLog::new("tree_search");

    log.push(TreeStep::new(
        nodes,
        root,
        TreeOp::Start,
        format!("Searching for value {} in binary tree", value),
    ));

    let mut queue: VecDeque<usize> = root.into_iter().collect();
    while let Some(current) = queue.pop_front() {
        let Some(node) = nodes.get(current) else {
            continue;
        };
        log.push(
            TreeStep::new(
                nodes,
                root,
                TreeOp::Comparing,
                format!("Checking node {}", node.value),
            )
            .highlight([current]),
        );

        if node.value == value {
            log.push(
                TreeStep::new(nodes, root, TreeOp::Found, format!("Found {}!", value))
                    .highlight([current]),
            );
            return log.finish();
        }
        queue.extend(node.left);
        queue.extend(node.right);
    }

    log.push(TreeStep::new(
        nodes,
        root,
        TreeOp::NotFound,
        format!("Value {} not found in tree", value),
    ));
    log.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(values: &[i64]) -> (Vec<TreeNode>, Option<usize>) {
        let mut nodes = Vec::new();
        let mut root = None;
        for &v in values {
            let done = insert(&nodes, root, v).pop().unwrap();
            nodes = done.nodes;
            root = done.root;
        }
        (nodes, root)
    }

    fn values(nodes: &[TreeNode], order: &[usize]) -> Vec<i64> {
        order.iter().map(|&i| nodes[i].value).collect()
    }

    #[test]
    fn first_insert_becomes_root() {
        let steps = insert(&[], None, 8);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].operation, TreeOp::InsertRoot);
        assert_eq!(steps[1].root, Some(0));
    }

    #[test]
    fn insert_fills_level_order() {
        let (nodes, root) = build(&[1, 2, 3, 4]);
        assert_eq!(root, Some(0));
        assert_eq!(nodes[0].left, Some(1));
        assert_eq!(nodes[0].right, Some(2));
        assert_eq!(nodes[1].left, Some(3));
        assert!(nodes[2].is_leaf());
    }

    #[test]
    fn insert_probes_full_nodes_first() {
        let (nodes, root) = build(&[1, 2, 3]);
        let steps = insert(&nodes, root, 4);
        let probes: Vec<&TreeStep> = steps
            .iter()
            .filter(|s| s.operation == TreeOp::Searching)
            .collect();
        assert_eq!(probes.len(), 2);
        assert_eq!(probes[1].highlighted, vec![1]);
    }

    #[test]
    fn traversal_orders() {
        // 1 / (2 / 4, 5) , 3
        let (nodes, root) = build(&[1, 2, 3, 4, 5]);
        let last = |steps: Vec<TreeStep>| steps.last().unwrap().traversal_order.clone();
        assert_eq!(values(&nodes, &last(inorder(&nodes, root))), vec![4, 2, 5, 1, 3]);
        assert_eq!(values(&nodes, &last(preorder(&nodes, root))), vec![1, 2, 4, 5, 3]);
        assert_eq!(values(&nodes, &last(postorder(&nodes, root))), vec![4, 5, 2, 3, 1]);
    }

    #[test]
    fn traversal_order_grows_by_one_per_visit() {
        let (nodes, root) = build(&[1, 2, 3]);
        let steps = inorder(&nodes, root);
        let lengths: Vec<usize> = steps
            .iter()
            .filter(|s| s.operation == TreeOp::Visiting)
            .map(|s| s.traversal_order.len())
            .collect();
        assert_eq!(lengths, vec![1, 2, 3]);
        let descents = steps
            .iter()
            .filter(|s| matches!(s.operation, TreeOp::TraversingLeft | TreeOp::TraversingRight))
            .count();
        assert_eq!(descents, 2);
    }

    #[test]
    fn traversal_of_empty_tree() {
        let steps = preorder(&[], None);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].operation, TreeOp::Complete);
    }

    #[test]
    fn search_is_breadth_first() {
        let (nodes, root) = build(&[1, 2, 3, 4]);
        let steps = search(&nodes, root, 4);
        let checked: Vec<usize> = steps
            .iter()
            .filter(|s| s.operation == TreeOp::Comparing)
            .flat_map(|s| s.highlighted.clone())
            .collect();
        assert_eq!(checked, vec![0, 1, 2, 3]);
        assert_eq!(steps.last().unwrap().operation, TreeOp::Found);
        assert_eq!(search(&nodes, root, 9).last().unwrap().operation, TreeOp::NotFound);
    }
}
