//! Binary search tree over an index arena
//!
//! Ties route right on insert, so the invariant between operations is
//! `left subtree < node <= right subtree`. Delete splices out the right node
//! and then compacts the arena, so the `deleted` frame is the only one whose
//! indices differ from the input numbering.

use crate::snapshot::{BstOp, BstStep, StepLog};
use crate::structures::arena::remove_slot;
use crate::structures::TreeNode;

pub fn insert(nodes: &[TreeNode], root: Option<usize>, value: i64) -> Vec<BstStep> {
    let mut log = StepLog::new("bst_insert");
    let mut working = nodes.to_vec();

    log.push(BstStep::new(
        &working,
        root,
        BstOp::Start,
        format!("Inserting {} into BST", value),
    ));

    working.push(TreeNode::leaf(value));
    let new_index = working.len() - 1;

    let Some(mut current) = root else {
        log.push(
            BstStep::new(
                &working,
                Some(new_index),
                BstOp::InsertRoot,
                format!("Tree is empty. {} becomes root", value),
            )
            .highlight([new_index]),
        );
        return log.finish();
    };

    // each pass descends one level, so a well-formed tree ends within len hops
    for _ in 0..working.len() {
        let node = working[current];
        log.push(
            BstStep::new(
                &working,
                root,
                BstOp::Comparing,
                format!("Comparing {} with {}", value, node.value),
            )
            .comparing([current]),
        );

        let goes_left = value < node.value;
        let (op, narration, side, child) = if goes_left {
            (
                BstOp::GoLeft,
                format!("{} < {}, go left", value, node.value),
                "left",
                node.left,
            )
        } else {
            (
                BstOp::GoRight,
                format!("{} ≥ {}, go right", value, node.value),
                "right",
                node.right,
            )
        };
        log.push(BstStep::new(&working, root, op, narration).highlight([current]));

        match child {
            Some(next) => current = next,
            None => {
                if goes_left {
                    working[current].left = Some(new_index);
                } else {
                    working[current].right = Some(new_index);
                }
                log.push(
                    BstStep::new(
                        &working,
                        root,
                        BstOp::Inserted,
                        format!("Inserted {} as {} child of {}", value, side, node.value),
                    )
                    .highlight([current, new_index]),
                );
                break;
            }
        }
    }

    log.finish()
}

pub fn search(nodes: &[TreeNode], root: Option<usize>, value: i64) -> Vec<BstStep> {
    let mut log = StepLog::new("bst_search");

    log.push(BstStep::new(
        nodes,
        root,
        BstOp::Start,
        format!("Searching for {} in BST", value),
    ));

    if root.is_none() {
        log.push(BstStep::new(nodes, root, BstOp::NotFound, "Tree is empty"));
        return log.finish();
    }

    let mut current = root;
    while let Some(index) = current {
        let Some(node) = nodes.get(index) else {
            break;
        };
        log.push(
            BstStep::new(
                nodes,
                root,
                BstOp::Comparing,
                format!("Comparing {} with {}", value, node.value),
            )
            .comparing([index]),
        );

        if value == node.value {
            log.push(
                BstStep::new(nodes, root, BstOp::Found, format!("Found {}!", value))
                    .highlight([index]),
            );
            return log.finish();
        }

        if value < node.value {
            log.push(
                BstStep::new(
                    nodes,
                    root,
                    BstOp::GoLeft,
                    format!("{} < {}, search left subtree", value, node.value),
                )
                .highlight([index]),
            );
            current = node.left;
        } else {
            log.push(
                BstStep::new(
                    nodes,
                    root,
                    BstOp::GoRight,
                    format!("{} > {}, search right subtree", value, node.value),
                )
                .highlight([index]),
            );
            current = node.right;
        }
    }

    log.push(BstStep::new(
        nodes,
        root,
        BstOp::NotFound,
        format!("Value {} not found in BST", value),
    ));
    log.finish()
}

/// Where the node being deleted hangs from.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Root,
    Left(usize),
    Right(usize),
}

fn relink(nodes: &mut [TreeNode], root: &mut Option<usize>, slot: Slot, child: Option<usize>) {
    match slot {
        Slot::Root => *root = child,
        Slot::Left(parent) => nodes[parent].left = child,
        Slot::Right(parent) => nodes[parent].right = child,
    }
}

/// Delete the first node holding `value`.
///
/// Handles the three textbook cases: a leaf is dropped, a node with one
/// child is replaced by that child, and a node with two children takes its
/// inorder successor's value before the successor is spliced out.
pub fn delete(nodes: &[TreeNode], root: Option<usize>, value: i64) -> Vec<BstStep> {
    let mut log = StepLog::new("bst_delete");
    let mut working = nodes.to_vec();
    let mut root = root;

    log.push(BstStep::new(
        &working,
        root,
        BstOp::Start,
        format!("Deleting {} from BST", value),
    ));

    if root.is_none() {
        log.push(BstStep::new(&working, root, BstOp::NotFound, "Tree is empty"));
        return log.finish();
    }

    let mut slot = Slot::Root;
    let mut current = root;
    let mut target = None;
    while let Some(index) = current {
        let Some(node) = working.get(index).copied() else {
            break;
        };
        log.push(
            BstStep::new(
                &working,
                root,
                BstOp::Searching,
                format!("Searching for {}, checking {}", value, node.value),
            )
            .highlight([index]),
        );

        if value == node.value {
            target = Some((index, node));
            break;
        }
        if value < node.value {
            slot = Slot::Left(index);
            current = node.left;
        } else {
            slot = Slot::Right(index);
            current = node.right;
        }
    }

    let Some((index, node)) = target else {
        log.push(BstStep::new(
            &working,
            root,
            BstOp::NotFound,
            format!("Value {} not found in BST", value),
        ));
        return log.finish();
    };

    log.push(
        BstStep::new(
            &working,
            root,
            BstOp::Found,
            format!("Found {} to delete", value),
        )
        .highlight([index]),
    );

    let removed = match (node.left, node.right) {
        (None, None) => {
            relink(&mut working, &mut root, slot, None);
            log.push(
                BstStep::new(
                    &working,
                    root,
                    BstOp::DeleteLeaf,
                    format!("{} is a leaf node, removing it", value),
                )
                .highlight([index]),
            );
            index
        }
        (Some(child), None) | (None, Some(child)) => {
            relink(&mut working, &mut root, slot, Some(child));
            working[index].left = None;
            working[index].right = None;
            log.push(
                BstStep::new(
                    &working,
                    root,
                    BstOp::DeleteOneChild,
                    format!("{} has one child, replacing with child", value),
                )
                .highlight([index, child]),
            );
            index
        }
        (Some(_), Some(right)) => {
            let mut successor_parent = index;
            let mut successor = right;
            while let Some(left) = working[successor].left {
                successor_parent = successor;
                successor = left;
            }

            log.push(
                BstStep::new(
                    &working,
                    root,
                    BstOp::FindingSuccessor,
                    "Finding inorder successor (leftmost in right subtree)",
                )
                .highlight([index, successor]),
            );

            let replacement = working[successor].value;
            working[index].value = replacement;
            log.push(
                BstStep::new(
                    &working,
                    root,
                    BstOp::Replacing,
                    format!("Replacing {} with successor {}", value, replacement),
                )
                .highlight([index, successor]),
            );

            let orphan = working[successor].right;
            if successor_parent == index {
                working[successor_parent].right = orphan;
            } else {
                working[successor_parent].left = orphan;
            }
            working[successor].right = None;
            successor
        }
    };

    remove_slot(&mut working, removed, &mut root);
    log.push(BstStep::new(
        &working,
        root,
        BstOp::Deleted,
        format!("Deleted {}. Tree now has {} nodes", value, working.len()),
    ));

    log.finish()
}
