//! Singly linked list over an index arena
//!
//! New nodes are always appended to the node vector; only the `next` links
//! and `head` express list order. Deletion compacts the vector with
//! [`remove_slot`], so the final frame of a delete never contains an
//! orphaned slot.

use crate::snapshot::{ListOp, ListStep, StepLog};
use crate::structures::arena::remove_slot;
use crate::structures::ListNode;

pub fn insert_head(nodes: &[ListNode], head: Option<usize>, value: i64) -> Vec<ListStep> {
    let mut log = StepLog::new("list_insert_head");
    push_head(nodes, head, value, &mut log);
    log.finish()
}

fn push_head(nodes: &[ListNode], head: Option<usize>, value: i64, log: &mut StepLog<ListStep>) {
    let mut working = nodes.to_vec();

    log.push(ListStep::new(
        &working,
        head,
        ListOp::InsertHeadStart,
        format!("Inserting {} at the head", value),
    ));

    working.push(ListNode::new(value, head));
    let new_head = working.len() - 1;
    log.push(
        ListStep::new(
            &working,
            Some(new_head),
            ListOp::InsertHeadComplete,
            format!("{} inserted as new head", value),
        )
        .highlight([new_head]),
    );
}

/// Append at the tail. An empty list is handled as a head insertion.
pub fn insert_tail(nodes: &[ListNode], head: Option<usize>, value: i64) -> Vec<ListStep> {
    let mut log = StepLog::new("list_insert_tail");

    let Some(start) = head else {
        push_head(nodes, head, value, &mut log);
        return log.finish();
    };

    let mut working = nodes.to_vec();
    log.push(ListStep::new(
        &working,
        head,
        ListOp::InsertTailStart,
        format!("Finding tail to insert {}", value),
    ));

    let mut current = start;
    let mut path = vec![current];
    while let Some(next) = working[current].next {
        // a malformed cycle would otherwise never reach a tail
        if path.len() > working.len() {
            break;
        }
        current = next;
        path.push(current);
        log.push(
            ListStep::new(
                &working,
                head,
                ListOp::Traversing,
                format!("Traversing to node with value {}", working[current].value),
            )
            .highlight(path.iter().copied()),
        );
    }

    working.push(ListNode::new(value, None));
    let new_index = working.len() - 1;
    working[current].next = Some(new_index);

    log.push(
        ListStep::new(
            &working,
            head,
            ListOp::InsertTailComplete,
            format!("{} inserted at tail", value),
        )
        .highlight([new_index]),
    );

    log.finish()
}

/// Delete the first node holding `value`.
pub fn delete(nodes: &[ListNode], head: Option<usize>, value: i64) -> Vec<ListStep> {
    let mut log = StepLog::new("list_delete");

    let Some(first) = head else {
        log.push(ListStep::new(
            &[],
            None,
            ListOp::Empty,
            "List is empty. Nothing to delete",
        ));
        return log.finish();
    };

    let mut working = nodes.to_vec();
    let mut head = head;

    log.push(ListStep::new(
        &working,
        head,
        ListOp::DeleteStart,
        format!("Searching for node with value {}", value),
    ));

    if working[first].value == value {
        log.push(
            ListStep::new(
                &working,
                head,
                ListOp::DeleteHead,
                format!("Deleting head node with value {}", value),
            )
            .highlight([first]),
        );

        head = working[first].next;
        working[first].next = None;
        remove_slot(&mut working, first, &mut head);

        log.push(ListStep::new(
            &working,
            head,
            ListOp::DeleteComplete,
            format!("Deleted node with value {}", value),
        ));
        return log.finish();
    }

    let mut prev = first;
    let mut current = working[first].next;
    let mut hops = 0;
    while let Some(index) = current {
        if hops >= working.len() {
            current = None;
            break;
        }
        hops += 1;
        log.push(
            ListStep::new(
                &working,
                head,
                ListOp::Searching,
                format!("Checking node with value {}", working[index].value),
            )
            .highlight([index]),
        );
        if working[index].value == value {
            break;
        }
        prev = index;
        current = working[index].next;
    }

    let Some(target) = current else {
        log.push(ListStep::new(
            &working,
            head,
            ListOp::NotFound,
            format!("Node with value {} not found", value),
        ));
        return log.finish();
    };

    working[prev].next = working[target].next;
    working[target].next = None;
    log.push(
        ListStep::new(
            &working,
            head,
            ListOp::Unlinking,
            format!(
                "Linking node {} past node {}",
                working[prev].value, working[target].value
            ),
        )
        .highlight([prev, target]),
    );

    remove_slot(&mut working, target, &mut head);
    log.push(ListStep::new(
        &working,
        head,
        ListOp::DeleteComplete,
        format!("Deleted node with value {}", value),
    ));

    log.finish()
}

/// Reverse the list in place with a trailing pointer.
///
/// Each `reversing` frame shows the node just relinked; the final frame's
/// head is the old tail.
pub fn reverse(nodes: &[ListNode], head: Option<usize>) -> Vec<ListStep> {
    let mut log = StepLog::new("list_reverse");

    let Some(start) = head else {
        log.push(ListStep::new(
            &[],
            None,
            ListOp::Empty,
            "List is empty. Nothing to reverse",
        ));
        return log.finish();
    };

    let mut working = nodes.to_vec();
    log.push(ListStep::new(
        &working,
        head,
        ListOp::ReverseStart,
        "Starting list reversal",
    ));

    let mut prev: Option<usize> = None;
    let mut current = Some(start);
    let mut relinked = 0;

    while let Some(index) = current {
        if relinked >= working.len() {
            break;
        }
        let next = working[index].next;
        working[index].next = prev;
        relinked += 1;

        log.push(
            ListStep::new(
                &working,
                head,
                ListOp::Reversing,
                format!("Reversing pointer of node {}", working[index].value),
            )
            .highlight([index]),
        );

        prev = Some(index);
        current = next;
    }

    log.push(ListStep::new(
        &working,
        prev,
        ListOp::ReverseComplete,
        format!("List reversed successfully in {} steps", relinked),
    ));

    log.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::list_values;

    fn build(values: &[i64]) -> (Vec<ListNode>, Option<usize>) {
        let mut nodes = Vec::new();
        let mut head = None;
        for &v in values {
            let done = insert_tail(&nodes, head, v).pop().unwrap();
            nodes = done.nodes;
            head = done.head;
        }
        (nodes, head)
    }

    #[test]
    fn insert_head_appends_slot_and_moves_head() {
        let steps = insert_head(&[ListNode::new(1, None)], Some(0), 2);
        let done = steps.last().unwrap();
        assert_eq!(done.head, Some(1));
        assert_eq!(list_values(&done.nodes, done.head), vec![2, 1]);
    }

    #[test]
    fn insert_tail_on_empty_list_is_head_insert() {
        let steps = insert_tail(&[], None, 5);
        assert_eq!(steps[0].operation, ListOp::InsertHeadStart);
        assert_eq!(steps.last().unwrap().head, Some(0));
    }

    #[test]
    fn insert_tail_traverses_to_end() {
        let (nodes, head) = build(&[1, 2, 3]);
        let steps = insert_tail(&nodes, head, 4);
        let walks = steps.iter().filter(|s| s.operation == ListOp::Traversing).count();
        assert_eq!(walks, 2);
        let done = steps.last().unwrap();
        assert_eq!(list_values(&done.nodes, done.head), vec![1, 2, 3, 4]);
    }

    #[test]
    fn delete_head_compacts_and_renumbers() {
        let (nodes, head) = build(&[1, 2, 3]);
        let steps = delete(&nodes, head, 1);
        let done = steps.last().unwrap();
        assert_eq!(done.operation, ListOp::DeleteComplete);
        assert_eq!(done.nodes.len(), 2);
        assert_eq!(done.head, Some(0));
        assert_eq!(list_values(&done.nodes, done.head), vec![2, 3]);
    }

    #[test]
    fn delete_middle_unlinks_then_compacts() {
        let (nodes, head) = build(&[1, 2, 3]);
        let steps = delete(&nodes, head, 2);
        let unlink = steps.iter().find(|s| s.operation == ListOp::Unlinking).unwrap();
        assert_eq!(unlink.nodes.len(), 3);
        let done = steps.last().unwrap();
        assert_eq!(done.nodes.len(), 2);
        assert_eq!(list_values(&done.nodes, done.head), vec![1, 3]);
        assert!(done.nodes.iter().all(|n| n.next.map_or(true, |i| i < 2)));
    }

    #[test]
    fn delete_renumbers_when_head_is_a_later_slot() {
        let (nodes, head) = build(&[1, 2]);
        let prepended = insert_head(&nodes, head, 0).pop().unwrap();
        // slots: [1, 2, 0], head at slot 2
        let steps = delete(&prepended.nodes, prepended.head, 1);
        let done = steps.last().unwrap();
        assert_eq!(done.head, Some(1));
        assert_eq!(list_values(&done.nodes, done.head), vec![0, 2]);
    }

    #[test]
    fn delete_missing_and_empty() {
        let (nodes, head) = build(&[1, 2]);
        let steps = delete(&nodes, head, 9);
        assert_eq!(steps.last().unwrap().operation, ListOp::NotFound);
        assert_eq!(steps.last().unwrap().nodes, nodes);
        assert_eq!(delete(&[], None, 1)[0].operation, ListOp::Empty);
    }

    #[test]
    fn reverse_relinks_every_node() {
        let (nodes, head) = build(&[1, 2, 3]);
        let steps = reverse(&nodes, head);
        let relinks = steps.iter().filter(|s| s.operation == ListOp::Reversing).count();
        assert_eq!(relinks, 3);
        let done = steps.last().unwrap();
        assert_eq!(done.head, Some(2));
        assert_eq!(list_values(&done.nodes, done.head), vec![3, 2, 1]);
    }

    #[test]
    fn reverse_empty_list() {
        let steps = reverse(&[], None);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].operation, ListOp::Empty);
    }
}
