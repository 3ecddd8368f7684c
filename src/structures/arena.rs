//! Slot removal for index-addressed node vectors
//!
//! Removing a node physically shifts every slot above it down by one, so all
//! stored links and the root/head index have to be renumbered in the same
//! pass. [`remove_slot`] does that atomically: callers never observe a vector
//! where some links use the old numbering and some the new.

use super::{ListNode, TreeNode};

/// A node type whose outgoing links can be rewritten in place.
pub trait Linked {
    fn for_each_link(&mut self, f: impl FnMut(&mut Option<usize>));
}

impl Linked for ListNode {
    fn for_each_link(&mut self, mut f: impl FnMut(&mut Option<usize>)) {
        f(&mut self.next);
    }
}

impl Linked for TreeNode {
    fn for_each_link(&mut self, mut f: impl FnMut(&mut Option<usize>)) {
        f(&mut self.left);
        f(&mut self.right);
    }
}

fn renumber(link: &mut Option<usize>, removed: usize) {
    *link = match *link {
        Some(i) if i == removed => None,
        Some(i) if i > removed => Some(i - 1),
        other => other,
    };
}

/// Remove `slot` from `nodes`, renumbering every link and `root`.
///
/// Links that still pointed at the removed slot become `None`; the caller is
/// expected to have unlinked it first. Returns the removed node, or `None`
/// when `slot` is out of range (in which case nothing changes).
pub fn remove_slot<N: Linked>(
    nodes: &mut Vec<N>,
    slot: usize,
    root: &mut Option<usize>,
) -> Option<N> {
    if slot >= nodes.len() {
        return None;
    }
    let removed = nodes.remove(slot);
    for node in nodes.iter_mut() {
        node.for_each_link(|link| renumber(link, slot));
    }
    renumber(root, slot);
    Some(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renumbers_links_above_removed_slot() {
        // 3 -> 1 -> 2, stored as [1, 2, 3] with head at slot 2
        let mut nodes = vec![
            ListNode::new(1, Some(1)),
            ListNode::new(2, None),
            ListNode::new(3, Some(0)),
        ];
        let mut head = Some(2);

        // unlink slot 1 (value 2) from its predecessor first
        nodes[0].next = None;
        let removed = remove_slot(&mut nodes, 1, &mut head);

        assert_eq!(removed.map(|n| n.value), Some(2));
        assert_eq!(head, Some(1));
        assert_eq!(nodes[1], ListNode::new(3, Some(0)));
        assert_eq!(nodes[0], ListNode::new(1, None));
    }

    #[test]
    fn out_of_range_is_a_no_op() {
        let mut nodes = vec![TreeNode::leaf(4)];
        let mut root = Some(0);
        assert!(remove_slot(&mut nodes, 3, &mut root).is_none());
        assert_eq!(nodes.len(), 1);
        assert_eq!(root, Some(0));
    }

    #[test]
    fn removing_root_clears_it() {
        let mut nodes = vec![TreeNode::leaf(4)];
        let mut root = Some(0);
        remove_slot(&mut nodes, 0, &mut root);
        assert!(nodes.is_empty());
        assert_eq!(root, None);
    }
}
