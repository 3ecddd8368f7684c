// Property tests over the generators

use algoviz::catalog::{bst_from, heap_from, list_from, tree_from};
use algoviz::engine::{binary_tree, bst, graph, heap, linked_list, searching, sorting};
use algoviz::snapshot::{into_steps, SearchOp, SearchStep};
use algoviz::structures::{
    inorder_values, is_heap, Distance, Edge, EdgeMode, Graph, GraphNode, HeapMode,
};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// Sort key plus the input position it came from. Ordering looks at the key only.
#[derive(Debug, Clone, Copy)]
struct Keyed {
    key: i8,
    tag: usize,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for Keyed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

fn arb_mode() -> impl Strategy<Value = HeapMode> {
    prop_oneof![Just(HeapMode::Min), Just(HeapMode::Max)]
}

/// Small graph: node count plus weighted edges without self-loops.
fn arb_graph() -> impl Strategy<Value = Graph> {
    (1usize..7).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, 1u32..10), 0..12).prop_map(move |raw| {
            let edges = raw
                .into_iter()
                .filter(|(a, b, _)| a != b)
                .map(|(a, b, w)| Edge::weighted(a, b, w))
                .collect();
            Graph::new(
                (0..n).map(|id| GraphNode::new(id, id as i64)).collect(),
                edges,
            )
        })
    })
}

fn reachable(graph: &Graph, start: usize) -> BTreeSet<usize> {
    let mut seen = BTreeSet::from([start]);
    let mut frontier = vec![start];
    while let Some(node) = frontier.pop() {
        for edge in &graph.edges {
            let next = if edge.from == node {
                edge.to
            } else if edge.to == node {
                edge.from
            } else {
                continue;
            };
            if seen.insert(next) {
                frontier.push(next);
            }
        }
    }
    seen
}

/// All-pairs shortest paths by Floyd-Warshall, undirected.
fn shortest_from(graph: &Graph, start: usize) -> Vec<Option<u64>> {
    let n = graph.nodes.len();
    let mut dist = vec![vec![None::<u64>; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for edge in &graph.edges {
        let w = u64::from(edge.weight());
        for (a, b) in [(edge.from, edge.to), (edge.to, edge.from)] {
            if dist[a][b].map_or(true, |d| w < d) {
                dist[a][b] = Some(w);
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].map_or(true, |d| a + b < d) {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    dist.swap_remove(start)
}

fn check_search(steps: &[SearchStep], values: &[i64], target: i64) -> Result<(), TestCaseError> {
    let last = steps.last().ok_or_else(|| TestCaseError::fail("no steps"))?;
    if values.contains(&target) {
        prop_assert_eq!(last.operation, SearchOp::Found);
        let index = last.found.ok_or_else(|| TestCaseError::fail("found without index"))?;
        prop_assert_eq!(last.array[index], target);
    } else {
        prop_assert_eq!(last.operation, SearchOp::NotFound);
    }
    Ok(())
}

proptest! {
    #[test]
    fn generators_are_deterministic(values in prop::collection::vec(-50i64..50, 0..12)) {
        prop_assert_eq!(sorting::quick_sort(&values), sorting::quick_sort(&values));
        prop_assert_eq!(sorting::merge_sort(&values), sorting::merge_sort(&values));

        let first = serde_json::to_string(&into_steps(sorting::bubble_sort(&values))).unwrap();
        let second = serde_json::to_string(&into_steps(sorting::bubble_sort(&values))).unwrap();
        prop_assert_eq!(first, second);

        let insert = heap::insert(&values, 7, HeapMode::Max);
        prop_assert_eq!(insert, heap::insert(&values, 7, HeapMode::Max));
    }

    #[test]
    fn structure_generators_are_deterministic(
        values in prop::collection::vec(-50i64..50, 0..12),
        target in -50i64..50,
        mode in arb_mode(),
    ) {
        if !values.is_empty() {
            prop_assert_eq!(
                searching::linear_search(&values, target),
                searching::linear_search(&values, target)
            );
            prop_assert_eq!(
                searching::binary_search(&values, target),
                searching::binary_search(&values, target)
            );
            prop_assert_eq!(
                searching::jump_search(&values, target),
                searching::jump_search(&values, target)
            );
        }

        let (nodes, head) = list_from(&values);
        prop_assert_eq!(
            linked_list::insert_head(&nodes, head, target),
            linked_list::insert_head(&nodes, head, target)
        );
        prop_assert_eq!(
            linked_list::insert_tail(&nodes, head, target),
            linked_list::insert_tail(&nodes, head, target)
        );
        prop_assert_eq!(
            linked_list::delete(&nodes, head, target),
            linked_list::delete(&nodes, head, target)
        );
        prop_assert_eq!(linked_list::reverse(&nodes, head), linked_list::reverse(&nodes, head));

        let (nodes, root) = tree_from(&values);
        prop_assert_eq!(
            binary_tree::insert(&nodes, root, target),
            binary_tree::insert(&nodes, root, target)
        );
        prop_assert_eq!(binary_tree::inorder(&nodes, root), binary_tree::inorder(&nodes, root));
        prop_assert_eq!(binary_tree::preorder(&nodes, root), binary_tree::preorder(&nodes, root));
        prop_assert_eq!(
            binary_tree::postorder(&nodes, root),
            binary_tree::postorder(&nodes, root)
        );
        prop_assert_eq!(
            binary_tree::search(&nodes, root, target),
            binary_tree::search(&nodes, root, target)
        );

        let (nodes, root) = bst_from(&values);
        prop_assert_eq!(bst::insert(&nodes, root, target), bst::insert(&nodes, root, target));
        prop_assert_eq!(bst::search(&nodes, root, target), bst::search(&nodes, root, target));
        prop_assert_eq!(bst::delete(&nodes, root, target), bst::delete(&nodes, root, target));

        prop_assert_eq!(heap::build(&values, mode), heap::build(&values, mode));
        let array = heap_from(&values, mode);
        prop_assert_eq!(heap::extract(&array, mode), heap::extract(&array, mode));
    }

    #[test]
    fn graph_generators_are_deterministic(
        g in arb_graph(),
        start in 0usize..7,
        target in prop::option::of(0usize..7),
        directed in any::<bool>(),
    ) {
        let mode = if directed { EdgeMode::Directed } else { EdgeMode::Undirected };
        prop_assert_eq!(graph::bfs(&g, start, mode), graph::bfs(&g, start, mode));
        prop_assert_eq!(graph::dfs(&g, start, mode), graph::dfs(&g, start, mode));

        let first = graph::dijkstra(&g, start, target, mode);
        prop_assert_eq!(&first, &graph::dijkstra(&g, start, target, mode));
        let json = serde_json::to_string(&into_steps(first.clone())).unwrap();
        prop_assert_eq!(json, serde_json::to_string(&into_steps(first)).unwrap());
    }

    #[test]
    fn sorts_end_sorted(values in prop::collection::vec(-50i64..50, 0..12)) {
        let mut expected = values.clone();
        expected.sort();
        let every: Vec<usize> = (0..values.len()).collect();

        for steps in [
            sorting::bubble_sort(&values),
            sorting::quick_sort(&values),
            sorting::merge_sort(&values),
        ] {
            let last = steps.last().unwrap();
            prop_assert_eq!(&last.array, &expected);
            prop_assert_eq!(&last.sorted, &every);
        }
    }

    #[test]
    fn merge_sort_is_stable(keys in prop::collection::vec(-3i8..3, 0..14)) {
        let input: Vec<Keyed> = keys
            .iter()
            .enumerate()
            .map(|(tag, &key)| Keyed { key, tag })
            .collect();
        let last = sorting::merge_sort(&input).pop().unwrap();

        for pair in last.array.windows(2) {
            prop_assert!(pair[0].key <= pair[1].key);
            if pair[0].key == pair[1].key {
                prop_assert!(pair[0].tag < pair[1].tag);
            }
        }
    }

    #[test]
    fn searches_find_present_targets(
        values in prop::collection::vec(-10i64..10, 1..12),
        target in -10i64..10,
    ) {
        check_search(&searching::linear_search(&values, target), &values, target)?;
        check_search(&searching::binary_search(&values, target), &values, target)?;
        check_search(&searching::jump_search(&values, target), &values, target)?;
    }

    #[test]
    fn heap_operations_keep_heap_property(
        values in prop::collection::vec(-50i64..50, 0..12),
        value in -50i64..50,
        mode in arb_mode(),
    ) {
        let built = heap::build(&values, mode).pop().unwrap();
        prop_assert!(is_heap(&built.array, mode));

        let heap_array = heap_from(&values, mode);
        let inserted = heap::insert(&heap_array, value, mode).pop().unwrap();
        prop_assert!(is_heap(&inserted.array, mode));
        prop_assert_eq!(inserted.array.len(), values.len() + 1);

        let extracted = heap::extract(&heap_array, mode).pop().unwrap();
        prop_assert!(is_heap(&extracted.array, mode));
        prop_assert_eq!(extracted.array.len(), values.len().saturating_sub(1));
    }

    #[test]
    fn bst_operations_keep_inorder_sorted(
        values in prop::collection::vec(-20i64..20, 0..12),
        value in -20i64..20,
    ) {
        let (nodes, root) = bst_from(&values);
        let inorder = inorder_values(&nodes, root);
        prop_assert!(inorder.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(inorder.len(), values.len());

        let inserted = bst::insert(&nodes, root, value).pop().unwrap();
        let after = inorder_values(&inserted.nodes, inserted.root);
        prop_assert!(after.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(after.len(), values.len() + 1);

        let deleted = bst::delete(&nodes, root, value).pop().unwrap();
        let after = inorder_values(&deleted.nodes, deleted.root);
        prop_assert!(after.windows(2).all(|w| w[0] <= w[1]));
        let expected = if values.contains(&value) { values.len() - 1 } else { values.len() };
        prop_assert_eq!(after.len(), expected);
    }

    #[test]
    fn traversals_cover_the_component(graph in arb_graph()) {
        let expected = reachable(&graph, 0);
        for steps in [
            graph::bfs(&graph, 0, EdgeMode::Undirected),
            graph::dfs(&graph, 0, EdgeMode::Undirected),
        ] {
            let last = steps.last().unwrap();
            let visited: BTreeSet<usize> = last.visited.iter().copied().collect();
            prop_assert_eq!(visited.len(), last.visited.len());
            prop_assert_eq!(&visited, &expected);
            prop_assert_eq!(last.visited[0], 0);
        }
    }

    #[test]
    fn dijkstra_matches_brute_force(graph in arb_graph()) {
        let expected = shortest_from(&graph, 0);
        let last = graph::dijkstra(&graph, 0, None, EdgeMode::Undirected).pop().unwrap();
        let distance = last.distance.unwrap();

        for (id, truth) in expected.into_iter().enumerate() {
            let got = distance[&id];
            match truth {
                Some(d) => prop_assert_eq!(got, Distance::Finite(d)),
                None => prop_assert_eq!(got, Distance::Infinite),
            }
        }
    }
}
