//! Graph traversals, shortest paths and editing
//!
//! All traversals take an [`EdgeMode`]; the catalogue always passes
//! [`EdgeMode::Undirected`]. Neighbours are visited in edge-list order, which
//! is what makes the sequences reproducible.

use crate::snapshot::{GraphOp, GraphStep, StepLog};
use crate::structures::{Distance, Edge, EdgeMode, Graph, GraphNode};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::{BTreeMap, VecDeque};

fn step(graph: &Graph, op: GraphOp, description: impl Into<String>) -> GraphStep {
    GraphStep::new(&graph.nodes, &graph.edges, op, description)
}

fn invalid_start(graph: &Graph, start: usize, log: &mut StepLog<GraphStep>) {
    log.push(step(
        graph,
        GraphOp::InvalidStart,
        format!("Start node {} does not exist in the graph", start),
    ));
}

fn join(ids: &[usize]) -> String {
    ids.iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Breadth-first traversal. A node counts as discovered when it is queued,
/// so no node is queued twice.
pub fn bfs(graph: &Graph, start: usize, mode: EdgeMode) -> Vec<GraphStep> {
    let mut log = StepLog::new("graph_bfs");

    if !graph.contains(start) {
        invalid_start(graph, start, &mut log);
        return log.finish();
    }

    log.push(
        step(graph, GraphOp::Start, format!("Starting BFS from node {}", start))
            .highlight([start]),
    );

    let mut discovered = FxHashSet::default();
    discovered.insert(start);
    let mut queue = VecDeque::from([start]);
    let mut visited = Vec::new();

    while let Some(current) = queue.pop_front() {
        visited.push(current);
        log.push(
            step(graph, GraphOp::Visiting, format!("Visiting node {}", current))
                .current(current)
                .visited(&visited)
                .highlight([current]),
        );

        for (neighbor, _) in graph.neighbors(current, mode) {
            if !discovered.insert(neighbor) {
                continue;
            }
            queue.push_back(neighbor);
            log.push(
                step(
                    graph,
                    GraphOp::Discovering,
                    format!("Discovered node {} from {}", neighbor, current),
                )
                .current(current)
                .visited(&visited)
                .highlight([current, neighbor])
                .edges([(current, neighbor)]),
            );
        }
    }

    log.push(
        step(
            graph,
            GraphOp::Complete,
            format!("BFS complete. Visited order: {}", join(&visited)),
        )
        .visited(&visited),
    );
    log.finish()
}

struct DepthFirst<'a> {
    graph: &'a Graph,
    mode: EdgeMode,
    seen: FxHashSet<usize>,
    visited: Vec<usize>,
    log: StepLog<GraphStep>,
}

impl DepthFirst<'_> {
    fn visit(&mut self, current: usize) {
        self.seen.insert(current);
        self.visited.push(current);
        let frame = step(self.graph, GraphOp::Visiting, format!("Visiting node {}", current))
            .current(current)
            .visited(&self.visited)
            .highlight([current]);
        self.log.push(frame);

        for (neighbor, _) in self.graph.neighbors(current, self.mode) {
            if self.seen.contains(&neighbor) {
                continue;
            }
            let frame = step(
                self.graph,
                GraphOp::Exploring,
                format!("Exploring edge {} → {}", current, neighbor),
            )
            .current(current)
            .visited(&self.visited)
            .highlight([current, neighbor])
            .edges([(current, neighbor)]);
            self.log.push(frame);

            self.visit(neighbor);

            let frame = step(
                self.graph,
                GraphOp::Backtracking,
                format!("Backtracking to node {}", current),
            )
            .current(current)
            .visited(&self.visited)
            .highlight([current]);
            self.log.push(frame);
        }
    }
}

/// Recursive depth-first traversal with explicit backtrack frames.
pub fn dfs(graph: &Graph, start: usize, mode: EdgeMode) -> Vec<GraphStep> {
    let mut walk = DepthFirst {
        graph,
        mode,
        seen: FxHashSet::default(),
        visited: Vec::new(),
        log: StepLog::new("graph_dfs"),
    };

    if !graph.contains(start) {
        invalid_start(graph, start, &mut walk.log);
        return walk.log.finish();
    }

    walk.log.push(
        step(graph, GraphOp::Start, format!("Starting DFS from node {}", start))
            .highlight([start]),
    );

    walk.visit(start);

    let done = step(
        graph,
        GraphOp::Complete,
        format!("DFS complete. Visited order: {}", join(&walk.visited)),
    )
    .visited(&walk.visited);
    walk.log.push(done);
    walk.log.finish()
}

/// Shortest paths by repeated linear minimum scans.
///
/// With a target the run stops as soon as the target is selected and ends
/// on `path-found` or `no-path`. Without one it settles every reachable node
/// and ends on `complete`. Ties in the minimum scan go to the node listed
/// first.
pub fn dijkstra(
    graph: &Graph,
    start: usize,
    target: Option<usize>,
    mode: EdgeMode,
) -> Vec<GraphStep> {
    let mut log = StepLog::new("graph_dijkstra");

    if !graph.contains(start) {
        invalid_start(graph, start, &mut log);
        return log.finish();
    }

    let mut distance: BTreeMap<usize, Distance> = graph
        .nodes
        .iter()
        .map(|n| (n.id, Distance::Infinite))
        .collect();
    distance.insert(start, Distance::Finite(0));

    let mut parents: FxHashMap<usize, usize> = FxHashMap::default();
    let mut settled = FxHashSet::default();
    let mut visited = Vec::new();

    let opening = match target {
        Some(t) => format!(
            "Starting Dijkstra's algorithm from node {} to node {}",
            start, t
        ),
        None => format!("Starting Dijkstra's algorithm from node {}", start),
    };
    log.push(
        step(graph, GraphOp::Start, opening)
            .highlight([start])
            .distance(&distance),
    );

    let mut reached_target = false;
    loop {
        let mut best: Option<(usize, u64)> = None;
        for node in &graph.nodes {
            if settled.contains(&node.id) {
                continue;
            }
            let Some(d) = distance.get(&node.id).and_then(|d| d.finite()) else {
                continue;
            };
            if best.map_or(true, |(_, b)| d < b) {
                best = Some((node.id, d));
            }
        }
        let Some((current, current_distance)) = best else {
            break;
        };

        settled.insert(current);
        visited.push(current);
        log.push(
            step(
                graph,
                GraphOp::Visiting,
                format!(
                    "Processing node {} with distance {}",
                    current, current_distance
                ),
            )
            .current(current)
            .visited(&visited)
            .highlight([current])
            .distance(&distance),
        );

        if target == Some(current) {
            reached_target = true;
            break;
        }

        for (neighbor, edge) in graph.neighbors(current, mode) {
            if settled.contains(&neighbor) {
                continue;
            }
            let candidate = current_distance.saturating_add(u64::from(edge.weight()));
            let known = distance.get(&neighbor).copied().unwrap_or(Distance::Infinite);

            log.push(
                step(
                    graph,
                    GraphOp::Relaxing,
                    format!(
                        "Checking edge {} → {} (weight: {})",
                        current,
                        neighbor,
                        edge.weight()
                    ),
                )
                .current(current)
                .visited(&visited)
                .highlight([current, neighbor])
                .edges([(current, neighbor)])
                .distance(&distance),
            );

            if Distance::Finite(candidate) < known {
                distance.insert(neighbor, Distance::Finite(candidate));
                parents.insert(neighbor, current);
                log.push(
                    step(
                        graph,
                        GraphOp::Updated,
                        format!(
                            "Updated distance to {}: {} → {}",
                            neighbor, known, candidate
                        ),
                    )
                    .current(current)
                    .visited(&visited)
                    .highlight([neighbor])
                    .distance(&distance),
                );
            }
        }
    }

    let Some(goal) = target else {
        log.push(
            step(graph, GraphOp::Complete, "Dijkstra's algorithm complete")
                .visited(&visited)
                .distance(&distance),
        );
        return log.finish();
    };

    if !reached_target {
        log.push(
            step(
                graph,
                GraphOp::NoPath,
                format!("No path exists from node {} to node {}", start, goal),
            )
            .visited(&visited)
            .distance(&distance),
        );
        return log.finish();
    }

    let path = trace_path(&parents, start, goal);
    let total = distance.get(&goal).copied().unwrap_or(Distance::Infinite);
    let pairs: Vec<(usize, usize)> = path.windows(2).map(|w| (w[0], w[1])).collect();
    log.push(
        step(
            graph,
            GraphOp::PathFound,
            format!("Shortest path: {} (distance {})", join(&path), total),
        )
        .visited(&visited)
        .highlight(path.iter().copied())
        .edges(pairs)
        .distance(&distance)
        .path(path),
    );
    log.finish()
}

/// Follow parent pointers back from `goal`, returning the path start first.
fn trace_path(parents: &FxHashMap<usize, usize>, start: usize, goal: usize) -> Vec<usize> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        let Some(&prev) = parents.get(&current) else {
            break;
        };
        // parent chains are acyclic, but never walk more hops than there are entries
        if path.len() > parents.len() {
            break;
        }
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

/// Add a node with the next free id.
pub fn add_node(graph: &Graph, value: i64) -> Vec<GraphStep> {
    let mut log = StepLog::new("graph_add_node");
    let mut working = graph.clone();

    let id = working.next_id();
    working.nodes.push(GraphNode::new(id, value));
    log.push(
        step(
            &working,
            GraphOp::NodeAdded,
            format!("Added node {} with value {}", id, value),
        )
        .highlight([id]),
    );

    log.finish()
}

/// Add an edge after checking both endpoints exist and it is not a repeat.
///
/// An edge is a duplicate if the same pair is already joined in either
/// direction.
pub fn add_edge(graph: &Graph, edge: Edge) -> Vec<GraphStep> {
    let mut log = StepLog::new("graph_add_edge");
    let Edge { from, to, .. } = edge;

    if from == to || !graph.contains(from) || !graph.contains(to) {
        log.push(step(
            graph,
            GraphOp::InvalidEdge,
            format!(
                "Cannot add edge {} → {}: both endpoints must be distinct existing nodes",
                from, to
            ),
        ));
        return log.finish();
    }

    if graph.edges.iter().any(|e| e.connects(from, to)) {
        log.push(
            step(
                graph,
                GraphOp::DuplicateEdge,
                format!("Edge between {} and {} already exists", from, to),
            )
            .highlight([from, to])
            .edges([(from, to)]),
        );
        return log.finish();
    }

    let mut working = graph.clone();
    working.edges.push(edge);
    log.push(
        step(
            &working,
            GraphOp::EdgeAdded,
            format!("Added edge {} → {} (weight: {})", from, to, edge.weight()),
        )
        .highlight([from, to])
        .edges([(from, to)]),
    );

    log.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(n: usize, edges: &[(usize, usize, u32)]) -> Graph {
        Graph::new(
            (0..n).map(|i| GraphNode::new(i, i as i64 * 10)).collect(),
            edges.iter().map(|&(f, t, w)| Edge::weighted(f, t, w)).collect(),
        )
    }

    fn last(steps: &[GraphStep]) -> &GraphStep {
        steps.last().unwrap()
    }

    #[test]
    fn bfs_visits_level_by_level() {
        let g = graph(5, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 4, 1)]);
        let steps = bfs(&g, 0, EdgeMode::Undirected);
        assert_eq!(last(&steps).visited, vec![0, 1, 2, 3, 4]);
        let discovered = steps
            .iter()
            .filter(|s| s.operation == GraphOp::Discovering)
            .count();
        assert_eq!(discovered, 4);
    }

    #[test]
    fn bfs_follows_edges_backwards_when_undirected() {
        let g = graph(3, &[(1, 0, 1), (2, 1, 1)]);
        assert_eq!(last(&bfs(&g, 0, EdgeMode::Undirected)).visited, vec![0, 1, 2]);
        assert_eq!(last(&bfs(&g, 0, EdgeMode::Directed)).visited, vec![0]);
    }

    #[test]
    fn dfs_backtracks_after_each_explored_edge() {
        let g = graph(4, &[(0, 1, 1), (1, 2, 1), (0, 3, 1)]);
        let steps = dfs(&g, 0, EdgeMode::Undirected);
        assert_eq!(last(&steps).visited, vec![0, 1, 2, 3]);
        let explores = steps.iter().filter(|s| s.operation == GraphOp::Exploring).count();
        let backtracks = steps
            .iter()
            .filter(|s| s.operation == GraphOp::Backtracking)
            .count();
        assert_eq!(explores, 3);
        assert_eq!(explores, backtracks);
    }

    #[test]
    fn missing_start_is_a_single_step() {
        let g = graph(2, &[(0, 1, 1)]);
        for steps in [
            bfs(&g, 7, EdgeMode::Undirected),
            dfs(&g, 7, EdgeMode::Undirected),
            dijkstra(&g, 7, None, EdgeMode::Undirected),
        ] {
            assert_eq!(steps.len(), 1);
            assert_eq!(steps[0].operation, GraphOp::InvalidStart);
        }
    }

    #[test]
    fn dijkstra_prefers_lighter_detour() {
        let g = graph(3, &[(0, 1, 4), (0, 2, 1), (2, 1, 1)]);
        let steps = dijkstra(&g, 0, Some(1), EdgeMode::Undirected);
        let done = last(&steps);
        assert_eq!(done.operation, GraphOp::PathFound);
        assert_eq!(done.path, vec![0, 2, 1]);
        assert_eq!(done.highlighted_edges, vec![(0, 2), (2, 1)]);
        let distances = done.distance.as_ref().unwrap();
        assert_eq!(distances[&1], Distance::Finite(2));
    }

    #[test]
    fn dijkstra_updates_only_on_improvement() {
        let g = graph(3, &[(0, 1, 4), (0, 2, 1), (2, 1, 1)]);
        let steps = dijkstra(&g, 0, None, EdgeMode::Undirected);
        let updates = steps.iter().filter(|s| s.operation == GraphOp::Updated).count();
        // 0→1 (4), 0→2 (1), then 2→1 improves to 2
        assert_eq!(updates, 3);
        assert_eq!(last(&steps).operation, GraphOp::Complete);
    }

    #[test]
    fn dijkstra_unreachable_target() {
        let g = graph(3, &[(0, 1, 1)]);
        let steps = dijkstra(&g, 0, Some(2), EdgeMode::Undirected);
        let done = last(&steps);
        assert_eq!(done.operation, GraphOp::NoPath);
        assert_eq!(done.distance.as_ref().unwrap()[&2], Distance::Infinite);
    }

    #[test]
    fn dijkstra_target_equal_to_start() {
        let g = graph(2, &[(0, 1, 1)]);
        let done = dijkstra(&g, 0, Some(0), EdgeMode::Undirected).pop().unwrap();
        assert_eq!(done.operation, GraphOp::PathFound);
        assert_eq!(done.path, vec![0]);
    }

    #[test]
    fn add_node_uses_next_id() {
        let g = graph(2, &[]);
        let done = add_node(&g, 5).pop().unwrap();
        assert_eq!(done.nodes.len(), 3);
        assert_eq!(done.nodes[2].id, 2);
        assert_eq!(done.highlighted_nodes, vec![2]);
    }

    #[test]
    fn add_edge_validation() {
        let g = graph(3, &[(0, 1, 1)]);
        assert_eq!(add_edge(&g, Edge::new(0, 9))[0].operation, GraphOp::InvalidEdge);
        assert_eq!(add_edge(&g, Edge::new(2, 2))[0].operation, GraphOp::InvalidEdge);
        assert_eq!(add_edge(&g, Edge::new(1, 0))[0].operation, GraphOp::DuplicateEdge);
        let added = add_edge(&g, Edge::new(1, 2)).pop().unwrap();
        assert_eq!(added.operation, GraphOp::EdgeAdded);
        assert_eq!(added.edges.len(), 2);
    }
}
