//! Structure pane: draws the container held by the current step
//!
//! Each step kind has its own layout:
//!
//! - sorting frames as horizontal bars, one row per element
//! - searches, arrays and queues as a row of cells with indices beneath
//! - stacks as a column with the top first
//! - linked lists as a chain followed from the head
//! - trees, search trees and heaps as an indented outline
//! - graphs as node, edge and distance listings

use super::cells::{arrow_chain, cell, cell_rows, dim, heading, note, Mark};
use crate::snapshot::{
    BstStep, GraphStep, HeapStep, ListStep, QueueStep, SearchStep, SortStep, StackStep, Step,
    TreeStep,
};
use crate::structures::{left_child, right_child, TreeNode};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

const BAR_WIDTH: u128 = 32;

/// Render the structure pane
pub fn render_structure_pane(
    frame: &mut Frame,
    area: Rect,
    step: Option<&Step>,
    title: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    let Some(step) = step else {
        let paragraph = Paragraph::new("(no steps)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let lines = structure_lines(step);

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if lines.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(lines.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}

/// Lay out one step as styled lines.
pub fn structure_lines(step: &Step) -> Vec<Line<'static>> {
    match step {
        Step::Sort(s) => sort_lines(s),
        Step::Search(s) => search_lines(s),
        Step::Array(s) => {
            if s.array.is_empty() {
                return vec![note("(empty array)")];
            }
            cell_rows(&s.array, |i| {
                if s.highlight.contains(&i) {
                    Mark::Highlight
                } else {
                    Mark::Plain
                }
            })
        }
        Step::Stack(s) => stack_lines(s),
        Step::Queue(s) => queue_lines(s),
        Step::List(s) => list_lines(s),
        Step::Tree(s) => tree_lines(s),
        Step::Bst(s) => bst_lines(s),
        Step::Heap(s) => heap_lines(s),
        Step::Graph(s) => graph_lines(s),
    }
}

fn sort_lines(s: &SortStep) -> Vec<Line<'static>> {
    let widest = s
        .array
        .iter()
        .map(|v| v.unsigned_abs())
        .max()
        .unwrap_or(0)
        .max(1);
    let label_width = s
        .array
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);

    s.array
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let mark = if s.swapping.contains(&i) {
                Mark::Swapping
            } else if s.comparing.contains(&i) {
                Mark::Comparing
            } else if s.sorted.contains(&i) {
                Mark::Sorted
            } else {
                Mark::Plain
            };
            let len = (u128::from(value.unsigned_abs()) * BAR_WIDTH / u128::from(widest)).max(1);
            Line::from(vec![
                dim(format!("{:>3} ", i)),
                Span::styled(
                    format!("{:>width$} ", value, width = label_width),
                    Style::default().fg(mark.color()),
                ),
                Span::styled(
                    "█".repeat(len as usize),
                    Style::default().fg(mark.color()),
                ),
            ])
        })
        .collect()
}

fn search_lines(s: &SearchStep) -> Vec<Line<'static>> {
    let mut lines = cell_rows(&s.array, |i| {
        if s.found == Some(i) {
            Mark::Found
        } else if s.checking == Some(i) {
            Mark::Highlight
        } else if !s.search_range.is_empty() && !s.search_range.contains(&i) {
            Mark::Dimmed
        } else {
            Mark::Plain
        }
    });

    if let (Some(first), Some(last)) = (s.search_range.first(), s.search_range.last()) {
        lines.push(Line::default());
        lines.push(note(format!("searching indices {}..={}", first, last)));
    }
    lines
}

fn stack_lines(s: &StackStep) -> Vec<Line<'static>> {
    if s.stack.is_empty() {
        return vec![note("(empty stack)")];
    }

    let width = s
        .stack
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1)
        + 2;
    let top = s.stack.len() - 1;

    let mut lines: Vec<Line> = s
        .stack
        .iter()
        .enumerate()
        .rev()
        .map(|(i, value)| {
            let mark = if s.highlight == Some(i) {
                Mark::Highlight
            } else {
                Mark::Plain
            };
            let mut spans = vec![
                dim("│"),
                Span::styled(format!("{:^width$}", value, width = width), mark.style()),
                dim("│"),
            ];
            if i == top {
                spans.push(dim(" ← top"));
            }
            Line::from(spans)
        })
        .collect();

    lines.push(Line::from(dim(format!("└{}┘", "─".repeat(width)))));
    lines
}

fn queue_lines(s: &QueueStep) -> Vec<Line<'static>> {
    if s.queue.is_empty() {
        return vec![note("(empty queue)")];
    }

    let mut lines = cell_rows(&s.queue, |i| {
        if s.highlight.contains(&i) {
            Mark::Highlight
        } else {
            Mark::Plain
        }
    });
    if let (Some(front), Some(rear)) = (s.front, s.rear) {
        lines.push(note(format!("front: index {}   rear: index {}", front, rear)));
    }
    lines
}

fn list_lines(s: &ListStep) -> Vec<Line<'static>> {
    if s.nodes.is_empty() {
        return vec![note("head → null")];
    }

    let mark = |i: usize| {
        if s.highlight.contains(&i) {
            Mark::Highlight
        } else {
            Mark::Plain
        }
    };

    let mut seen = vec![false; s.nodes.len()];
    let mut spans = vec![dim("head → ")];
    let mut cursor = s.head;
    let mut closed = true;

    while let Some(index) = cursor {
        let Some(node) = s.nodes.get(index) else {
            break;
        };
        if seen[index] {
            spans.push(dim("↺"));
            closed = false;
            break;
        }
        seen[index] = true;
        spans.push(cell(node.value, mark(index)));
        spans.push(dim(" → "));
        cursor = node.next;
    }
    if closed {
        spans.push(dim("null"));
    }

    let mut lines = vec![Line::from(spans)];

    let detached: Vec<usize> = (0..s.nodes.len()).filter(|&i| !seen[i]).collect();
    if !detached.is_empty() {
        lines.push(Line::default());
        lines.push(heading("unlinked"));
        for index in detached {
            let node = s.nodes[index];
            let next = node
                .next
                .and_then(|n| s.nodes.get(n))
                .map_or_else(|| "null".to_string(), |n| n.value.to_string());
            lines.push(Line::from(vec![
                cell(node.value, mark(index)),
                dim(format!(" → {}", next)),
            ]));
        }
    }
    lines
}

/// Indented outline of the tree under `root`.
fn outline(
    nodes: &[TreeNode],
    root: Option<usize>,
    mark: impl Fn(usize) -> Mark,
) -> Vec<Line<'static>> {
    let Some(root) = root.filter(|&r| r < nodes.len()) else {
        return vec![note("(empty tree)")];
    };

    let mut lines = Vec::new();
    // (node, prefix before the branch, branch glyph, side label, depth)
    let mut pending = vec![(root, String::new(), "", "", 0usize)];

    while let Some((index, prefix, branch, side, depth)) = pending.pop() {
        let Some(node) = nodes.get(index) else {
            continue;
        };
        lines.push(Line::from(vec![
            dim(format!("{}{}{}", prefix, branch, side)),
            cell(node.value, mark(index)),
        ]));
        if depth >= nodes.len() {
            continue;
        }

        let child_prefix = match branch {
            "" => prefix.clone(),
            "├─ " => format!("{}│  ", prefix),
            _ => format!("{}   ", prefix),
        };
        let children: Vec<(usize, &'static str)> = [(node.left, "L "), (node.right, "R ")]
            .into_iter()
            .filter_map(|(child, side)| child.map(|c| (c, side)))
            .collect();

        // pushed in reverse so the left child is drawn first
        for (position, &(child, side)) in children.iter().enumerate().rev() {
            let glyph = if position + 1 == children.len() {
                "└─ "
            } else {
                "├─ "
            };
            pending.push((child, child_prefix.clone(), glyph, side, depth + 1));
        }
    }
    lines
}

fn tree_lines(s: &TreeStep) -> Vec<Line<'static>> {
    let mut lines = outline(&s.nodes, s.root, |i| {
        if s.highlighted.contains(&i) {
            Mark::Highlight
        } else if s.traversal_order.contains(&i) {
            Mark::Visited
        } else {
            Mark::Plain
        }
    });

    if !s.traversal_order.is_empty() {
        let values = s
            .traversal_order
            .iter()
            .filter_map(|&i| s.nodes.get(i))
            .map(|n| n.value);
        lines.push(Line::default());
        lines.push(note(format!("order: {}", arrow_chain(values))));
    }
    lines
}

fn bst_lines(s: &BstStep) -> Vec<Line<'static>> {
    outline(&s.nodes, s.root, |i| {
        if s.comparing.contains(&i) {
            Mark::Comparing
        } else if s.highlighted.contains(&i) {
            Mark::Highlight
        } else {
            Mark::Plain
        }
    })
}

fn heap_lines(s: &HeapStep) -> Vec<Line<'static>> {
    let mark = |i: usize| {
        if s.comparing.contains(&i) {
            Mark::Comparing
        } else if s.highlighted.contains(&i) {
            Mark::Highlight
        } else {
            Mark::Plain
        }
    };

    let mut lines = vec![heading(format!("{}-heap", s.mode.as_str()))];
    if s.array.is_empty() {
        lines.push(note("(empty heap)"));
        return lines;
    }
    lines.extend(cell_rows(&s.array, mark));
    lines.push(Line::default());

    // implicit tree: slot i has children 2i+1 and 2i+2
    let len = s.array.len();
    let nodes: Vec<TreeNode> = s
        .array
        .iter()
        .enumerate()
        .map(|(i, &value)| TreeNode {
            value,
            left: Some(left_child(i)).filter(|&c| c < len),
            right: Some(right_child(i)).filter(|&c| c < len),
        })
        .collect();
    lines.extend(outline(&nodes, Some(0), mark));
    lines
}

fn graph_lines(s: &GraphStep) -> Vec<Line<'static>> {
    let mark = |id: usize| {
        if s.current == Some(id) {
            Mark::Highlight
        } else if s.path.contains(&id) {
            Mark::Found
        } else if s.highlighted_nodes.contains(&id) {
            Mark::Comparing
        } else if s.visited.contains(&id) {
            Mark::Visited
        } else {
            Mark::Plain
        }
    };

    let mut lines = vec![heading("nodes")];
    if s.nodes.is_empty() {
        lines.push(note("(empty graph)"));
        return lines;
    }

    let mut spans = Vec::with_capacity(s.nodes.len() * 2);
    for (i, node) in s.nodes.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let label = if node.value == node.id as i64 {
            node.id.to_string()
        } else {
            format!("{}:{}", node.id, node.value)
        };
        spans.push(cell(label, mark(node.id)));
    }
    lines.push(Line::from(spans));

    lines.push(Line::default());
    lines.push(heading("edges"));
    if s.edges.is_empty() {
        lines.push(note("(none)"));
    }
    for edge in &s.edges {
        let active = s
            .highlighted_edges
            .iter()
            .any(|&(a, b)| edge.connects(a, b));
        let style = if active {
            Style::default()
                .fg(DEFAULT_THEME.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        let weight = edge
            .weight
            .map(|w| format!("  w={}", w))
            .unwrap_or_default();
        lines.push(Line::from(Span::styled(
            format!("{} ─ {}{}", edge.from, edge.to, weight),
            style,
        )));
    }

    if let Some(distance) = &s.distance {
        lines.push(Line::default());
        lines.push(heading("distance"));
        let entries: Vec<String> = distance
            .iter()
            .map(|(id, d)| format!("{}={}", id, d))
            .collect();
        lines.push(Line::from(Span::styled(
            entries.join("  "),
            Style::default().fg(DEFAULT_THEME.fg),
        )));
    }

    if !s.visited.is_empty() {
        lines.push(Line::default());
        lines.push(note(format!("visited: {}", arrow_chain(&s.visited))));
    }
    if !s.path.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("path: {}", arrow_chain(&s.path)),
            Style::default().fg(DEFAULT_THEME.success),
        )));
    }
    lines
}
