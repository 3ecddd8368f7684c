//! Info pane: reference card for the running algorithm

use super::cells::{dim, heading, note};
use crate::catalog::AlgorithmInfo;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the info pane. Long descriptions wrap; `scroll_offset` counts
/// unwrapped lines.
pub fn render_info_pane(
    frame: &mut Frame,
    area: Rect,
    info: &AlgorithmInfo,
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
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    let lines = info_lines(info);
    *scroll_offset = (*scroll_offset).min(lines.len().saturating_sub(1));
    let scroll = u16::try_from(*scroll_offset).unwrap_or(u16::MAX);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

pub fn info_lines(info: &AlgorithmInfo) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading(info.name),
        note(format!("{} · {}", info.family, info.id)),
        Line::from(""),
        Line::from(info.description),
        Line::from(""),
    ];

    for (label, cost) in [("Time", info.time_note()), ("Space", info.space_note())] {
        lines.push(Line::from(vec![
            dim(format!("{:<6}", label)),
            Span::styled(
                cost.complexity,
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ),
            dim(format!("  {}", cost.title)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(heading("Pseudocode"));
    lines.extend(info.pseudocode.iter().map(|line| {
        Line::from(Span::styled(
            *line,
            Style::default().fg(DEFAULT_THEME.secondary),
        ))
    }));
    lines
}
