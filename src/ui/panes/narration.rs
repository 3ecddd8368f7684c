//! Narration pane: the descriptions of every step shown so far

use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the narration pane.
///
/// Lists steps `0..=current`, newest last. The view follows the current
/// step unless the user has scrolled back (`scroll_back` lines above it).
pub fn render_narration_pane<S: Snapshot>(
    frame: &mut Frame,
    area: Rect,
    steps: &[S],
    current: usize,
    is_focused: bool,
    scroll_back: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Narration ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if steps.is_empty() {
        let paragraph = Paragraph::new("(nothing to narrate)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let shown = steps.len().min(current + 1);
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    let max_back = shown.saturating_sub(visible_height);
    *scroll_back = (*scroll_back).min(max_back);
    let first = max_back - *scroll_back;

    let items: Vec<ListItem> = steps[..shown]
        .iter()
        .enumerate()
        .skip(first)
        .take(visible_height)
        .map(|(i, step)| {
            let is_current = i == current;
            let marker = if is_current { "▶ " } else { "  " };
            let text_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.primary)),
                Span::styled(
                    format!("{:>3} ", i + 1),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("[{}] ", step.operation()),
                    Style::default().fg(DEFAULT_THEME.secondary),
                ),
                Span::styled(step.description().to_string(), text_style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
