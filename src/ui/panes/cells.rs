//! Span builders shared by the structure views

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::fmt::Display;

/// Visual role of one element in a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Found,
    Swapping,
    Highlight,
    Comparing,
    Sorted,
    Visited,
    Dimmed,
    Plain,
}

impl Mark {
    pub fn color(self) -> Color {
        match self {
            Mark::Found | Mark::Sorted => DEFAULT_THEME.success,
            Mark::Swapping => DEFAULT_THEME.swapping,
            Mark::Highlight => DEFAULT_THEME.highlight,
            Mark::Comparing => DEFAULT_THEME.comparing,
            Mark::Visited => DEFAULT_THEME.visited,
            Mark::Dimmed => DEFAULT_THEME.comment,
            Mark::Plain => DEFAULT_THEME.fg,
        }
    }

    /// Strong marks fill the cell, weak ones only tint the text
    pub fn style(self) -> Style {
        match self {
            Mark::Found | Mark::Swapping | Mark::Highlight | Mark::Comparing => Style::default()
                .bg(self.color())
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            _ => Style::default().fg(self.color()),
        }
    }
}

pub fn dim(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(DEFAULT_THEME.comment))
}

pub fn heading(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    ))
}

pub fn note(text: impl Into<String>) -> Line<'static> {
    Line::from(dim(text))
}

pub fn cell(value: impl Display, mark: Mark) -> Span<'static> {
    Span::styled(format!(" {} ", value), mark.style())
}

/// A row of value cells with the index of each cell centred beneath it.
pub fn cell_rows(values: &[i64], mark: impl Fn(usize) -> Mark) -> Vec<Line<'static>> {
    let mut top = Vec::with_capacity(values.len() * 2);
    let mut bottom = Vec::with_capacity(values.len() * 2);

    for (i, value) in values.iter().enumerate() {
        let width = value.to_string().len().max(i.to_string().len()) + 2;
        if i > 0 {
            top.push(Span::raw(" "));
            bottom.push(Span::raw(" "));
        }
        top.push(Span::styled(
            format!("{:^width$}", value, width = width),
            mark(i).style(),
        ));
        bottom.push(dim(format!("{:^width$}", i, width = width)));
    }

    vec![Line::from(top), Line::from(bottom)]
}

/// `a → b → c` over already formatted items
pub fn arrow_chain<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}
