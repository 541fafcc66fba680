// src/tui/widgets/picker.rs — Model picker overlay.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::infra::config::ModelsConfig;
use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, models: &ModelsConfig, cursor: usize, current_id: &str) {
    let height = (models.available.len() as u16).saturating_add(2).min(area.height);
    let overlay = centered(area, 64, height);

    f.render_widget(Clear, overlay);

    let lines: Vec<Line> = models
        .available
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let marker = if entry.id == current_id { "●" } else { " " };
            let label = format!(" {marker} {:<12} {}", entry.label, entry.id);
            if i == cursor {
                Line::from(Span::styled(label, Theme::tab_active()))
            } else {
                Line::from(Span::styled(label, Theme::text()))
            }
        })
        .collect();

    let p = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" Model ", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border_focus()),
    );
    f.render_widget(p, overlay);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width.min(area.width)),
            Constraint::Fill(1),
        ])
        .split(vertical[1]);
    horizontal[1]
}
