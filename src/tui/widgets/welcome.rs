// src/tui/widgets/welcome.rs — Welcome screen shown on launch.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(10),
            Constraint::Fill(1),
        ])
        .split(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Percentage(60),
            Constraint::Fill(1),
        ])
        .split(rows[1]);

    let lines = vec![
        Line::from(Span::styled("papertalk", Theme::header())).alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(
            "Chat with your PDFs. Upload a document, get an automatic",
            Theme::text(),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "summary, then ask follow-up questions about its contents.",
            Theme::text(),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "Each tab is an independent chat with its own document and model.",
            Theme::text_dim(),
        ))
        .alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled("Press any key to start", Theme::key_hint()))
            .alignment(Alignment::Center),
    ];

    let p = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    );
    f.render_widget(p, cols[1]);
}
