// src/tui/widgets/chat.rs — Chat history pane.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::{Session, Speaker};
use crate::infra::config::ModelsConfig;
use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, session: &Session, models: &ModelsConfig, scroll: u16) {
    let model_label = models
        .label_for(&session.selected_model)
        .unwrap_or(&session.selected_model);
    let title = format!(" Chat with the document — {model_label} ");

    let block = Block::default()
        .title(Span::styled(title, Theme::header()))
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    if session.chat_history.is_empty() {
        let hint = if session.has_document {
            "Document loaded! Ask questions about it."
        } else {
            "Load a document first (Ctrl-O)."
        };
        let p = Paragraph::new(Span::styled(hint, Theme::text_dim())).wrap(Wrap { trim: false });
        f.render_widget(p, inner);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for entry in &session.chat_history {
        let (name, style) = match entry.speaker {
            Speaker::User => ("You", Theme::speaker_user()),
            Speaker::Assistant => ("papertalk", Theme::speaker_assistant()),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{name}: "), style),
            Span::styled(entry.text.clone(), Theme::text()),
        ]));
        lines.push(Line::default());
    }

    // Pin to the bottom, minus whatever the user scrolled back up.
    let height = inner.height;
    let total = lines.len() as u16;
    let top = total.saturating_sub(height).saturating_sub(scroll);

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((top, 0));
    f.render_widget(p, inner);
}
